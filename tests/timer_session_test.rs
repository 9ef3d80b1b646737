//! Integration test: timed levels, pausing, and the completion callback

use arcade::challenges::grid::GridContent;
use arcade::{
    EngineConfig, GameOutcome, GameOverReason, GameSession, Level, LevelContent,
    MemoryProgressStore, Phase, PlayerAction, SessionEvent, StaticContentProvider, WinCondition,
};
use std::cell::RefCell;
use std::rc::Rc;

fn timed_level(seconds: u32) -> Level {
    Level {
        index: 0,
        time_limit_seconds: Some(seconds),
        move_budget: None,
        hint_budget: 0,
        xp_reward: 30,
        win_condition: WinCondition::Solve,
        content: LevelContent::Grid(GridContent {
            initial: vec![vec![None, None], vec![Some(3), None]],
            target: vec![vec![1, 2], vec![3, 4]],
        }),
    }
}

fn start_session(
    seconds: u32,
) -> (
    GameSession<MemoryProgressStore>,
    Rc<RefCell<Vec<GameOutcome>>>,
) {
    let provider =
        StaticContentProvider::new().with_levels("pattern-fill", vec![timed_level(seconds)]);
    let mut session =
        GameSession::new("pattern-fill", MemoryProgressStore::new(), EngineConfig::seeded(3))
            .unwrap();
    let outcomes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&outcomes);
    session.on_game_complete(move |outcome| sink.borrow_mut().push(outcome));
    session.load(&provider);
    (session, outcomes)
}

#[test]
fn test_five_idle_ticks_end_the_game() {
    let (mut session, outcomes) = start_session(5);

    for remaining in (1..5).rev() {
        assert_eq!(session.tick(), vec![SessionEvent::TimerTick { remaining }]);
        assert_eq!(session.phase(), &Phase::InProgress);
    }
    let events = session.tick();
    assert!(events.contains(&SessionEvent::GameOver {
        reason: GameOverReason::TimeExpired,
        final_score: 0
    }));
    assert_eq!(session.phase(), &Phase::GameOver(GameOverReason::TimeExpired));
    assert_eq!(session.state().time_remaining, Some(0));

    // Timer is gone: more ticks do nothing
    assert!(session.tick().is_empty());

    let outcomes = outcomes.borrow();
    assert_eq!(outcomes.len(), 1);
    assert!(!outcomes[0].won);
    assert_eq!(outcomes[0].final_score, 0);

    let saved = session.progress_store().record("pattern-fill").unwrap();
    assert_eq!(saved.stats.games_lost, 1);
    assert_eq!(saved.stats.seconds_played, 5);
    assert!(!saved.completed);
}

#[test]
fn test_paused_ticks_do_not_count() {
    let (mut session, outcomes) = start_session(2);
    session.pause();
    for _ in 0..10 {
        assert!(session.tick().is_empty());
    }
    session.resume();
    session.tick();
    assert_eq!(session.phase(), &Phase::InProgress);
    assert_eq!(session.state().time_remaining, Some(1));
    assert!(outcomes.borrow().is_empty());
}

#[test]
fn test_solving_cancels_timer() {
    let (mut session, outcomes) = start_session(3);
    session.apply(PlayerAction::SetCell {
        row: 0,
        col: 0,
        value: 1,
    });
    session.apply(PlayerAction::SetCell {
        row: 0,
        col: 1,
        value: 2,
    });
    let events = session.apply(PlayerAction::SetCell {
        row: 1,
        col: 1,
        value: 4,
    });
    assert!(events.contains(&SessionEvent::LevelSolved {
        index: 0,
        reward: 30,
        cumulative_score: 30
    }));
    assert!(session.tick().is_empty());

    session.advance();
    assert_eq!(session.phase(), &Phase::GameComplete);
    let outcomes = outcomes.borrow();
    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].won);
    assert_eq!(outcomes[0].final_score, 30);
}

#[test]
fn test_fixed_cell_write_rejected() {
    let (mut session, _) = start_session(5);
    let events = session.apply(PlayerAction::SetCell {
        row: 1,
        col: 0,
        value: 9,
    });
    assert!(matches!(
        events.as_slice(),
        [SessionEvent::ActionRejected { .. }]
    ));
    assert_eq!(session.stats().moves_made, 0);
}
