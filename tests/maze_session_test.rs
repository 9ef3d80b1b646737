//! Integration test: Maze Runner through the session engine
//!
//! Walks the 5x6 maze from the corner to the goal, with a wall beside the start.

use arcade::challenges::maze::{Direction, MazeContent};
use arcade::{
    EngineConfig, GameSession, Level, LevelContent, MemoryProgressStore, Phase, PlayerAction,
    SessionEvent, StaticContentProvider, WinCondition, WorkingState,
};

fn maze_level(index: u32) -> Level {
    Level {
        index,
        time_limit_seconds: None,
        move_budget: Some(12),
        hint_budget: 2,
        xp_reward: 50,
        win_condition: WinCondition::Solve,
        content: LevelContent::Maze(MazeContent {
            width: 6,
            height: 5,
            walls: vec![(1, 0)],
            start: (0, 0),
            goal: (4, 5),
        }),
    }
}

fn start_session() -> GameSession<MemoryProgressStore> {
    let provider =
        StaticContentProvider::new().with_levels("maze-runner", vec![maze_level(0), maze_level(1)]);
    let mut session =
        GameSession::new("maze-runner", MemoryProgressStore::new(), EngineConfig::seeded(11))
            .unwrap();
    let events = session.load(&provider);
    assert!(events.contains(&SessionEvent::LevelStarted { index: 0 }));
    session
}

fn position(session: &GameSession<MemoryProgressStore>) -> (usize, usize) {
    match session.working() {
        Some(WorkingState::Maze(maze)) => maze.position,
        other => panic!("expected maze, got {:?}", other),
    }
}

#[test]
fn test_wall_move_rejected_without_decrement() {
    let mut session = start_session();
    let events = session.apply(PlayerAction::Step(Direction::Down));
    assert!(matches!(
        events.as_slice(),
        [SessionEvent::ActionRejected { .. }]
    ));
    assert_eq!(position(&session), (0, 0));
    assert_eq!(session.state().moves_remaining, Some(12));
    assert_eq!(session.phase(), &Phase::InProgress);
    assert!(session.state().message.is_some());
}

#[test]
fn test_nine_moves_reach_goal() {
    let mut session = start_session();
    session.apply(PlayerAction::Step(Direction::Down));

    let route = [Direction::Right; 5]
        .into_iter()
        .chain([Direction::Down; 4]);
    let mut last = Vec::new();
    for (i, dir) in route.enumerate() {
        last = session.apply(PlayerAction::Step(dir));
        assert_eq!(session.state().moves_remaining, Some(12 - (i as u32 + 1)));
    }

    assert_eq!(position(&session), (4, 5));
    assert!(last.contains(&SessionEvent::LevelSolved {
        index: 0,
        reward: 50,
        cumulative_score: 50
    }));
    assert_eq!(
        session.phase(),
        &Phase::LevelFeedback {
            reward: 50,
            credit_percent: 100
        }
    );
    assert_eq!(session.stats().moves_made, 9);
}

#[test]
fn test_edge_of_maze_rejected() {
    let mut session = start_session();
    let before = session.working().cloned();
    let events = session.apply(PlayerAction::Step(Direction::Up));
    assert!(matches!(
        events.as_slice(),
        [SessionEvent::ActionRejected { reason }] if reason.contains("leave")
    ));
    assert_eq!(session.working().cloned(), before);
}

#[test]
fn test_hint_reveals_route_without_moving() {
    let mut session = start_session();
    let events = session.request_hint();
    assert_eq!(events, vec![SessionEvent::HintApplied { hints_remaining: 1 }]);
    match session.working() {
        Some(WorkingState::Maze(maze)) => {
            assert_eq!(maze.position, (0, 0));
            assert_eq!(maze.revealed, vec![(0, 1)]);
        }
        other => panic!("expected maze, got {:?}", other),
    }
    assert_eq!(session.state().moves_remaining, Some(12));
}

#[test]
fn test_start_on_goal_opens_into_feedback() {
    let mut level = maze_level(0);
    level.content = LevelContent::Maze(MazeContent {
        width: 3,
        height: 3,
        walls: vec![],
        start: (0, 0),
        goal: (0, 0),
    });
    let provider =
        StaticContentProvider::new().with_levels("maze-runner", vec![level, maze_level(1)]);
    let mut session =
        GameSession::new("maze-runner", MemoryProgressStore::new(), EngineConfig::seeded(11))
            .unwrap();
    session.load(&provider);
    assert_eq!(
        session.phase(),
        &Phase::LevelFeedback {
            reward: 50,
            credit_percent: 100
        }
    );
    assert_eq!(session.state().moves_remaining, Some(12));
    assert_eq!(session.state().cumulative_score, 50);

    let events = session.advance();
    assert!(events.contains(&SessionEvent::LevelStarted { index: 1 }));
    assert_eq!(session.phase(), &Phase::InProgress);
}
