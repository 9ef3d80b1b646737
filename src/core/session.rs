//! The leveled session state machine.
//!
//! A [`GameSession`] is owned by whoever hosts the game screen. Every operation
//! returns the [`SessionEvent`]s it produced so the host can render them; the
//! session itself never touches UI types. Operations that make no sense in the
//! current phase (or while paused, or after `exit`) are ignored and return no
//! events.

use super::config::EngineConfig;
use super::error::SessionError;
use super::events::SessionEvent;
use super::state::{GameOutcome, GameOverReason, Phase, SessionState};
use super::timer::{CountdownTimer, TimerTick};
use crate::challenges::code::Evaluator;
use crate::challenges::{
    apply_action, apply_hint, open_level, tick_working, ActionContext, ActionEffect, GameKind,
    PlayerAction, RulesGate, Validator, Verdict, WorkingState,
};
use crate::levels::{prepare_levels, ContentProvider, Level};
use crate::progress::{
    AuxiliaryStats, ChecksummedProgressStore, ProgressAdapter, ProgressStore, SavedProgress,
};
use chrono::Utc;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

type CompletionCallback = Box<dyn FnOnce(GameOutcome)>;

/// One play-through of a game, from loading to completion or game over.
pub struct GameSession<S: ProgressStore> {
    kind: GameKind,
    validator: Validator,
    config: EngineConfig,
    state: SessionState,
    progress: ProgressAdapter<S>,
    stats: AuxiliaryStats,
    timer: CountdownTimer,
    rng: ChaCha8Rng,
    gate: Option<RulesGate>,
    evaluator: Option<Box<dyn Evaluator>>,
    on_complete: Option<CompletionCallback>,
    outcome: Option<GameOutcome>,
    closed: bool,
}

impl GameSession<ChecksummedProgressStore> {
    /// Session saving checksummed progress files under the configured save directory.
    pub fn with_default_store(game_id: &str, config: EngineConfig) -> Result<Self, SessionError> {
        let dir = config.resolve_save_dir()?;
        Self::new(game_id, ChecksummedProgressStore::new(dir), config)
    }
}

impl<S: ProgressStore> GameSession<S> {
    pub fn new(game_id: &str, store: S, config: EngineConfig) -> Result<Self, SessionError> {
        let kind = GameKind::from_id(game_id)
            .ok_or_else(|| SessionError::UnknownGame(game_id.to_string()))?;
        let rng = ChaCha8Rng::seed_from_u64(config.resolve_seed());
        Ok(Self {
            kind,
            validator: Validator::for_kind(kind),
            config,
            state: SessionState::new(kind.id()),
            progress: ProgressAdapter::new(store),
            stats: AuxiliaryStats::default(),
            timer: CountdownTimer::new(),
            rng,
            gate: kind.rules_gate(),
            evaluator: None,
            on_complete: None,
            outcome: None,
            closed: false,
        })
    }

    /// Sandbox used to run code submissions. Without one, submissions are rejected.
    pub fn with_evaluator(mut self, evaluator: Box<dyn Evaluator>) -> Self {
        self.evaluator = Some(evaluator);
        self
    }

    /// Called once, when the session reaches `GameComplete` or `GameOver`.
    pub fn on_game_complete(&mut self, callback: impl FnOnce(GameOutcome) + 'static) {
        self.on_complete = Some(Box::new(callback));
    }

    // ── Accessors ───────────────────────────────────────────────

    pub fn kind(&self) -> GameKind {
        self.kind
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> &Phase {
        &self.state.phase
    }

    pub fn working(&self) -> Option<&WorkingState> {
        self.state.working.as_ref()
    }

    pub fn current_level(&self) -> Option<&Level> {
        self.state.current_level()
    }

    pub fn rules_gate(&self) -> Option<&RulesGate> {
        self.gate.as_ref()
    }

    pub fn stats(&self) -> &AuxiliaryStats {
        &self.stats
    }

    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn pending_saves(&self) -> usize {
        self.progress.pending()
    }

    pub fn progress_store(&self) -> &S {
        self.progress.store()
    }

    pub fn progress_store_mut(&mut self) -> &mut S {
        self.progress.store_mut()
    }

    pub fn into_store(self) -> S {
        self.progress.into_store()
    }

    // ── Lifecycle ───────────────────────────────────────────────

    /// Load levels and saved progress, then show the rules gate or start play.
    pub fn load<P: ContentProvider + ?Sized>(&mut self, provider: &P) -> Vec<SessionEvent> {
        if self.closed || self.state.phase != Phase::Loading {
            return Vec::new();
        }
        let game_id = self.kind.id();
        let levels = match provider.get_levels(game_id) {
            Ok(levels) => prepare_levels(levels, self.kind.family()),
            Err(e) => {
                warn!("Could not load levels for {}: {}", game_id, e);
                Vec::new()
            }
        };
        if levels.is_empty() {
            info!("No levels to play for {}", game_id);
            self.state.phase = Phase::Empty;
            return vec![SessionEvent::NoLevels];
        }

        let mut resumed_at = None;
        if let Some(saved) = self.progress.load(game_id) {
            self.stats = saved.stats.clone();
            if saved.is_resumable(levels.len()) {
                let index = saved.current_level_index as usize;
                self.state.current_level_index = index;
                self.state.cumulative_score = saved.cumulative_score;
                resumed_at = Some(index);
            } else {
                debug!(
                    "Starting {} fresh (saved level {}, completed: {})",
                    game_id, saved.current_level_index, saved.completed
                );
            }
        }
        self.state.levels = levels;
        info!(
            "Loaded {} levels for {}, starting at level {}",
            self.state.levels.len(),
            game_id,
            self.state.current_level_index
        );

        let mut events = vec![SessionEvent::Loaded {
            level_count: self.state.levels.len(),
            resumed_at,
        }];
        if self.gate.is_some() {
            self.state.phase = Phase::RulesGate;
            events.push(SessionEvent::RulesGateShown);
        } else {
            events.extend(self.start_level());
        }
        events
    }

    /// Acknowledge the rules, or answer the gating question with `choice`.
    pub fn answer_rules_gate(&mut self, choice: Option<usize>) -> Vec<SessionEvent> {
        if self.closed || self.state.phase != Phase::RulesGate {
            return Vec::new();
        }
        let accepted = self.gate.as_ref().map_or(true, |gate| gate.accepts(choice));
        if !accepted {
            return vec![SessionEvent::RulesRejected];
        }
        let mut events = vec![SessionEvent::RulesAccepted];
        events.extend(self.start_level());
        events
    }

    /// Move on from level feedback to the next level, or finish the game.
    pub fn advance(&mut self) -> Vec<SessionEvent> {
        if self.closed || !matches!(self.state.phase, Phase::LevelFeedback { .. }) {
            return Vec::new();
        }
        if self.state.is_last_level() {
            self.state.phase = Phase::GameComplete;
            let final_score = self.state.cumulative_score;
            info!("{} complete with score {}", self.kind.id(), final_score);
            let mut events = vec![SessionEvent::GameComplete { final_score }];
            events.push(self.save());
            self.finish(true, None);
            return events;
        }

        self.state.current_level_index += 1;
        let mut events = self.start_level();
        if self.state.phase == Phase::InProgress {
            events.push(self.save());
        }
        events
    }

    /// Rebuild the current level from scratch. Score is untouched.
    pub fn restart_level(&mut self) -> Vec<SessionEvent> {
        if !self.is_playable() {
            return Vec::new();
        }
        let mut events = vec![SessionEvent::LevelRestarted {
            index: self.state.current_level_index,
        }];
        events.extend(self.start_level());
        events
    }

    pub fn pause(&mut self) -> Vec<SessionEvent> {
        if !self.is_playable() {
            return Vec::new();
        }
        self.state.paused = true;
        self.timer.pause();
        vec![SessionEvent::Paused]
    }

    pub fn resume(&mut self) -> Vec<SessionEvent> {
        if self.closed || !self.state.paused {
            return Vec::new();
        }
        self.state.paused = false;
        self.timer.resume();
        vec![SessionEvent::Resumed]
    }

    /// Leave the session: cancel the timer and push out any queued saves.
    /// Every later call is ignored.
    pub fn exit(&mut self) -> Vec<SessionEvent> {
        if self.closed {
            return Vec::new();
        }
        self.closed = true;
        self.timer.cancel();
        self.state.paused = false;

        let mut events = Vec::new();
        if !self.progress.flush() {
            warn!(
                "Leaving {} with {} unsaved snapshots",
                self.kind.id(),
                self.progress.pending()
            );
            events.push(SessionEvent::ProgressQueued {
                pending: self.progress.pending(),
            });
        }
        events.push(SessionEvent::Exited {
            phase: self.state.phase.clone(),
        });
        events
    }

    // ── Play ────────────────────────────────────────────────────

    /// Apply a player action to the current level.
    ///
    /// Rejected actions change nothing: not the working state, not the budgets,
    /// not the phase.
    pub fn apply(&mut self, action: PlayerAction) -> Vec<SessionEvent> {
        if !self.is_playable() {
            return Vec::new();
        }
        let index = self.state.current_level_index;
        let (Some(working), Some(level)) =
            (self.state.working.as_mut(), self.state.levels.get(index))
        else {
            return Vec::new();
        };

        let snapshot = working.clone();
        let mut ctx = ActionContext {
            evaluator: self.evaluator.as_deref(),
            rng: &mut self.rng,
            revert_ticks: self.config.memory_revert_ticks,
        };
        let effects = match apply_action(working, level, &action, &mut ctx) {
            Ok(effects) => effects,
            Err(reason) => {
                debug!("Rejected {:?}: {}", action, reason);
                self.state.message = Some(reason.clone());
                return vec![match action {
                    PlayerAction::Submit(_) => SessionEvent::CodeFault { message: reason },
                    _ => SessionEvent::ActionRejected { reason },
                }];
            }
        };

        let verdict = self.validator.validate(working, level);
        if let Verdict::Invalid(message) = verdict {
            *working = snapshot;
            self.state.message = Some(message.clone());
            return vec![SessionEvent::CodeFault { message }];
        }

        self.state.message = None;
        if let Some(moves) = self.state.moves_remaining.as_mut() {
            *moves = moves.saturating_sub(1);
        }
        self.stats.moves_made += 1;

        let mut events = vec![SessionEvent::ActionApplied {
            moves_remaining: self.state.moves_remaining,
        }];
        events.extend(effects.into_iter().map(SessionEvent::Effect));
        events.extend(self.settle(verdict));
        events
    }

    /// Spend a hint to move the level one unit toward its solution.
    pub fn request_hint(&mut self) -> Vec<SessionEvent> {
        if !self.is_playable() {
            return Vec::new();
        }
        if self.state.hints_remaining == 0 {
            return vec![SessionEvent::HintUnavailable];
        }
        let index = self.state.current_level_index;
        let (Some(working), Some(level)) =
            (self.state.working.as_mut(), self.state.levels.get(index))
        else {
            return Vec::new();
        };
        if !apply_hint(working, level) {
            return vec![SessionEvent::HintUnavailable];
        }
        let verdict = self.validator.validate(working, level);

        self.state.hints_remaining -= 1;
        self.stats.hints_used += 1;
        let mut events = vec![SessionEvent::HintApplied {
            hints_remaining: self.state.hints_remaining,
        }];
        events.extend(self.settle(verdict));
        events
    }

    /// One timer tick: turn back pending memory pairs, then count down.
    pub fn tick(&mut self) -> Vec<SessionEvent> {
        if !self.is_playable() {
            return Vec::new();
        }
        self.stats.seconds_played += 1;

        let mut events = Vec::new();
        if let Some((a, b)) = self.state.working.as_mut().and_then(tick_working) {
            events.push(SessionEvent::PairHidden(a, b));
        }
        match self.timer.tick() {
            TimerTick::Running { remaining } => {
                self.state.time_remaining = Some(remaining);
                events.push(SessionEvent::TimerTick { remaining });
            }
            TimerTick::Expired => {
                self.state.time_remaining = Some(0);
                events.extend(self.game_over(GameOverReason::TimeExpired));
            }
            TimerTick::Idle => {}
        }
        events
    }

    // ── Transitions ─────────────────────────────────────────────

    fn is_playable(&self) -> bool {
        !self.closed && !self.state.paused && self.state.phase == Phase::InProgress
    }

    fn start_level(&mut self) -> Vec<SessionEvent> {
        let index = self.state.current_level_index;
        let Some(level) = self.state.levels.get(index) else {
            return Vec::new();
        };
        let mut working = WorkingState::for_level(level);
        let mut events = vec![SessionEvent::LevelStarted { index }];
        if let Some(cell) = open_level(&mut working, level, &mut self.rng) {
            events.push(SessionEvent::Effect(ActionEffect::EngineMoved(cell)));
        }

        let time_limit = level.time_limit_seconds;
        let move_budget = level.move_budget;
        self.state.hints_remaining = level.hint_budget;
        self.state.moves_remaining = move_budget;
        self.state.time_remaining = time_limit;
        self.state.working = Some(working);
        self.state.phase = Phase::InProgress;
        self.state.paused = false;
        self.state.message = None;
        self.timer.arm(time_limit);
        debug!("{} level {} started", self.kind.id(), index);

        if time_limit == Some(0) {
            events.extend(self.game_over(GameOverReason::TimeExpired));
        } else if move_budget == Some(0) {
            events.extend(self.game_over(GameOverReason::MovesExhausted));
        } else if let Some(verdict) = self.opening_verdict() {
            // Content that opens already solved (empty deal, start on the goal)
            events.extend(self.settle(verdict));
        }
        events
    }

    fn opening_verdict(&self) -> Option<Verdict> {
        let level = self.state.current_level()?;
        let working = self.state.working.as_ref()?;
        match self.validator.validate(working, level) {
            Verdict::InProgress => None,
            verdict => Some(verdict),
        }
    }

    fn settle(&mut self, verdict: Verdict) -> Vec<SessionEvent> {
        match verdict {
            Verdict::Solved { credit_percent } => self.solve_level(credit_percent),
            Verdict::Failed => self.game_over(GameOverReason::Defeated),
            Verdict::InProgress if self.state.moves_remaining == Some(0) => {
                self.game_over(GameOverReason::MovesExhausted)
            }
            _ => Vec::new(),
        }
    }

    fn solve_level(&mut self, credit_percent: u32) -> Vec<SessionEvent> {
        let index = self.state.current_level_index;
        let reward = self
            .state
            .current_level()
            .map_or(0, |level| level.reward_for(credit_percent));
        self.timer.cancel();
        self.state.cumulative_score += reward as u64;
        self.stats.levels_solved += 1;
        self.state.phase = Phase::LevelFeedback {
            reward,
            credit_percent,
        };
        info!(
            "{} level {} solved for {} ({}%), score {}",
            self.kind.id(),
            index,
            reward,
            credit_percent,
            self.state.cumulative_score
        );
        vec![
            SessionEvent::LevelSolved {
                index,
                reward,
                cumulative_score: self.state.cumulative_score,
            },
            self.save(),
        ]
    }

    fn game_over(&mut self, reason: GameOverReason) -> Vec<SessionEvent> {
        self.timer.cancel();
        self.state.phase = Phase::GameOver(reason);
        self.stats.games_lost += 1;
        let final_score = self.state.cumulative_score;
        info!(
            "{} over at level {}: {:?}",
            self.kind.id(),
            self.state.current_level_index,
            reason
        );
        let events = vec![SessionEvent::GameOver {
            reason,
            final_score,
        }, self.save()];
        self.finish(false, Some(reason));
        events
    }

    fn finish(&mut self, won: bool, reason: Option<GameOverReason>) {
        let outcome = GameOutcome {
            game_id: self.kind.id().to_string(),
            won,
            final_score: self.state.cumulative_score,
            reason,
        };
        if let Some(callback) = self.on_complete.take() {
            callback(outcome.clone());
        }
        self.outcome = Some(outcome);
    }

    // ── Persistence ─────────────────────────────────────────────

    /// Where a reloaded session should pick up, given the current phase.
    fn snapshot(&self) -> SavedProgress {
        let index = self.state.current_level_index;
        let (level_index, completed) = match self.state.phase {
            Phase::LevelFeedback { .. } if !self.state.is_last_level() => (index + 1, false),
            Phase::LevelFeedback { .. } | Phase::GameComplete => (index, true),
            _ => (index, false),
        };
        SavedProgress {
            game_id: self.kind.id().to_string(),
            current_level_index: level_index as u32,
            cumulative_score: self.state.cumulative_score,
            stats: self.stats.clone(),
            completed,
            updated_at: Utc::now(),
        }
    }

    fn save(&mut self) -> SessionEvent {
        let snapshot = self.snapshot();
        if self.progress.save(snapshot) {
            SessionEvent::ProgressSaved
        } else {
            SessionEvent::ProgressQueued {
                pending: self.progress.pending(),
            }
        }
    }
}
