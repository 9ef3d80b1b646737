//! Session state and phases.

use crate::challenges::WorkingState;
use crate::levels::Level;

/// State-machine phase of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Loading,
    /// Waiting for the player to acknowledge the rules or answer the gating question
    RulesGate,
    InProgress,
    /// The current level was just cleared
    LevelFeedback { reward: u32, credit_percent: u32 },
    /// Every level cleared
    GameComplete,
    GameOver(GameOverReason),
    /// Nothing to play: no levels, or they could not be loaded
    Empty,
}

impl Phase {
    /// No further play is possible in this session.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::GameComplete | Phase::GameOver(_) | Phase::Empty)
    }
}

/// Why a session ended without clearing every level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    TimeExpired,
    MovesExhausted,
    /// The opponent won, or the round ended without meeting the win condition
    Defeated,
}

/// Passed to the completion callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub game_id: String,
    pub won: bool,
    pub final_score: u64,
    pub reason: Option<GameOverReason>,
}

/// Everything a renderer needs to draw the session.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub game_id: String,
    pub levels: Vec<Level>,
    /// Always a valid index into `levels` once levels are loaded
    pub current_level_index: usize,
    /// Never decreases within a session
    pub cumulative_score: u64,
    pub hints_remaining: u32,
    /// `None` on levels without a move budget
    pub moves_remaining: Option<u32>,
    /// `None` on untimed levels
    pub time_remaining: Option<u32>,
    pub phase: Phase,
    pub working: Option<WorkingState>,
    pub paused: bool,
    /// Player-facing message from the last rejected action or code fault
    pub message: Option<String>,
}

impl SessionState {
    pub fn new(game_id: &str) -> Self {
        Self {
            game_id: game_id.to_string(),
            levels: Vec::new(),
            current_level_index: 0,
            cumulative_score: 0,
            hints_remaining: 0,
            moves_remaining: None,
            time_remaining: None,
            phase: Phase::Loading,
            working: None,
            paused: false,
            message: None,
        }
    }

    pub fn current_level(&self) -> Option<&Level> {
        self.levels.get(self.current_level_index)
    }

    pub fn is_last_level(&self) -> bool {
        self.current_level_index + 1 >= self.levels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_loading() {
        let state = SessionState::new("maze-runner");
        assert_eq!(state.phase, Phase::Loading);
        assert!(state.current_level().is_none());
        assert!(!state.phase.is_terminal());
    }

    #[test]
    fn test_terminal_phases() {
        assert!(Phase::GameComplete.is_terminal());
        assert!(Phase::GameOver(GameOverReason::TimeExpired).is_terminal());
        assert!(Phase::Empty.is_terminal());
        assert!(!Phase::LevelFeedback {
            reward: 10,
            credit_percent: 100
        }
        .is_terminal());
    }
}
