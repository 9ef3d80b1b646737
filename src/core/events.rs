//! Events returned by session operations.
//!
//! The presentation layer maps these to messages and effects; the engine never
//! touches UI types.

use super::state::{GameOverReason, Phase};
use crate::challenges::ActionEffect;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    // ── Loading ─────────────────────────────────────────────────
    /// Levels loaded; `resumed_at` is set when saved progress was picked up.
    Loaded {
        level_count: usize,
        resumed_at: Option<usize>,
    },

    /// The catalogue for this game is empty or could not be loaded.
    NoLevels,

    // ── Rules gate ──────────────────────────────────────────────
    RulesGateShown,
    RulesAccepted,
    /// Wrong answer to the gating question; the gate stays up.
    RulesRejected,

    // ── Play ────────────────────────────────────────────────────
    LevelStarted {
        index: usize,
    },
    LevelRestarted {
        index: usize,
    },

    /// A player action changed the working state.
    ActionApplied {
        moves_remaining: Option<u32>,
    },

    /// Family-specific side effect of an accepted action.
    Effect(ActionEffect),

    /// Illegal action; nothing changed.
    ActionRejected {
        reason: String,
    },

    /// Submitted code could not be judged; nothing changed.
    CodeFault {
        message: String,
    },

    /// A mismatched memory pair was turned back over.
    PairHidden(usize, usize),

    HintApplied {
        hints_remaining: u32,
    },
    /// No hints left, or nothing a hint may reveal.
    HintUnavailable,

    TimerTick {
        remaining: u32,
    },

    Paused,
    Resumed,

    // ── Transitions ─────────────────────────────────────────────
    LevelSolved {
        index: usize,
        reward: u32,
        cumulative_score: u64,
    },
    GameComplete {
        final_score: u64,
    },
    GameOver {
        reason: GameOverReason,
        final_score: u64,
    },

    // ── Persistence ─────────────────────────────────────────────
    ProgressSaved,
    /// The store refused the save; it is queued and retried in order.
    ProgressQueued {
        pending: usize,
    },

    Exited {
        phase: Phase,
    },
}
