//! Arcade - Leveled Mini-Game Session Engine
//!
//! Level content, per-family puzzle rules and validators, a minimax opponent,
//! the session state machine, and resumable progress persistence. Rendering is
//! left to the host: every session operation returns the events it produced.

pub mod challenges;
pub mod constants;
pub mod core;
pub mod levels;
pub mod progress;
pub mod utils;

pub use challenges::{Family, GameKind, PlayerAction, RulesGate, Verdict, WorkingState};
pub use crate::core::{
    EngineConfig, GameOutcome, GameOverReason, GameSession, Phase, SessionError, SessionEvent,
    SessionState,
};
pub use levels::{
    ContentProvider, JsonContentProvider, Level, LevelContent, StaticContentProvider, WinCondition,
};
pub use progress::{
    ChecksummedProgressStore, JsonProgressStore, MemoryProgressStore, ProgressStore, SavedProgress,
};
