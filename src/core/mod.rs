//! The leveled session engine: configuration, countdown timer, session state, and
//! the state machine that drives a game from loading to completion.

pub mod config;
pub mod error;
pub mod events;
pub mod session;
pub mod state;
pub mod timer;

pub use config::EngineConfig;
pub use error::SessionError;
pub use events::SessionEvent;
pub use session::GameSession;
pub use state::{GameOutcome, GameOverReason, Phase, SessionState};
pub use timer::{CountdownTimer, TimerTick};
