//! Tic-Tac-Toe: the engine plays one side using exhaustive minimax.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
