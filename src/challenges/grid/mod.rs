//! Pattern Fill: equality-grid puzzles where the player completes a grid to match a target.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
