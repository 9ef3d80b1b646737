//! Maze Runner: path puzzles where the player walks from a start cell to a goal cell.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
