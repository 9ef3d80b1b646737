//! Memory Match: pairing puzzles where face-down tiles are flipped two at a time.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
