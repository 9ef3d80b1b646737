//! Code challenges (Bug Fix, Syntax Fix, Algorithm Race): the player submits a program
//! whose captured output must match the expected output.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
