//! Word Search: find hidden words by selecting letters in a straight line.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
