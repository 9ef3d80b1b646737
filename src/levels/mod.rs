//! Level content: immutable per-level rules and payloads, and where they come from.

pub mod provider;
pub mod types;

pub use provider::*;
pub use types::*;
