//! Resumable per-game progress: the record, the stores that hold it, and the
//! ordered-save adapter the session writes through.

pub mod adapter;
pub mod checksum_store;
pub mod json_store;
pub mod store;
pub mod types;

pub use adapter::ProgressAdapter;
pub use checksum_store::ChecksummedProgressStore;
pub use json_store::JsonProgressStore;
pub use store::{MemoryProgressStore, ProgressStore};
pub use types::{AuxiliaryStats, SavedProgress};
