//! The Progress Store boundary and an in-memory implementation.

use super::SavedProgress;
use std::collections::HashMap;
use std::io;

/// Durable home of per-game progress records.
pub trait ProgressStore {
    /// The stored record for `game_id`, or `None` if the game was never saved.
    fn get_progress(&self, game_id: &str) -> io::Result<Option<SavedProgress>>;

    /// Replace the record for `progress.game_id`.
    fn set_progress(&mut self, progress: &SavedProgress) -> io::Result<()>;
}

/// Keeps records in a map. Can be told to fail reads or writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryProgressStore {
    records: HashMap<String, SavedProgress>,
    /// Every successful write, in commit order
    pub writes: Vec<SavedProgress>,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl MemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, progress: SavedProgress) -> Self {
        self.records.insert(progress.game_id.clone(), progress);
        self
    }

    pub fn record(&self, game_id: &str) -> Option<&SavedProgress> {
        self.records.get(game_id)
    }
}

impl ProgressStore for MemoryProgressStore {
    fn get_progress(&self, game_id: &str) -> io::Result<Option<SavedProgress>> {
        if self.fail_reads {
            return Err(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "progress store unavailable",
            ));
        }
        Ok(self.records.get(game_id).cloned())
    }

    fn set_progress(&mut self, progress: &SavedProgress) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "progress store unavailable",
            ));
        }
        self.records
            .insert(progress.game_id.clone(), progress.clone());
        self.writes.push(progress.clone());
        Ok(())
    }
}
