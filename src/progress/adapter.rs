//! Ordered, best-effort persistence in front of a [`ProgressStore`].

use super::{ProgressStore, SavedProgress};
use log::{debug, warn};
use std::collections::VecDeque;

/// Wraps a store so the session never fails because of it.
///
/// Loads that fail degrade to "no saved progress". Saves that fail stay queued
/// and are retried, oldest first, before any newer snapshot is written.
pub struct ProgressAdapter<S: ProgressStore> {
    store: S,
    outbox: VecDeque<SavedProgress>,
}

impl<S: ProgressStore> ProgressAdapter<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            outbox: VecDeque::new(),
        }
    }

    /// Saved progress for `game_id`, preferring a queued snapshot the store has not seen yet.
    pub fn load(&self, game_id: &str) -> Option<SavedProgress> {
        if let Some(queued) = self.outbox.iter().rev().find(|p| p.game_id == game_id) {
            return Some(queued.clone());
        }
        match self.store.get_progress(game_id) {
            Ok(progress) => progress,
            Err(e) => {
                warn!("Could not load progress for {}: {}", game_id, e);
                None
            }
        }
    }

    /// Queue `snapshot` behind any unsent ones and try to commit them all.
    /// Returns true when nothing is left pending.
    pub fn save(&mut self, snapshot: SavedProgress) -> bool {
        self.outbox.push_back(snapshot);
        self.flush()
    }

    /// Commit queued snapshots in order, stopping at the first failure.
    pub fn flush(&mut self) -> bool {
        while let Some(next) = self.outbox.front() {
            match self.store.set_progress(next) {
                Ok(()) => {
                    debug!(
                        "Saved {} at level {} (score {})",
                        next.game_id, next.current_level_index, next.cumulative_score
                    );
                    self.outbox.pop_front();
                }
                Err(e) => {
                    warn!(
                        "Could not save progress for {} ({} pending): {}",
                        next.game_id,
                        self.outbox.len(),
                        e
                    );
                    return false;
                }
            }
        }
        true
    }

    pub fn pending(&self) -> usize {
        self.outbox.len()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::MemoryProgressStore;

    fn snapshot(level: u32, score: u64) -> SavedProgress {
        let mut p = SavedProgress::new("maze-runner");
        p.current_level_index = level;
        p.cumulative_score = score;
        p
    }

    #[test]
    fn test_load_failure_degrades_to_none() {
        let mut store = MemoryProgressStore::new().with_record(snapshot(2, 20));
        store.fail_reads = true;
        let adapter = ProgressAdapter::new(store);
        assert_eq!(adapter.load("maze-runner"), None);
    }

    #[test]
    fn test_failed_saves_commit_in_order_later() {
        let mut store = MemoryProgressStore::new();
        store.fail_writes = true;
        let mut adapter = ProgressAdapter::new(store);

        assert!(!adapter.save(snapshot(1, 10)));
        assert!(!adapter.save(snapshot(2, 20)));
        assert_eq!(adapter.pending(), 2);
        // Queued snapshot is visible before it reaches the store
        let queued = adapter.load("maze-runner").unwrap();
        assert_eq!(queued.current_level_index, 2);
        assert_eq!(queued.cumulative_score, 20);

        adapter.store_mut().fail_writes = false;
        assert!(adapter.save(snapshot(3, 30)));
        assert_eq!(adapter.pending(), 0);

        let scores: Vec<u64> = adapter
            .store()
            .writes
            .iter()
            .map(|p| p.cumulative_score)
            .collect();
        assert_eq!(scores, vec![10, 20, 30]);
        assert_eq!(
            adapter.store().record("maze-runner").unwrap().cumulative_score,
            30
        );
    }

    #[test]
    fn test_flush_with_empty_outbox() {
        let mut adapter = ProgressAdapter::new(MemoryProgressStore::new());
        assert!(adapter.flush());
        assert!(adapter.store().writes.is_empty());
    }
}
