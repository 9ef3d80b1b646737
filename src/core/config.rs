//! Engine configuration.

use crate::constants::{MEMORY_REVERT_TICKS, TICK_INTERVAL_MS};
use crate::utils::persistence::arcade_dir;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Wall-clock length of one timer tick; the host calls `tick()` at this cadence
    pub tick_interval_ms: u64,

    /// Ticks a mismatched memory pair stays face up
    pub memory_revert_ticks: u32,

    /// Random seed for the engine's easy-mode moves (None = random)
    pub rng_seed: Option<u64>,

    /// Where file-backed progress stores live (None = per-user data directory)
    pub save_dir: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,
            memory_revert_ticks: MEMORY_REVERT_TICKS,
            rng_seed: None,
            save_dir: None,
        }
    }
}

impl EngineConfig {
    /// Deterministic config for tests and replays
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng_seed: Some(seed),
            ..Default::default()
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn resolve_seed(&self) -> u64 {
        self.rng_seed.unwrap_or_else(rand::random)
    }

    pub fn resolve_save_dir(&self) -> io::Result<PathBuf> {
        match &self.save_dir {
            Some(dir) => Ok(dir.clone()),
            None => arcade_dir(),
        }
    }
}
