//! Progress record persisted between sessions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Running totals kept alongside the resume point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuxiliaryStats {
    pub levels_solved: u32,
    pub hints_used: u32,
    pub moves_made: u64,
    pub games_lost: u32,
    pub seconds_played: u64,
}

/// Snapshot of one game's progress. Saves are whole snapshots, never deltas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedProgress {
    pub game_id: String,
    pub current_level_index: u32,
    pub cumulative_score: u64,
    #[serde(default)]
    pub stats: AuxiliaryStats,
    pub completed: bool,
    pub updated_at: DateTime<Utc>,
}

impl SavedProgress {
    pub fn new(game_id: &str) -> Self {
        Self {
            game_id: game_id.to_string(),
            current_level_index: 0,
            cumulative_score: 0,
            stats: AuxiliaryStats::default(),
            completed: false,
            updated_at: Utc::now(),
        }
    }

    /// True when a session should pick up at `current_level_index` instead of level 0.
    pub fn is_resumable(&self, level_count: usize) -> bool {
        !self.completed
            && self.current_level_index > 0
            && (self.current_level_index as usize) < level_count
    }
}
