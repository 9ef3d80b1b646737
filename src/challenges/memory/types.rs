//! Memory Match data structures.

use crate::constants::DEFAULT_CONTENT_SEED;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Level payload for a pairing puzzle. Each value is dealt twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairsContent {
    pub values: Vec<String>,
    /// Shuffle seed; the deal is a pure function of the content.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// A single tile on the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub value: String,
    pub revealed: bool,
    /// Permanently face up once its pair is found.
    pub matched: bool,
}

/// A mismatched pair waiting to be turned back over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRevert {
    pub first: usize,
    pub second: usize,
    pub ticks_left: u32,
}

/// In-progress table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairsState {
    pub tiles: Vec<Tile>,
    /// First tile of the current pick, if one is face up
    pub first_pick: Option<usize>,
    pub pending_revert: Option<PendingRevert>,
}

impl PairsState {
    /// Deal two copies of every value and shuffle them deterministically.
    pub fn deal(content: &PairsContent) -> Self {
        let mut tiles: Vec<Tile> = content
            .values
            .iter()
            .flat_map(|v| [v.clone(), v.clone()])
            .map(|value| Tile {
                value,
                revealed: false,
                matched: false,
            })
            .collect();
        let mut rng = ChaCha8Rng::seed_from_u64(content.seed.unwrap_or(DEFAULT_CONTENT_SEED));
        tiles.shuffle(&mut rng);
        Self {
            tiles,
            first_pick: None,
            pending_revert: None,
        }
    }

    pub fn pair_count(&self) -> usize {
        self.tiles.len() / 2
    }

    pub fn matched_pairs(&self) -> usize {
        self.tiles.iter().filter(|t| t.matched).count() / 2
    }

    pub fn all_matched(&self) -> bool {
        self.tiles.iter().all(|t| t.matched)
    }
}
