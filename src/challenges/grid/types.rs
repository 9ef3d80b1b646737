//! Pattern Fill data structures.

use serde::{Deserialize, Serialize};

/// Level payload for a grid-fill puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridContent {
    /// Starting grid. `Some` cells are givens and cannot be changed.
    pub initial: Vec<Vec<Option<u8>>>,
    /// The solution, cell for cell.
    pub target: Vec<Vec<u8>>,
}

/// In-progress grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    pub cells: Vec<Vec<Option<u8>>>,
    /// true for givens
    pub fixed: Vec<Vec<bool>>,
}

impl GridState {
    pub fn new(content: &GridContent) -> Self {
        let fixed = content
            .initial
            .iter()
            .map(|row| row.iter().map(Option::is_some).collect())
            .collect();
        Self {
            cells: content.initial.clone(),
            fixed,
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self, row: usize) -> usize {
        self.cells.get(row).map_or(0, Vec::len)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.cells.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        col < self.cols(row)
    }

    pub fn is_fixed(&self, row: usize, col: usize) -> bool {
        self.fixed
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Number of cells the player is allowed to write.
    pub fn open_cell_count(&self) -> usize {
        self.fixed.iter().flatten().filter(|&&f| !f).count()
    }
}
