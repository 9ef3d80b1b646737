//! Word Search data structures.

use serde::{Deserialize, Serialize};

/// Level payload for a word search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchContent {
    /// Letter grid, one string per row
    pub rows: Vec<String>,
    /// Words hidden in the grid (forwards or backwards)
    pub words: Vec<String>,
}

/// In-progress search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub grid: Vec<Vec<char>>,
    /// Cells picked so far, in order
    pub selection: Vec<(usize, usize)>,
    pub remaining: Vec<String>,
    pub found: Vec<String>,
    /// Cells belonging to found words, for highlighting
    pub found_cells: Vec<(usize, usize)>,
}

impl SearchState {
    pub fn new(content: &SearchContent) -> Self {
        Self {
            grid: content.rows.iter().map(|r| r.chars().collect()).collect(),
            selection: Vec::new(),
            remaining: content.words.clone(),
            found: Vec::new(),
            found_cells: Vec::new(),
        }
    }

    pub fn letter(&self, row: usize, col: usize) -> Option<char> {
        self.grid.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Letters of the current selection, in pick order.
    pub fn buffer(&self) -> String {
        self.selection
            .iter()
            .filter_map(|&(r, c)| self.letter(r, c))
            .collect()
    }

    /// Length of the longest word still hidden.
    pub fn longest_remaining(&self) -> usize {
        self.remaining
            .iter()
            .map(|w| w.chars().count())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_buffer() {
        let content = SearchContent {
            rows: vec!["CAT".into(), "XOX".into()],
            words: vec!["CAT".into(), "OX".into()],
        };
        let mut state = SearchState::new(&content);
        assert_eq!(state.letter(1, 1), Some('O'));
        assert_eq!(state.letter(2, 0), None);
        assert_eq!(state.longest_remaining(), 3);
        state.selection = vec![(0, 0), (0, 1)];
        assert_eq!(state.buffer(), "CA");
    }
}
