//! Tic-Tac-Toe data structures.

use serde::{Deserialize, Serialize};

/// Cells on the 3x3 board, indexed 0..9 row-major.
pub const CELL_COUNT: usize = 9;

/// The eight winning lines.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub type Board = [Option<Mark>; CELL_COUNT];

/// A player's symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Engine strength.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Difficulty {
    /// Uniformly random legal moves
    Easy,
    /// Full minimax; never loses
    #[default]
    Hard,
}

/// Level payload for a board game against the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardContent {
    pub engine_mark: Mark,
    #[serde(default)]
    pub engine_moves_first: bool,
    #[serde(default)]
    pub difficulty: Difficulty,
}

/// In-progress board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    pub cells: Board,
    pub player: Mark,
    pub engine: Mark,
    pub difficulty: Difficulty,
    /// Cell suggested by the last hint
    pub suggested: Option<usize>,
    pub last_engine_move: Option<usize>,
}

impl BoardState {
    pub fn new(content: &BoardContent) -> Self {
        Self {
            cells: [None; CELL_COUNT],
            player: content.engine_mark.opponent(),
            engine: content.engine_mark,
            difficulty: content.difficulty,
            suggested: None,
            last_engine_move: None,
        }
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        empty_cells(&self.cells)
    }
}

pub fn empty_cells(board: &Board) -> Vec<usize> {
    (0..CELL_COUNT).filter(|&i| board[i].is_none()).collect()
}
