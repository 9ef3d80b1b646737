//! Tic-Tac-Toe game logic and the minimax engine.

use super::{empty_cells, Board, BoardState, Difficulty, Mark, CELL_COUNT, LINES};
use crate::challenges::Verdict;
use crate::constants::{DRAW_SCORE, ENGINE_LOSS_SCORE, ENGINE_WIN_SCORE};
use crate::levels::WinCondition;
use rand::seq::SliceRandom;
use rand::Rng;

/// The mark holding a complete line, if any.
pub fn winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| match board[a] {
        Some(m) if board[b] == Some(m) && board[c] == Some(m) => Some(m),
        _ => None,
    })
}

pub fn is_full(board: &Board) -> bool {
    board.iter().all(Option::is_some)
}

pub fn is_over(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Place the player's mark. Occupied cells, out-of-range cells, and finished boards
/// are rejected without changes.
pub fn place(state: &mut BoardState, cell: usize) -> Result<(), String> {
    if is_over(&state.cells) {
        return Err("The round is already over".to_string());
    }
    match state.cells.get(cell) {
        None => Err("No such cell".to_string()),
        Some(Some(_)) => Err("That cell is taken".to_string()),
        Some(None) => {
            state.cells[cell] = Some(state.player);
            state.suggested = None;
            Ok(())
        }
    }
}

/// Score `board` with `to_move` about to play, from `engine`'s point of view.
///
/// Exhaustive search: +10 engine win, -10 engine loss, 0 draw, no depth decay.
/// Only tractable on the 3x3 board; larger boards need pruning or a depth cutoff.
pub fn minimax(board: &mut Board, to_move: Mark, engine: Mark) -> i32 {
    if let Some(w) = winner(board) {
        return if w == engine {
            ENGINE_WIN_SCORE
        } else {
            ENGINE_LOSS_SCORE
        };
    }
    if is_full(board) {
        return DRAW_SCORE;
    }

    let maximizing = to_move == engine;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for cell in 0..CELL_COUNT {
        if board[cell].is_some() {
            continue;
        }
        board[cell] = Some(to_move);
        let score = minimax(board, to_move.opponent(), engine);
        board[cell] = None;
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

/// Best cell for `engine` to play next. Ties go to the lowest cell index.
pub fn best_move(board: &Board, engine: Mark) -> Option<usize> {
    let mut scratch = *board;
    let mut best: Option<(usize, i32)> = None;
    for cell in empty_cells(board) {
        scratch[cell] = Some(engine);
        let score = minimax(&mut scratch, engine.opponent(), engine);
        scratch[cell] = None;
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((cell, score));
        }
    }
    best.map(|(cell, _)| cell)
}

/// Let the engine move, if the round is still open. Returns the cell played.
pub fn engine_turn<R: Rng>(state: &mut BoardState, rng: &mut R) -> Option<usize> {
    if is_over(&state.cells) {
        return None;
    }
    let cell = match state.difficulty {
        Difficulty::Easy => state.empty_cells().choose(rng).copied(),
        Difficulty::Hard => best_move(&state.cells, state.engine),
    }?;
    state.cells[cell] = Some(state.engine);
    state.last_engine_move = Some(cell);
    Some(cell)
}

/// Classify the board against the level's win condition.
pub fn validate(state: &BoardState, win_condition: &WinCondition) -> Verdict {
    match winner(&state.cells) {
        Some(m) if m == state.player => return Verdict::solved(),
        Some(_) => return Verdict::Failed,
        None => {}
    }
    if !is_full(&state.cells) {
        return Verdict::InProgress;
    }
    match win_condition {
        WinCondition::Outlast { draw_credit_percent } => Verdict::Solved {
            credit_percent: *draw_credit_percent,
        },
        WinCondition::Solve => Verdict::Failed,
    }
}

/// Suggest the strongest cell for the player. Returns false when there is nothing
/// new to show: the round is over or that cell is already suggested.
pub fn suggest_move(state: &mut BoardState) -> bool {
    if is_over(&state.cells) {
        return false;
    }
    match best_move(&state.cells, state.player) {
        Some(cell) if state.suggested != Some(cell) => {
            state.suggested = Some(cell);
            true
        }
        _ => false,
    }
}
