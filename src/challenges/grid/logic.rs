//! Pattern Fill game logic: cell edits, validation, and hint reveals.

use super::{GridContent, GridState};
use crate::challenges::Verdict;

/// Write `value` into an open cell.
pub fn set_cell(state: &mut GridState, row: usize, col: usize, value: u8) -> Result<(), String> {
    check_writable(state, row, col)?;
    if state.get(row, col) == Some(value) {
        return Err("Cell already holds that value".to_string());
    }
    state.cells[row][col] = Some(value);
    Ok(())
}

/// Erase an open cell.
pub fn clear_cell(state: &mut GridState, row: usize, col: usize) -> Result<(), String> {
    check_writable(state, row, col)?;
    if state.get(row, col).is_none() {
        return Err("Cell is already empty".to_string());
    }
    state.cells[row][col] = None;
    Ok(())
}

fn check_writable(state: &GridState, row: usize, col: usize) -> Result<(), String> {
    if !state.in_bounds(row, col) {
        return Err("Cell is outside the grid".to_string());
    }
    if state.is_fixed(row, col) {
        return Err("That cell is part of the pattern".to_string());
    }
    Ok(())
}

/// Solved iff every cell equals the target, cell for cell.
pub fn validate(state: &GridState, content: &GridContent) -> Verdict {
    if state.rows() != content.target.len() {
        return Verdict::InProgress;
    }
    let matches = state
        .cells
        .iter()
        .zip(&content.target)
        .all(|(row, target)| {
            row.len() == target.len()
                && row.iter().zip(target).all(|(cell, want)| *cell == Some(*want))
        });
    if matches {
        Verdict::solved()
    } else {
        Verdict::InProgress
    }
}

/// Open cells that do not yet hold their target value, in row-major order.
fn wrong_cells(state: &GridState, content: &GridContent) -> Vec<(usize, usize)> {
    let mut wrong = Vec::new();
    for (r, row) in state.cells.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            if state.is_fixed(r, c) {
                continue;
            }
            let want = content.target.get(r).and_then(|t| t.get(c)).copied();
            if want.is_some() && *cell != want {
                wrong.push((r, c));
            }
        }
    }
    wrong
}

/// Fill the first wrong cell with its target value.
///
/// Refuses to place the last missing cell of a multi-cell puzzle.
pub fn reveal_cell(state: &mut GridState, content: &GridContent) -> bool {
    let wrong = wrong_cells(state, content);
    let Some(&(r, c)) = wrong.first() else {
        return false;
    };
    if wrong.len() == 1 && state.open_cell_count() > 1 {
        return false;
    }
    state.cells[r][c] = Some(content.target[r][c]);
    true
}
