//! Word Search game logic: straight-line selection, word matching, and word hints.

use super::SearchState;
use crate::challenges::Verdict;

/// What an accepted pick did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickResult {
    /// Selection grew by one letter
    Extended,
    /// Selection spelled a hidden word (either direction) and was cleared
    WordFound(String),
    /// Selection grew past the longest hidden word and was cleared
    Overflowed,
}

const NEIGHBOURS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Add the letter at (row, col) to the selection.
///
/// The second letter must touch the first; later letters must continue in the
/// same direction. Rejected picks leave the selection unchanged.
pub fn pick(state: &mut SearchState, row: usize, col: usize) -> Result<PickResult, String> {
    if state.letter(row, col).is_none() {
        return Err("Cell is outside the grid".to_string());
    }
    if state.selection.contains(&(row, col)) {
        return Err("Letter already selected".to_string());
    }
    let cell = (row as i32, col as i32);
    match state.selection.as_slice() {
        [] => {}
        [first] => {
            let dr = cell.0 - first.0 as i32;
            let dc = cell.1 - first.1 as i32;
            if dr.abs() > 1 || dc.abs() > 1 {
                return Err("Letters must touch".to_string());
            }
        }
        [first, second, ..] => {
            let dr = second.0 as i32 - first.0 as i32;
            let dc = second.1 as i32 - first.1 as i32;
            let last = state.selection[state.selection.len() - 1];
            if (last.0 as i32 + dr, last.1 as i32 + dc) != cell {
                return Err("Letters must be in a straight line".to_string());
            }
        }
    }

    state.selection.push((row, col));
    let forward = state.buffer();
    let backward: String = forward.chars().rev().collect();
    if let Some(pos) = state
        .remaining
        .iter()
        .position(|w| *w == forward || *w == backward)
    {
        let word = state.remaining.remove(pos);
        state.found.push(word.clone());
        state.found_cells.append(&mut state.selection);
        return Ok(PickResult::WordFound(word));
    }

    if state.selection.len() > state.longest_remaining() {
        state.selection.clear();
        return Ok(PickResult::Overflowed);
    }
    Ok(PickResult::Extended)
}

/// Drop the current selection.
pub fn clear_selection(state: &mut SearchState) -> Result<(), String> {
    if state.selection.is_empty() {
        return Err("Nothing selected".to_string());
    }
    state.selection.clear();
    Ok(())
}

/// Solved iff no hidden words remain.
pub fn validate(state: &SearchState) -> Verdict {
    if state.remaining.is_empty() {
        Verdict::solved()
    } else {
        Verdict::InProgress
    }
}

/// Find the cells spelling `word` in a straight line (any of the eight directions).
pub fn locate_word(grid: &[Vec<char>], word: &str) -> Option<Vec<(usize, usize)>> {
    let letters: Vec<char> = word.chars().collect();
    let first = *letters.first()?;
    for (r, row) in grid.iter().enumerate() {
        for (c, &ch) in row.iter().enumerate() {
            if ch != first {
                continue;
            }
            for (dr, dc) in NEIGHBOURS {
                let cells: Option<Vec<(usize, usize)>> = (0..letters.len())
                    .map(|i| {
                        let rr = r as i32 + dr * i as i32;
                        let cc = c as i32 + dc * i as i32;
                        if rr < 0 || cc < 0 {
                            return None;
                        }
                        let (rr, cc) = (rr as usize, cc as usize);
                        let got = grid.get(rr).and_then(|row| row.get(cc))?;
                        (*got == letters[i]).then_some((rr, cc))
                    })
                    .collect();
                if cells.is_some() {
                    return cells;
                }
            }
        }
    }
    None
}

/// Mark one hidden word as found. Never reveals the last word of a multi-word puzzle.
pub fn reveal_word(state: &mut SearchState) -> bool {
    let total = state.remaining.len() + state.found.len();
    if state.remaining.is_empty() || (state.remaining.len() == 1 && total > 1) {
        return false;
    }
    let word = state.remaining.remove(0);
    if let Some(mut cells) = locate_word(&state.grid, &word) {
        state.found_cells.append(&mut cells);
    }
    state.found.push(word);
    state.selection.clear();
    true
}
