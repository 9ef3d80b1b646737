//! Memory Match game logic: flips, match checks, delayed reverts, and pair hints.

use super::{PairsState, PendingRevert};
use crate::challenges::Verdict;

/// What an accepted flip did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipResult {
    /// First tile of a pick is now face up
    FirstPick,
    /// Second tile matched the first; both stay face up
    Matched(usize, usize),
    /// Second tile differs; both turn back after the revert delay
    Mismatched(usize, usize),
}

/// Flip tile `index`.
///
/// Rejected without changes while a mismatch is waiting to turn back, or when the
/// tile is out of range, already matched, or already face up.
pub fn flip(state: &mut PairsState, index: usize, revert_ticks: u32) -> Result<FlipResult, String> {
    if state.pending_revert.is_some() {
        return Err("Wait for the tiles to turn back".to_string());
    }
    let tile = state
        .tiles
        .get(index)
        .ok_or_else(|| "No such tile".to_string())?;
    if tile.matched {
        return Err("That pair is already matched".to_string());
    }
    if tile.revealed {
        return Err("That tile is already face up".to_string());
    }

    state.tiles[index].revealed = true;
    let Some(first) = state.first_pick.take() else {
        state.first_pick = Some(index);
        return Ok(FlipResult::FirstPick);
    };

    if state.tiles[first].value == state.tiles[index].value {
        state.tiles[first].matched = true;
        state.tiles[index].matched = true;
        Ok(FlipResult::Matched(first, index))
    } else {
        state.pending_revert = Some(PendingRevert {
            first,
            second: index,
            ticks_left: revert_ticks,
        });
        if revert_ticks == 0 {
            hide_pending(state);
        }
        Ok(FlipResult::Mismatched(first, index))
    }
}

/// Advance the revert countdown. Returns the pair turned face down, if any.
pub fn tick(state: &mut PairsState) -> Option<(usize, usize)> {
    let pending = state.pending_revert.as_mut()?;
    pending.ticks_left = pending.ticks_left.saturating_sub(1);
    if pending.ticks_left == 0 {
        hide_pending(state)
    } else {
        None
    }
}

fn hide_pending(state: &mut PairsState) -> Option<(usize, usize)> {
    let pending = state.pending_revert.take()?;
    state.tiles[pending.first].revealed = false;
    state.tiles[pending.second].revealed = false;
    Some((pending.first, pending.second))
}

/// Solved iff every pair is matched.
pub fn validate(state: &PairsState) -> Verdict {
    if state.all_matched() {
        Verdict::solved()
    } else {
        Verdict::InProgress
    }
}

/// Match one pair for the player: the partner of a face-up first pick if there is
/// one, otherwise the first unmatched pair on the table.
///
/// Refuses while a mismatch is pending and never matches the last pair of a
/// multi-pair table.
pub fn reveal_pair(state: &mut PairsState) -> bool {
    if state.pending_revert.is_some() {
        return false;
    }
    let unmatched_pairs = state.pair_count() - state.matched_pairs();
    if unmatched_pairs == 0 || (unmatched_pairs == 1 && state.pair_count() > 1) {
        return false;
    }

    let anchor = state
        .first_pick
        .or_else(|| state.tiles.iter().position(|t| !t.matched));
    let Some(anchor) = anchor else {
        return false;
    };
    let value = state.tiles[anchor].value.clone();
    let partner = state
        .tiles
        .iter()
        .enumerate()
        .position(|(i, t)| i != anchor && !t.matched && t.value == value);
    let Some(partner) = partner else {
        return false;
    };

    for i in [anchor, partner] {
        state.tiles[i].revealed = true;
        state.tiles[i].matched = true;
    }
    state.first_pick = None;
    true
}
