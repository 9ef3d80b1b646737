//! Maze Runner game logic: movement, goal check, and route hints.

use super::{Direction, MazeContent, MazeState};
use crate::challenges::Verdict;
use std::collections::{HashMap, VecDeque};

/// Take one step. Walls and the maze edge reject the move without changing anything.
pub fn step(state: &mut MazeState, content: &MazeContent, dir: Direction) -> Result<(), String> {
    let target = dir
        .apply(state.position)
        .filter(|&cell| content.in_bounds(cell))
        .ok_or_else(|| "You can't leave the maze".to_string())?;
    if content.is_wall(target) {
        return Err("A wall blocks the way".to_string());
    }
    state.position = target;
    state.steps_taken += 1;
    Ok(())
}

/// Solved iff the player stands on the goal.
pub fn validate(state: &MazeState, content: &MazeContent) -> Verdict {
    if state.position == content.goal {
        Verdict::solved()
    } else {
        Verdict::InProgress
    }
}

/// Breadth-first shortest route from `from` to the goal, excluding `from` itself.
pub fn shortest_path(content: &MazeContent, from: (usize, usize)) -> Option<Vec<(usize, usize)>> {
    if !content.is_open(from) {
        return None;
    }
    let mut came_from: HashMap<(usize, usize), (usize, usize)> = HashMap::new();
    let mut queue = VecDeque::from([from]);
    while let Some(cell) = queue.pop_front() {
        if cell == content.goal {
            let mut path = Vec::new();
            let mut cur = cell;
            while cur != from {
                path.push(cur);
                cur = came_from[&cur];
            }
            path.reverse();
            return Some(path);
        }
        for dir in Direction::ALL {
            if let Some(next) = dir.apply(cell) {
                if content.is_open(next) && next != from && !came_from.contains_key(&next) {
                    came_from.insert(next, cell);
                    queue.push_back(next);
                }
            }
        }
    }
    None
}

/// Reveal the next unrevealed cell on the shortest route from the player's position.
pub fn reveal_next_step(state: &mut MazeState, content: &MazeContent) -> bool {
    let Some(path) = shortest_path(content, state.position) else {
        return false;
    };
    match path.into_iter().find(|cell| !state.revealed.contains(cell)) {
        Some(cell) => {
            state.revealed.push(cell);
            true
        }
        None => false,
    }
}
