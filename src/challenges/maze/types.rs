//! Maze Runner data structures.

use serde::{Deserialize, Serialize};

/// Level payload for a maze. Cells are `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MazeContent {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    #[serde(default)]
    pub walls: Vec<(usize, usize)>,
    pub start: (usize, usize),
    pub goal: (usize, usize),
}

impl MazeContent {
    pub fn in_bounds(&self, (row, col): (usize, usize)) -> bool {
        row < self.height && col < self.width
    }

    pub fn is_wall(&self, cell: (usize, usize)) -> bool {
        self.walls.contains(&cell)
    }

    pub fn is_open(&self, cell: (usize, usize)) -> bool {
        self.in_bounds(cell) && !self.is_wall(cell)
    }
}

/// Direction of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// (row_delta, col_delta)
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The neighbouring cell, or None when stepping off the top/left edge.
    pub fn apply(&self, (row, col): (usize, usize)) -> Option<(usize, usize)> {
        let (dr, dc) = self.delta();
        let r = row as i32 + dr;
        let c = col as i32 + dc;
        if r < 0 || c < 0 {
            return None;
        }
        Some((r as usize, c as usize))
    }
}

/// In-progress maze walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeState {
    pub position: (usize, usize),
    /// Accepted steps so far
    pub steps_taken: u32,
    /// Cells of the route revealed by hints, in order
    pub revealed: Vec<(usize, usize)>,
}

impl MazeState {
    pub fn new(content: &MazeContent) -> Self {
        Self {
            position: content.start,
            steps_taken: 0,
            revealed: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_apply_clamps_at_origin() {
        assert_eq!(Direction::Up.apply((0, 3)), None);
        assert_eq!(Direction::Left.apply((2, 0)), None);
        assert_eq!(Direction::Down.apply((0, 0)), Some((1, 0)));
        assert_eq!(Direction::Right.apply((0, 0)), Some((0, 1)));
    }

    #[test]
    fn test_is_open() {
        let maze = MazeContent {
            width: 3,
            height: 2,
            walls: vec![(0, 1)],
            start: (0, 0),
            goal: (1, 2),
        };
        assert!(maze.is_open((0, 0)));
        assert!(!maze.is_open((0, 1)));
        assert!(!maze.is_open((2, 0)));
        assert!(!maze.is_open((0, 3)));
    }
}
