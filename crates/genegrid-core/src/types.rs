//! Core type definitions shared across the workspace.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cell coordinate in a population grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major linear index for a grid `cols` wide
    pub fn to_index(&self, cols: usize) -> usize {
        self.row * cols + self.col
    }

    pub fn from_index(index: usize, cols: usize) -> Self {
        Self {
            row: index / cols,
            col: index % cols,
        }
    }

    /// Apply a compass delta, returning `None` when the move leaves the grid
    pub fn offset(&self, direction: Direction, rows: usize, cols: usize) -> Option<Self> {
        let (dx, dy) = direction.to_delta();
        let row = self.row.checked_add_signed(dy as isize)?;
        let col = self.col.checked_add_signed(dx as isize)?;
        (row < rows && col < cols).then_some(Self { row, col })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Movement direction, in the order the movement genes encode them
///
/// ```text
///  \  |  /     genes 0..=3: up-left, up, up-right, right
///  <- x ->
///  /  |  \     genes 4..=7: down-right, down, down-left, left
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    UpLeft,
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
}

impl Direction {
    /// `(dx, dy)` with y growing downwards
    pub fn to_delta(&self) -> (i32, i32) {
        match self {
            Direction::UpLeft => (-1, -1),
            Direction::Up => (0, -1),
            Direction::UpRight => (1, -1),
            Direction::Right => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::Down => (0, 1),
            Direction::DownLeft => (-1, 1),
            Direction::Left => (-1, 0),
        }
    }

    pub fn all() -> [Direction; 8] {
        [
            Direction::UpLeft,
            Direction::Up,
            Direction::UpRight,
            Direction::Right,
            Direction::DownRight,
            Direction::Down,
            Direction::DownLeft,
            Direction::Left,
        ]
    }

    /// Direction encoded by movement gene `index`
    pub fn from_gene_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Direction::UpLeft => "up-left",
            Direction::Up => "up",
            Direction::UpRight => "up-right",
            Direction::Right => "right",
            Direction::DownRight => "down-right",
            Direction::Down => "down",
            Direction::DownLeft => "down-left",
            Direction::Left => "left",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
