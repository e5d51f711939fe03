//! 2D grid of optional entities.

use genegrid_core::{Error, GridConfig, Position, Result};
use genegrid_genome::Entity;
use serde::{Deserialize, Serialize};

/// Grid cell content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Entity),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn entity(&self) -> Option<&Entity> {
        match self {
            Cell::Occupied(entity) => Some(entity),
            Cell::Empty => None,
        }
    }

    pub fn entity_mut(&mut self) -> Option<&mut Entity> {
        match self {
            Cell::Occupied(entity) => Some(entity),
            Cell::Empty => None,
        }
    }
}

/// A bounded row-major grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-empty grid. A zero dimension yields a grid with no cells.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let size = Self::cell_count(rows, cols)?;

        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Empty; size],
        })
    }

    /// `rows * cols`, rejecting shapes whose cell count overflows
    pub fn cell_count(rows: usize, cols: usize) -> Result<usize> {
        rows.checked_mul(cols).ok_or_else(|| {
            Error::InvalidArgument(format!("grid of {}x{} cells is too large", rows, cols))
        })
    }

    pub fn from_config(config: &GridConfig) -> Result<Self> {
        Self::new(config.rows, config.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub fn get(&self, pos: Position) -> Option<&Cell> {
        let index = self.index_of(pos)?;
        Some(&self.cells[index])
    }

    pub fn get_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        let index = self.index_of(pos)?;
        Some(&mut self.cells[index])
    }

    /// Put an entity into an empty cell
    pub fn insert(&mut self, pos: Position, entity: Entity) -> Result<()> {
        let index = self.index_of(pos).ok_or_else(|| {
            Error::InvalidArgument(format!(
                "position {} outside {}x{} grid",
                pos, self.rows, self.cols
            ))
        })?;

        let cell = &mut self.cells[index];
        if !cell.is_empty() {
            return Err(Error::CellOccupied(pos));
        }
        *cell = Cell::Occupied(entity);
        Ok(())
    }

    /// Row-major index of an in-bounds position
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.to_index(self.cols))
    }

    /// Get position from index
    pub fn position_of(&self, index: usize) -> Position {
        Position::from_index(index, self.cols)
    }

    /// Iterator over all cells with positions, row by row
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (self.position_of(i), cell))
    }

    /// Iterator over occupied cells only
    pub fn occupied(&self) -> impl Iterator<Item = (Position, &Entity)> + '_ {
        self.iter()
            .filter_map(|(pos, cell)| cell.entity().map(|entity| (pos, entity)))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Iterator over empty cells, row by row
    pub fn vacant(&self) -> impl Iterator<Item = Position> + '_ {
        self.iter()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(pos, _)| pos)
    }
}
