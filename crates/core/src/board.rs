//! Board module - manages the game grid
//!
//! The board is a rows x cols grid of [`Cell`] markers stored as a flat,
//! row-major array. It is a cache of the snake body and the active item that
//! gives O(1) occupancy checks for collision detection and item spawning.
//!
//! Coordinates: [`Position`] `(row, col)`; row ranges `0..rows` (top to bottom),
//! col ranges `0..cols` (left to right). Anything outside is out of bounds.

use crate::types::{Cell, Position};

/// The game board, flat array storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u16,
    cols: u16,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows as usize * cols as usize],
        }
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if self.is_out_of_bounds(pos) {
            return None;
        }
        Some(pos.row as usize * self.cols as usize + pos.col as usize)
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Total number of cells
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Get the cell at `pos`, `None` if out of bounds
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Set the cell at `pos`. Returns false if out of bounds
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub fn is_out_of_bounds(&self, pos: Position) -> bool {
        pos.row < 0 || pos.row >= self.rows as i16 || pos.col < 0 || pos.col >= self.cols as i16
    }

    /// Check if position is within bounds and holds a snake segment
    pub fn is_snake(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Cell::Snake(_)))
    }

    /// Check if position is within bounds and not covered by the snake
    pub fn is_free(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(cell) if !cell.is_snake())
    }

    /// Number of cells not covered by the snake
    pub fn free_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_snake()).count()
    }

    /// The `n`-th free cell in row-major order.
    pub fn nth_free(&self, n: usize) -> Option<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_snake())
            .nth(n)
            .map(|(idx, _)| self.position_of(idx))
    }

    fn position_of(&self, idx: usize) -> Position {
        let cols = self.cols as usize;
        Position::new((idx / cols) as i16, (idx % cols) as i16)
    }

    /// One row of cells, `None` if out of range
    pub fn row(&self, row: u16) -> Option<&[Cell]> {
        if row >= self.rows {
            return None;
        }
        let start = row as usize * self.cols as usize;
        Some(&self.cells[start..start + self.cols as usize])
    }

    /// Iterate over `(position, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (self.position_of(idx), cell))
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::ROWS, crate::types::COLS)
    }
}
