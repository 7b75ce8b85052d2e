//! Board module - the game grid
//!
//! The board is an R x C grid (20 x 10 by default) where each cell holds a
//! color id: 0 for empty, 1..=7 for the piece that filled it.
//! Uses a flat row-major vector for cache locality.
//! Coordinates: (row, col) where row grows downward and col grows rightward.

use std::fmt;

use crate::types::{Cell, BOARD_COLS, BOARD_ROWS, COLOR_COUNT, EMPTY};

/// Reasons a board cannot be built from raw rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Zero rows, or a first row with zero cells
    Empty,
    /// A row whose length differs from the first row
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A cell value above the highest color id
    InvalidCell { row: usize, col: usize, value: Cell },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Empty => write!(f, "board must have at least one row and one column"),
            BoardError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} cells, expected {}",
                row, found, expected
            ),
            BoardError::InvalidCell { row, col, value } => write!(
                f,
                "cell ({}, {}) holds {}, expected 0..={}",
                row, col, value, COLOR_COUNT
            ),
        }
    }
}

impl std::error::Error for BoardError {}

/// The game board - `rows` x `cols` cells using flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of the given size.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "board dimensions must be positive");
        Self {
            rows,
            cols,
            cells: vec![EMPTY; rows * cols],
        }
    }

    /// Create an empty board with the default 20 x 10 dimensions
    pub fn standard() -> Self {
        Self::new(BOARD_ROWS, BOARD_COLS)
    }

    /// Build a board from explicit rows, checking shape and cell range.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self, BoardError> {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if cols == 0 {
            return Err(BoardError::Empty);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(BoardError::RaggedRow {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            if let Some(c) = row.iter().position(|&v| v > COLOR_COUNT) {
                return Err(BoardError::InvalidCell {
                    row: r,
                    col: c,
                    value: row[c],
                });
            }
            cells.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    pub(crate) fn from_parts(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return None;
        }
        Some(row as usize * self.cols + col as usize)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if (row, col) is in bounds and empty
    pub fn is_free(&self, row: i32, col: i32) -> bool {
        self.get(row, col) == Some(EMPTY)
    }

    /// Borrow one row of cells. Panics if `row` is out of range.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        row < self.rows && self.row(row).iter().all(|&cell| cell != EMPTY)
    }

    /// Number of completely filled rows
    pub fn full_row_count(&self) -> usize {
        (0..self.rows).filter(|&r| self.is_row_full(r)).count()
    }

    /// Flat row-major cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy out as nested rows (for snapshots and display)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(self.cols).map(|r| r.to_vec()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
