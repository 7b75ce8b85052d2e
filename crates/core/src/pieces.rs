//! Pieces module - shape matrices, the seven archetypes and rotation
//!
//! A shape is a small rectangular matrix (at most 4x4) of cells. Nonzero
//! cells are blocks; within one piece they all carry the piece's color id.
//! Shapes are stored inline in an `ArrayVec` so pieces never allocate.

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, COLOR_COUNT, EMPTY};

/// Largest bounding box a shape may occupy (4x4 fits every tetromino)
pub const MAX_SHAPE_DIM: usize = 4;

const MAX_SHAPE_CELLS: usize = MAX_SHAPE_DIM * MAX_SHAPE_DIM;

const I_SHAPE: &[&[Cell]] = &[&[1, 1, 1, 1]];
const J_SHAPE: &[&[Cell]] = &[&[2, 0, 0], &[2, 2, 2]];
const L_SHAPE: &[&[Cell]] = &[&[0, 0, 3], &[3, 3, 3]];
const O_SHAPE: &[&[Cell]] = &[&[4, 4], &[4, 4]];
const S_SHAPE: &[&[Cell]] = &[&[0, 5, 5], &[5, 5, 0]];
const T_SHAPE: &[&[Cell]] = &[&[0, 6, 0], &[6, 6, 6]];
const Z_SHAPE: &[&[Cell]] = &[&[7, 7, 0], &[0, 7, 7]];

/// Reasons a shape or piece cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// No rows, or a first row with no cells
    Empty,
    /// More than `MAX_SHAPE_DIM` rows or columns
    TooLarge { rows: usize, cols: usize },
    /// A row whose length differs from the first row
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Piece color outside 1..=7
    InvalidColor(Cell),
    /// A filled shape cell painted with a different color than the piece
    ColorMismatch { expected: Cell, found: Cell },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::Empty => write!(f, "shape must have at least one row and one column"),
            ShapeError::TooLarge { rows, cols } => write!(
                f,
                "shape is {}x{}, limit is {}x{}",
                rows, cols, MAX_SHAPE_DIM, MAX_SHAPE_DIM
            ),
            ShapeError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "shape row {} has {} cells, expected {}",
                row, found, expected
            ),
            ShapeError::InvalidColor(c) => {
                write!(f, "piece color {} outside 1..={}", c, COLOR_COUNT)
            }
            ShapeError::ColorMismatch { expected, found } => {
                write!(f, "shape cell has color {}, piece color is {}", found, expected)
            }
        }
    }
}

impl std::error::Error for ShapeError {}

/// Rectangular matrix of cells, row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: ArrayVec<Cell, MAX_SHAPE_CELLS>,
}

impl Shape {
    /// Build a shape from rows, rejecting ragged, empty or oversize input.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self, ShapeError> {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if cols == 0 {
            return Err(ShapeError::Empty);
        }
        if rows.len() > MAX_SHAPE_DIM || cols > MAX_SHAPE_DIM {
            return Err(ShapeError::TooLarge {
                rows: rows.len(),
                cols,
            });
        }

        let mut cells = ArrayVec::new();
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(ShapeError::RaggedRow {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend(row.iter().copied());
        }

        Ok(Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            cells,
        })
    }

    /// Tables in this module are known-good, so no validation.
    fn from_table(rows: &[&[Cell]]) -> Self {
        let mut cells = ArrayVec::new();
        for row in rows {
            cells.extend(row.iter().copied());
        }
        Self {
            rows: rows.len() as u8,
            cols: rows[0].len() as u8,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Cell at (row, col). Panics when out of range.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.rows() && col < self.cols(), "shape index out of range");
        self.cells[row * self.cols() + col]
    }

    /// Offsets `(row, col)` of every nonzero cell, in row-major order.
    pub fn blocks(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols();
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell != EMPTY)
            .map(move |(i, _)| (i / cols, i % cols))
    }

    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(self.cols()).map(|r| r.to_vec()).collect()
    }
}

/// Rotate a shape 90° clockwise: `rotated[i][j] = shape[N-1-j][i]`.
///
/// Square N x N input is rotated about its center. Rectangular R x C input
/// is rotated as its bounding box and comes back C x R (the same as padding
/// to a square, rotating, and trimming the empty border). Four applications
/// always return the original shape.
pub fn rotate_matrix(shape: &Shape) -> Shape {
    let n = shape.rows();
    let out_rows = shape.cols();
    let mut cells = ArrayVec::new();
    for i in 0..out_rows {
        for j in 0..n {
            cells.push(shape.get(n - 1 - j, i));
        }
    }
    Shape {
        rows: shape.cols,
        cols: shape.rows,
        cells,
    }
}

/// A shape plus the color id its blocks paint onto the board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    shape: Shape,
    color: Cell,
}

impl Piece {
    /// Build a custom piece.
    ///
    /// The color must be a valid piece color, and every filled cell of the
    /// shape must carry it.
    pub fn new(shape: Shape, color: Cell) -> Result<Self, ShapeError> {
        if color == EMPTY || color > COLOR_COUNT {
            return Err(ShapeError::InvalidColor(color));
        }
        if let Some(&found) = shape.cells.iter().find(|&&c| c != EMPTY && c != color) {
            return Err(ShapeError::ColorMismatch {
                expected: color,
                found,
            });
        }
        Ok(Self { shape, color })
    }

    /// The starting orientation of an archetype
    pub fn of(kind: PieceKind) -> Self {
        let table = match kind {
            PieceKind::I => I_SHAPE,
            PieceKind::J => J_SHAPE,
            PieceKind::L => L_SHAPE,
            PieceKind::O => O_SHAPE,
            PieceKind::S => S_SHAPE,
            PieceKind::T => T_SHAPE,
            PieceKind::Z => Z_SHAPE,
        };
        Self {
            shape: Shape::from_table(table),
            color: kind.color(),
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn color(&self) -> Cell {
        self.color
    }

    /// Archetype matching this piece's color
    pub fn kind(&self) -> Option<PieceKind> {
        PieceKind::from_color(self.color)
    }

    /// New piece with the shape turned 90° clockwise
    pub fn rotated(&self) -> Self {
        Self {
            shape: rotate_matrix(&self.shape),
            color: self.color,
        }
    }
}

/// All seven archetypes in their starting orientation
pub fn all_pieces() -> [Piece; 7] {
    PieceKind::ALL.map(Piece::of)
}
