//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! Everything here is plain data, usable from the engine, the terminal
//! frontend and headless tooling alike.
//!
//! # Board Dimensions
//!
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Spawn position**: row 0, column 3
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval of the interactive loop |
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `DROP_STEP_MS` | 100 | Interval reduction per level |
//! | `MAX_SPEED_LEVEL` | 10 | Level at which gravity stops speeding up |
//!
//! # Examples
//!
//! ```
//! use blockdrop_types::{PieceKind, BOARD_COLS, BOARD_ROWS};
//!
//! assert_eq!(PieceKind::O.color(), 4);
//! assert_eq!(PieceKind::from_color(6), Some(PieceKind::T));
//! assert_eq!((BOARD_ROWS, BOARD_COLS), (20, 10));
//! ```

use serde::Serialize;

/// Board height in rows
pub const BOARD_ROWS: usize = 20;

/// Board width in columns
pub const BOARD_COLS: usize = 10;

/// Anchor assigned to every freshly spawned piece.
///
/// Column 3 centers a 4-wide bounding box on a 10-wide board.
pub const SPAWN_POSITION: Position = Position { row: 0, col: 3 };

/// Frame interval of the interactive loop (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity interval reduction per level
pub const DROP_STEP_MS: u32 = 100;

/// Gravity stops getting faster past this level (100ms per row)
pub const MAX_SPEED_LEVEL: u32 = 10;

/// Points awarded per cleared line
pub const POINTS_PER_LINE: u32 = 100;

/// Score needed to advance one level
pub const POINTS_PER_LEVEL: u32 = 1000;

/// Number of distinct piece colors (ids 1..=7)
pub const COLOR_COUNT: u8 = 7;

/// A cell on the board: 0 is empty, 1..=7 is the color of the piece that
/// filled it.
pub type Cell = u8;

/// The empty cell value
pub const EMPTY: Cell = 0;

/// Anchor of a shape's top-left cell on the board.
///
/// Signed so that candidate positions left of or above the board can be
/// represented and rejected by the validity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Offset this position by `(drow, dcol)`.
    pub const fn offset(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }
}

/// The seven piece archetypes
///
/// Each archetype owns one color id:
/// - **I** = 1, **J** = 2, **L** = 3, **O** = 4, **S** = 5, **T** = 6, **Z** = 7
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All archetypes in color-id order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Color id written into board cells by this archetype.
    pub fn color(self) -> Cell {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Map a color id back to its archetype. Returns `None` for 0 and
    /// anything above 7.
    pub fn from_color(color: Cell) -> Option<Self> {
        match color {
            1..=7 => Some(Self::ALL[(color - 1) as usize]),
            _ => None,
        }
    }

    /// Uppercase letter, as shown in the side panel
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// Game actions that can be applied to a running game
///
/// Keyboard input and headless drivers both speak this vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Shift piece one column left
    MoveLeft,
    /// Shift piece one column right
    MoveRight,
    /// Drop piece one row; lands it if the row below is blocked
    MoveDown,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Toggle pause
    Pause,
    /// Start a fresh game (from idle, mid-game or after game over)
    Restart,
}

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    /// Created, not started yet
    #[default]
    Idle,
    /// Pieces are falling
    Active,
    /// Gravity and input are suspended
    Paused,
    /// The next piece could not spawn; terminal until restart
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Idle => "idle",
            GameStatus::Active => "active",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "gameOver",
        }
    }
}

/// Event emitted when a piece lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    /// Color id of the piece that landed
    pub color: Cell,
    pub lines_cleared: u32,
    pub score: u32,
    pub level: u32,
    /// True when the following piece could not spawn.
    pub game_over: bool,
}
