//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block game: the board, the
//! seven piece archetypes, rotation, collision, line clearing and scoring.
//! It has **no dependencies** on terminals or I/O, which keeps it:
//!
//! - **Pure**: engine functions take a board and return a new one
//! - **Deterministic**: the same seed deals the same pieces
//! - **Portable**: runs in the terminal frontend, headless, or in tests
//!
//! # Module Structure
//!
//! - [`board`]: rectangular grid of color ids
//! - [`pieces`]: shape tables, archetypes and clockwise rotation
//! - [`engine`]: validity checks, placement and line clearing
//! - [`scoring`]: points, level and gravity interval
//! - [`rng`]: uniform random piece selection
//! - [`game_state`]: the controller that runs a game on top of the engine
//! - [`snapshot`]: serializable views for renderers
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: each spawn is one of seven archetypes, equally likely
//! - **Simple rotation**: 90° clockwise about the bounding box, no wall kicks
//! - **Immediate lock**: a piece lands as soon as it cannot move down
//! - **Scoring**: 100 points per cleared line, one level per 1000 points
//!
//! # Example
//!
//! ```
//! use blockdrop_core::GameState;
//! use blockdrop_types::{GameAction, GameStatus};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.tick(1000);
//!
//! assert_eq!(game.status(), GameStatus::Active);
//! assert_eq!(game.active().unwrap().position.row, 1);
//! ```
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed time; gravity fires once the level's interval has accumulated.

pub mod board;
pub mod engine;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockdrop_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError};
pub use engine::{
    clear_lines, create_empty_board, is_valid_move, overlay_piece, place_piece, LineClear,
};
pub use game_state::{ActivePiece, GameState};
pub use pieces::{all_pieces, rotate_matrix, Piece, Shape, ShapeError};
pub use rng::{PiecePicker, SimpleRng};
pub use scoring::{calculate_score, get_drop_interval_ms, ScoreResult};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
