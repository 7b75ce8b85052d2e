//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Each key
//! press produces at most one action; held keys rely on the terminal's own
//! auto-repeat.

pub mod map;

pub use blockdrop_types as types;

pub use map::{handle_key_event, should_quit};
