//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay. Snapshots are drawn into a
//! plain framebuffer which is then flushed to the terminal with `crossterm`.
//! Board cells are two columns wide to keep them roughly square.

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use blockdrop_core as core;
pub use blockdrop_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{AnchorY, GameView, Viewport};
pub use palette::color_for;
pub use renderer::{encode_frame_into, TerminalRenderer};
