//! Block drop (workspace facade crate).
//!
//! The engine, input mapping and terminal rendering live in dedicated crates
//! under `crates/`; this package re-exports them as `blockdrop::{core, input,
//! term, types}` and adds the runtime pieces the binary needs: configuration,
//! file logging and a logged game session.

pub mod config;
pub mod logging;
pub mod session;

pub use blockdrop_core as core;
pub use blockdrop_input as input;
pub use blockdrop_term as term;
pub use blockdrop_types as types;

pub use config::Config;
pub use session::{run_headless, Session};
