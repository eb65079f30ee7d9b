//! TUI Space (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binaries, tests and
//! benches can use `tui_space::{core,engine,input,term,types}`.

pub mod config;

pub use tui_space_core as core;
pub use tui_space_engine as engine;
pub use tui_space_input as input;
pub use tui_space_term as term;
pub use tui_space_types as types;
