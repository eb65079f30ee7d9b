//! Terminal front end for the scene.
//!
//! A small, game-oriented rendering layer: tasks draw into a persistent
//! [`Screen`] buffer and [`TerminalRenderer`] flushes only the cells that
//! changed since the last present. No widget or layout library is involved.

pub mod renderer;
pub mod screen;
pub mod surface;

pub use tui_space_engine as engine;
pub use tui_space_engine::core;
pub use tui_space_types as types;

pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen::{Cell, Screen};
pub use surface::TerminalSurface;
