//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into ship controls and exposes them to the
//! scheduler as a [`ControlSource`](crate::engine::ControlSource). Arrow keys
//! steer, space fires, `q`, Esc or Ctrl-C quit.

pub mod handler;
pub mod map;

pub use tui_space_engine as engine;
pub use tui_space_types as types;

pub use handler::TerminalControls;
pub use map::{fold_controls, map_key, should_quit, Control};
