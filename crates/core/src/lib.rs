//! Core scene logic - pure, deterministic, and testable
//!
//! Everything here is free of terminal I/O so it can be unit tested and driven
//! from any front end.
//!
//! # Module Structure
//!
//! - [`kinematics`]: per-axis capped-velocity update with damping
//! - [`ship`]: ship bounds, ship state and its single-writer sharing handles
//! - [`frame`]: multi-line glyph frames and the startup asset set
//! - [`rng`]: seedable random source injected into spawners
//! - [`error`]: the crate's error type
//!
//! # Example
//!
//! ```
//! use tui_space_core::{Bounds, Handling, ShipState};
//! use tui_space_core::types::{Position, ScreenSize};
//!
//! let bounds = Bounds::for_ship(ScreenSize::new(24, 80), 9, 5);
//! let mut ship = ShipState::new(Position::new(12.0, 40.0), bounds);
//!
//! ship.steer(&Handling::default(), 0, 1).unwrap();
//! assert!(ship.pos.col > 40.0);
//! ```

pub mod error;
pub mod frame;
pub mod kinematics;
pub mod rng;
pub mod ship;

pub use tui_space_types as types;

pub use error::{Error, Result};
pub use frame::{Frame, SceneAssets};
pub use kinematics::{update_speed, Handling};
pub use rng::SimpleRng;
pub use ship::{Bounds, ShipReader, ShipState, ShipWriter};
