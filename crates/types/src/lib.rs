//! Core types module - shared data structures and constants
//!
//! This module defines the plain data used throughout the scene. Everything here
//! is dependency-free so it can be shared by the pure logic, the scheduler and the
//! terminal front end alike.
//!
//! # Timing
//!
//! The scene advances in fixed ticks:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Interval between scheduler ticks |
//! | `SHIP_RENDER_PAUSE_TICKS` | 2 | Ticks between two ship redraws |
//! | `DEBRIS_SPAWN_INTERVAL_TICKS` | 10 | Ticks between two debris spawns |
//!
//! # Motion
//!
//! - `SPEED_LIMIT`: 2.0 cells per tick, enforced on the side matching the input
//! - `DAMPING_FRACTION`: 0.8, applied to both axes every tick
//! - `PROJECTILE_ROW_SPEED` / `PROJECTILE_COL_SPEED`: -0.3 / 0.0 (straight up)
//! - `DEBRIS_MIN_SPEED` .. `DEBRIS_MAX_SPEED`: 0.3 .. 0.8 rows per tick
//!
//! # Examples
//!
//! ```
//! use tui_space_types::{ControlInput, Position, Velocity};
//!
//! let pos = Position::new(10.4, 3.6);
//! assert_eq!(pos.rounded(), (10, 4));
//!
//! let moved = pos.advanced(Velocity::new(-0.4, 0.4));
//! assert_eq!(moved.rounded(), (10, 4));
//!
//! assert!(ControlInput::NEUTRAL.is_neutral());
//! ```

/// Scheduler tick interval in milliseconds.
pub const TICK_MS: u64 = 100;

/// Per-axis speed limit in cells per tick.
pub const SPEED_LIMIT: f64 = 2.0;

/// Multiplicative decay applied to velocity after every update.
pub const DAMPING_FRACTION: f64 = 0.8;

/// Number of stars placed by the scene initializer.
pub const STAR_COUNT: usize = 100;

/// Glyphs a star may be drawn with.
pub const STAR_SYMBOLS: &str = "+*.:";

/// Ticks between two redraws of the ship.
pub const SHIP_RENDER_PAUSE_TICKS: u32 = 2;

/// Ticks between two debris spawns.
pub const DEBRIS_SPAWN_INTERVAL_TICKS: u32 = 10;

/// Slowest debris fall speed (rows per tick).
pub const DEBRIS_MIN_SPEED: f64 = 0.3;

/// Fastest debris fall speed (rows per tick).
pub const DEBRIS_MAX_SPEED: f64 = 0.8;

/// Default projectile row speed (negative is up).
pub const PROJECTILE_ROW_SPEED: f64 = -0.3;

/// Default projectile column speed.
pub const PROJECTILE_COL_SPEED: f64 = 0.0;

/// Directory holding the frame assets, relative to the working directory.
pub const FRAMES_DIR: &str = "frames";

/// Terminal dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenSize {
    pub rows: u16,
    pub cols: u16,
}

impl ScreenSize {
    pub const fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }

    /// Whether a cell lies on the screen.
    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && row < i32::from(self.rows) && col < i32::from(self.cols)
    }
}

/// Fractional cell position. Rounded only when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub row: f64,
    pub col: f64,
}

impl Position {
    pub const fn new(row: f64, col: f64) -> Self {
        Self { row, col }
    }

    /// Nearest cell, as `(row, col)`.
    pub fn rounded(&self) -> (i32, i32) {
        (self.row.round() as i32, self.col.round() as i32)
    }

    pub fn advanced(&self, velocity: Velocity) -> Self {
        Self {
            row: self.row + velocity.row_speed,
            col: self.col + velocity.col_speed,
        }
    }
}

/// Per-axis speed in cells per tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    pub row_speed: f64,
    pub col_speed: f64,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity::new(0.0, 0.0);

    pub const fn new(row_speed: f64, col_speed: f64) -> Self {
        Self {
            row_speed,
            col_speed,
        }
    }
}

/// Glyph intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Brightness {
    Dim,
    #[default]
    Normal,
    Bold,
}

/// Controls sampled for one tick.
///
/// Directions are -1, 0 or 1 when produced by a well-behaved source. The
/// kinematics rejects anything else instead of clamping it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlInput {
    pub d_row: i32,
    pub d_col: i32,
    pub fire: bool,
}

impl ControlInput {
    pub const NEUTRAL: ControlInput = ControlInput::new(0, 0, false);

    pub const fn new(d_row: i32, d_col: i32, fire: bool) -> Self {
        Self { d_row, d_col, fire }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}
