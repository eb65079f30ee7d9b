//! Ship state shared between the navigation and render tasks.
//!
//! The state lives in one cell with exactly one [`ShipWriter`] and any number
//! of [`ShipReader`]s. Everything runs on one thread, so a `RefCell` is enough;
//! borrows never outlive a single call.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Result;
use crate::kinematics::Handling;
use crate::types::{Position, ScreenSize, Velocity};

/// Allowed range for the ship's top-left corner.
///
/// Keeps a one-cell margin inside the screen border so the whole ship frame
/// stays visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_row: f64,
    pub max_row: f64,
    pub min_col: f64,
    pub max_col: f64,
}

impl Bounds {
    /// Bounds for a `ship_height` x `ship_width` frame. On a screen too small
    /// for the ship the upper bound collapses onto the lower one.
    pub fn for_ship(screen: ScreenSize, ship_height: usize, ship_width: usize) -> Self {
        let max_row = f64::from(screen.rows) - ship_height as f64 - 1.0;
        let max_col = f64::from(screen.cols) - ship_width as f64 - 1.0;
        Self {
            min_row: 1.0,
            max_row: max_row.max(1.0),
            min_col: 1.0,
            max_col: max_col.max(1.0),
        }
    }

    pub fn clamp(&self, pos: Position) -> Position {
        Position {
            row: pos.row.clamp(self.min_row, self.max_row),
            col: pos.col.clamp(self.min_col, self.max_col),
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        (self.min_row..=self.max_row).contains(&pos.row)
            && (self.min_col..=self.max_col).contains(&pos.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipState {
    pub pos: Position,
    pub velocity: Velocity,
    bounds: Bounds,
}

impl ShipState {
    /// A resting ship at `pos`, pulled inside `bounds`.
    pub fn new(pos: Position, bounds: Bounds) -> Self {
        Self {
            pos: bounds.clamp(pos),
            velocity: Velocity::ZERO,
            bounds,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Run one tick of steering: update the velocity from the input, then move
    /// and clamp the position.
    pub fn steer(&mut self, handling: &Handling, d_row: i32, d_col: i32) -> Result<()> {
        self.velocity = handling.steer(self.velocity, d_row, d_col)?;
        self.pos = self.bounds.clamp(self.pos.advanced(self.velocity));
        Ok(())
    }

    /// Split into the single writer and a reader.
    pub fn share(self) -> (ShipWriter, ShipReader) {
        let cell = Rc::new(RefCell::new(self));
        (
            ShipWriter {
                cell: Rc::clone(&cell),
            },
            ShipReader { cell },
        )
    }
}

/// The one handle allowed to mutate the ship. Not `Clone`.
#[derive(Debug)]
pub struct ShipWriter {
    cell: Rc<RefCell<ShipState>>,
}

impl ShipWriter {
    pub fn update<R>(&mut self, f: impl FnOnce(&mut ShipState) -> R) -> R {
        f(&mut *self.cell.borrow_mut())
    }

    pub fn snapshot(&self) -> ShipState {
        *self.cell.borrow()
    }
}

/// Read-only view of the ship.
#[derive(Debug, Clone)]
pub struct ShipReader {
    cell: Rc<RefCell<ShipState>>,
}

impl ShipReader {
    pub fn snapshot(&self) -> ShipState {
        *self.cell.borrow()
    }

    pub fn position(&self) -> Position {
        self.cell.borrow().pos
    }
}
