//! Projectile fired from the ship.

use crate::core::Result;
use crate::task::{Status, Task, TickContext};
use crate::types::{Brightness, Position, Velocity};

const MUZZLE_GLYPH: char = '*';
const FLASH_GLYPH: char = 'O';

/// Positions within this distance of the border count as on it.
const EDGE_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Stage {
    /// Ring and draw the muzzle glyph.
    Muzzle,
    /// Replace the muzzle with the flash glyph.
    Flash,
    /// Erase whatever was drawn last, advance, draw again.
    Flight { drawn: (i32, i32) },
}

/// A shot travelling in a straight line until it leaves the screen.
///
/// Finishes on the first tick its position is no longer strictly inside the
/// border, i.e. outside `(0, rows - 1) x (0, cols - 1)`. The position after
/// `k` flight ticks is `origin + k * velocity`, so repeated float additions
/// never carry a shot past a border it should have reached exactly.
pub struct Projectile {
    origin: Position,
    pos: Position,
    velocity: Velocity,
    flight_ticks: u32,
    stage: Stage,
}

impl Projectile {
    pub fn new(pos: Position, velocity: Velocity) -> Self {
        Self {
            origin: pos,
            pos,
            velocity,
            flight_ticks: 0,
            stage: Stage::Muzzle,
        }
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    fn advance(&mut self) {
        self.flight_ticks += 1;
        let k = f64::from(self.flight_ticks);
        self.pos = Position::new(
            self.origin.row + k * self.velocity.row_speed,
            self.origin.col + k * self.velocity.col_speed,
        );
    }

    fn travel_glyph(&self) -> char {
        if self.velocity.col_speed != 0.0 {
            '-'
        } else {
            '|'
        }
    }
}

impl Task for Projectile {
    fn name(&self) -> &'static str {
        "projectile"
    }

    fn step(&mut self, cx: &mut TickContext<'_>) -> Result<Status> {
        let (row, col) = self.pos.rounded();
        let canvas = cx.canvas();

        match self.stage {
            Stage::Muzzle => {
                canvas.ring();
                canvas.put_glyph(row, col, MUZZLE_GLYPH, Brightness::Normal);
                self.stage = Stage::Flash;
            }
            Stage::Flash => {
                canvas.put_glyph(row, col, FLASH_GLYPH, Brightness::Normal);
                self.stage = Stage::Flight { drawn: (row, col) };
            }
            Stage::Flight { drawn } => {
                canvas.put_glyph(drawn.0, drawn.1, ' ', Brightness::Normal);
                self.advance();

                let size = canvas.size();
                let max_row = f64::from(size.rows) - 1.0 - EDGE_EPSILON;
                let max_col = f64::from(size.cols) - 1.0 - EDGE_EPSILON;
                let inside = EDGE_EPSILON < self.pos.row
                    && self.pos.row < max_row
                    && EDGE_EPSILON < self.pos.col
                    && self.pos.col < max_col;
                if !inside {
                    return Ok(Status::Finished);
                }

                let (row, col) = self.pos.rounded();
                canvas.put_glyph(row, col, self.travel_glyph(), Brightness::Normal);
                self.stage = Stage::Flight { drawn: (row, col) };
            }
        }
        Ok(Status::Suspended)
    }
}
