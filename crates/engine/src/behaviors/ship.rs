//! The player's ship: one task steers it, another draws it.

use std::rc::Rc;

use crate::behaviors::projectile::Projectile;
use crate::core::{Frame, Handling, Result, ShipReader, ShipWriter};
use crate::task::{Status, Task, TickContext};
use crate::types::{Position, Velocity};

/// Reads the controls, moves the ship and fires. The only ship writer.
pub struct ShipNavigation {
    ship: ShipWriter,
    handling: Handling,
    ship_width: usize,
    shot_velocity: Velocity,
}

impl ShipNavigation {
    pub fn new(ship: ShipWriter, handling: Handling, ship_width: usize, shot_velocity: Velocity) -> Self {
        Self {
            ship,
            handling,
            ship_width,
            shot_velocity,
        }
    }
}

impl Task for ShipNavigation {
    fn name(&self) -> &'static str {
        "ship-navigation"
    }

    fn step(&mut self, cx: &mut TickContext<'_>) -> Result<Status> {
        let input = cx.poll_controls();
        let handling = self.handling;
        let pos = self.ship.update(|ship| {
            ship.steer(&handling, input.d_row, input.d_col)?;
            Ok::<_, crate::core::Error>(ship.pos)
        })?;

        if input.fire {
            let muzzle = Position::new(pos.row, pos.col + (self.ship_width / 2) as f64);
            cx.spawn(Box::new(Projectile::new(muzzle, self.shot_velocity)));
        }
        Ok(Status::Suspended)
    }
}

/// Redraws the ship every `pause_ticks` ticks, alternating its frames.
pub struct ShipRender {
    ship: ShipReader,
    frames: Vec<Rc<Frame>>,
    next_frame: usize,
    drawn: Option<(Position, usize)>,
    pause_ticks: u32,
    idle: u32,
}

impl ShipRender {
    pub fn new(ship: ShipReader, frames: Vec<Rc<Frame>>, pause_ticks: u32) -> Self {
        Self {
            ship,
            frames,
            next_frame: 0,
            drawn: None,
            pause_ticks,
            idle: 0,
        }
    }
}

impl Task for ShipRender {
    fn name(&self) -> &'static str {
        "ship-render"
    }

    fn step(&mut self, cx: &mut TickContext<'_>) -> Result<Status> {
        if self.idle > 0 {
            self.idle -= 1;
            return Ok(Status::Suspended);
        }
        if self.frames.is_empty() {
            return Ok(Status::Suspended);
        }

        let canvas = cx.canvas();
        if let Some((pos, frame)) = self.drawn {
            canvas.draw_frame(pos, &self.frames[frame], true);
        }

        let pos = self.ship.position();
        canvas.draw_frame(pos, &self.frames[self.next_frame], false);
        self.drawn = Some((pos, self.next_frame));
        self.next_frame = (self.next_frame + 1) % self.frames.len();

        self.idle = self.pause_ticks.saturating_sub(1);
        Ok(Status::Suspended)
    }
}
