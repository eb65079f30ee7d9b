//! Falling space debris and the spawner that keeps it coming.

use std::rc::Rc;

use crate::core::{Frame, Result, SimpleRng};
use crate::task::{Status, Task, TickContext};
use crate::types::{Position, ScreenSize};

/// One piece of debris falling straight down at a constant speed.
pub struct DebrisFall {
    frame: Rc<Frame>,
    row: f64,
    col: f64,
    speed: f64,
    drawn: bool,
}

impl DebrisFall {
    /// Starts at row 0; `col` is pulled onto the screen.
    pub fn new(frame: Rc<Frame>, col: i32, speed: f64, screen: ScreenSize) -> Self {
        let last_col = (i32::from(screen.cols) - 1).max(0);
        Self {
            frame,
            row: 0.0,
            col: f64::from(col.clamp(0, last_col)),
            speed,
            drawn: false,
        }
    }

    pub fn row(&self) -> f64 {
        self.row
    }

    pub fn col(&self) -> f64 {
        self.col
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }
}

impl Task for DebrisFall {
    fn name(&self) -> &'static str {
        "debris"
    }

    fn step(&mut self, cx: &mut TickContext<'_>) -> Result<Status> {
        let canvas = cx.canvas();
        if self.drawn {
            canvas.draw_frame(Position::new(self.row, self.col), &self.frame, true);
            self.row += self.speed;
            self.drawn = false;
        }

        if self.row >= f64::from(canvas.size().rows) {
            return Ok(Status::Finished);
        }

        canvas.draw_frame(Position::new(self.row, self.col), &self.frame, false);
        self.drawn = true;
        Ok(Status::Suspended)
    }
}

/// Spawns a [`DebrisFall`] every `interval` ticks, forever.
pub struct DebrisSpawner {
    frames: Vec<Rc<Frame>>,
    rng: SimpleRng,
    interval: u32,
    speed_range: (f64, f64),
    idle: u32,
}

impl DebrisSpawner {
    pub fn new(frames: Vec<Rc<Frame>>, rng: SimpleRng, interval: u32, speed_range: (f64, f64)) -> Self {
        Self {
            frames,
            rng,
            interval,
            speed_range,
            idle: 0,
        }
    }
}

impl Task for DebrisSpawner {
    fn name(&self) -> &'static str {
        "debris-spawner"
    }

    fn step(&mut self, cx: &mut TickContext<'_>) -> Result<Status> {
        if self.idle > 0 {
            self.idle -= 1;
            return Ok(Status::Suspended);
        }
        self.idle = self.interval.saturating_sub(1);

        let Some(frame) = self.rng.choose(&self.frames).cloned() else {
            return Ok(Status::Suspended);
        };

        let screen = cx.canvas().size();
        // Keep the whole frame inside the side borders.
        let max_col = i32::from(screen.cols) - frame.width() as i32 - 1;
        let col = self.rng.range_inclusive(1, max_col.max(1));
        let (lo, hi) = self.speed_range;
        let speed = self.rng.uniform(lo, hi);

        cx.spawn(Box::new(DebrisFall::new(frame, col, speed, screen)));
        Ok(Status::Suspended)
    }
}
