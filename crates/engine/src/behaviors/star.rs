//! Twinkling star.

use crate::core::{Error, Result, SimpleRng};
use crate::task::{Status, Task, TickContext};
use crate::types::Brightness;

/// A cyclic sequence of `(brightness, ticks)` phases.
#[derive(Debug, Clone, PartialEq)]
pub struct BlinkCadence {
    phases: Vec<(Brightness, u32)>,
    total_ticks: u32,
}

impl BlinkCadence {
    /// Zero-length phases are dropped. Fails if nothing is left.
    pub fn new(phases: impl IntoIterator<Item = (Brightness, u32)>) -> Result<Self> {
        let phases: Vec<_> = phases.into_iter().filter(|(_, ticks)| *ticks > 0).collect();
        let total_ticks: u32 = phases.iter().map(|(_, ticks)| ticks).sum();
        if total_ticks == 0 {
            return Err(Error::InvalidCadence);
        }
        Ok(Self {
            phases,
            total_ticks,
        })
    }

    pub fn total_ticks(&self) -> u32 {
        self.total_ticks
    }

    /// Brightness shown `tick` ticks into the cycle.
    pub fn brightness_at(&self, tick: u32) -> Brightness {
        let mut t = tick % self.total_ticks;
        for &(brightness, ticks) in &self.phases {
            if t < ticks {
                return brightness;
            }
            t -= ticks;
        }
        unreachable!("tick is reduced modulo the cadence length")
    }
}

impl Default for BlinkCadence {
    /// Dim for 20 ticks, normal 3, bold 5, normal 3.
    fn default() -> Self {
        Self {
            phases: vec![
                (Brightness::Dim, 20),
                (Brightness::Normal, 3),
                (Brightness::Bold, 5),
                (Brightness::Normal, 3),
            ],
            total_ticks: 31,
        }
    }
}

/// A single star blinking through a [`BlinkCadence`] forever.
///
/// Stars start at a random point of the cycle, by idling that many ticks before
/// the first draw, so a field of them never blinks in unison.
pub struct Star {
    row: i32,
    col: i32,
    symbol: char,
    cadence: BlinkCadence,
    idle: u32,
    phase: usize,
    elapsed: u32,
}

impl Star {
    /// A star with an offset drawn uniformly from `[0, total_ticks)`.
    pub fn new(row: i32, col: i32, symbol: char, cadence: BlinkCadence, rng: &mut SimpleRng) -> Self {
        let offset = rng.next_range(cadence.total_ticks());
        Self::with_offset(row, col, symbol, cadence, offset)
    }

    pub fn with_offset(row: i32, col: i32, symbol: char, cadence: BlinkCadence, offset: u32) -> Self {
        Self {
            row,
            col,
            symbol,
            cadence,
            idle: offset,
            phase: 0,
            elapsed: 0,
        }
    }
}

impl Task for Star {
    fn name(&self) -> &'static str {
        "star"
    }

    fn step(&mut self, cx: &mut TickContext<'_>) -> Result<Status> {
        if self.idle > 0 {
            self.idle -= 1;
            return Ok(Status::Suspended);
        }

        let (brightness, ticks) = self.cadence.phases[self.phase];
        cx.canvas()
            .put_glyph(self.row, self.col, self.symbol, brightness);

        self.elapsed += 1;
        if self.elapsed >= ticks {
            self.elapsed = 0;
            self.phase = (self.phase + 1) % self.cadence.phases.len();
        }
        Ok(Status::Suspended)
    }
}
