//! The scheduling unit.
//!
//! A [`Task`] is a resumable piece of animation. Each call to [`Task::step`]
//! performs one tick worth of visible work and returns; whatever the task needs
//! to resume lives in its own fields.

use crate::core::Result;
use crate::io::{Canvas, ControlSource};
use crate::types::ControlInput;

/// Outcome of one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Step again next tick.
    Suspended,
    /// Remove from the registry.
    Finished,
}

pub trait Task {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    /// Advance by one tick. Errors abort the whole scheduler.
    fn step(&mut self, cx: &mut TickContext<'_>) -> Result<Status>;
}

/// Everything a task may touch during its step.
///
/// Tasks spawned through [`TickContext::spawn`] are parked until the current
/// pass is over, so they are first stepped on the following tick.
pub struct TickContext<'a> {
    canvas: &'a mut dyn Canvas,
    controls: &'a mut dyn ControlSource,
    spawned: &'a mut Vec<Box<dyn Task>>,
}

impl<'a> TickContext<'a> {
    pub fn new(
        canvas: &'a mut dyn Canvas,
        controls: &'a mut dyn ControlSource,
        spawned: &'a mut Vec<Box<dyn Task>>,
    ) -> Self {
        Self {
            canvas,
            controls,
            spawned,
        }
    }

    pub fn canvas(&mut self) -> &mut dyn Canvas {
        &mut *self.canvas
    }

    pub fn poll_controls(&mut self) -> ControlInput {
        self.controls.poll()
    }

    pub fn spawn(&mut self, task: Box<dyn Task>) {
        self.spawned.push(task);
    }
}
