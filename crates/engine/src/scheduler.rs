//! Fixed-tick cooperative scheduler.
//!
//! One thread, no locks. Every tick steps each live task exactly once, then
//! redraws the border and presents the frame, then sleeps.
//!
//! The sleep is always the full tick interval, whatever the stepping cost, so
//! under load the real tick rate drifts below the nominal one. Animation speed
//! is expressed in ticks, not seconds, so drift slows the scene down rather
//! than making it skip.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use tracing::{info, trace};

use crate::io::{Canvas, ControlSource, Surface};
use crate::registry::{PassSummary, TaskRegistry};
use crate::task::Task;

pub struct Scheduler {
    registry: TaskRegistry,
    tick_interval: Duration,
    ticks: u64,
}

impl Scheduler {
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            registry: TaskRegistry::new(),
            tick_interval,
            ticks: 0,
        }
    }

    pub fn with_tasks(tick_interval: Duration, tasks: impl IntoIterator<Item = Box<dyn Task>>) -> Self {
        let mut scheduler = Self::new(tick_interval);
        for task in tasks {
            scheduler.spawn(task);
        }
        scheduler
    }

    pub fn spawn(&mut self, task: Box<dyn Task>) {
        self.registry.insert(task);
    }

    pub fn registry(&self) -> &TaskRegistry {
        &self.registry
    }

    /// Ticks completed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run one pass over the registry without chrome, presenting or sleeping.
    pub fn tick(
        &mut self,
        canvas: &mut dyn Canvas,
        controls: &mut dyn ControlSource,
    ) -> crate::core::Result<PassSummary> {
        let summary = self.registry.run_pass(canvas, controls)?;
        self.ticks += 1;
        trace!(
            tick = self.ticks,
            live = self.registry.len(),
            finished = summary.finished,
            spawned = summary.spawned,
            "tick"
        );
        Ok(summary)
    }

    /// Drive the scene until the control source asks to quit.
    pub fn run<S, C>(&mut self, surface: &mut S, controls: &mut C) -> Result<()>
    where
        S: Surface,
        C: ControlSource,
    {
        info!(
            tasks = self.registry.len(),
            tick_ms = self.tick_interval.as_millis() as u64,
            "scheduler started"
        );

        loop {
            controls.pump()?;
            if controls.quit_requested() {
                info!(ticks = self.ticks, "quit requested, stopping scheduler");
                return Ok(());
            }

            self.tick(surface, controls)?;
            surface.draw_border();
            surface.present()?;

            thread::sleep(self.tick_interval);
        }
    }
}
