//! In-memory collaborators for tests.
//!
//! Built for this crate's unit tests and, with the `testing` feature, for
//! integration tests elsewhere in the workspace.

use std::collections::{HashMap, VecDeque};

use anyhow::Result;

use crate::core;
use crate::io::{Canvas, ControlSource, IdleControls};
use crate::task::{Status, Task, TickContext};
use crate::types::{Brightness, ControlInput, ScreenSize};

/// Canvas that remembers every glyph put on it.
pub struct RecordingCanvas {
    size: ScreenSize,
    pub draws: Vec<(i32, i32, char, Brightness)>,
    pub cells: HashMap<(i32, i32), char>,
    pub bells: usize,
}

impl RecordingCanvas {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            size: ScreenSize::new(rows, cols),
            draws: Vec::new(),
            cells: HashMap::new(),
            bells: 0,
        }
    }

    pub fn char_at(&self, row: i32, col: i32) -> Option<char> {
        self.cells.get(&(row, col)).copied()
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> ScreenSize {
        self.size
    }

    fn put_glyph(&mut self, row: i32, col: i32, ch: char, brightness: Brightness) {
        if !self.size.contains(row, col) {
            return;
        }
        self.draws.push((row, col, ch, brightness));
        self.cells.insert((row, col), ch);
    }

    fn ring(&mut self) {
        self.bells += 1;
    }
}

/// Plays back a fixed list of inputs, then stays neutral.
pub struct ScriptedControls {
    script: VecDeque<ControlInput>,
}

impl ScriptedControls {
    pub fn new(script: impl IntoIterator<Item = ControlInput>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl ControlSource for ScriptedControls {
    fn pump(&mut self) -> Result<()> {
        Ok(())
    }

    fn poll(&mut self) -> ControlInput {
        self.script.pop_front().unwrap_or(ControlInput::NEUTRAL)
    }

    fn quit_requested(&self) -> bool {
        false
    }
}

pub fn step_with(
    task: &mut dyn Task,
    canvas: &mut RecordingCanvas,
    controls: &mut dyn ControlSource,
    spawned: &mut Vec<Box<dyn Task>>,
) -> core::Result<Status> {
    let mut cx = TickContext::new(canvas, controls, spawned);
    task.step(&mut cx)
}

/// Step up to `n` times with idle controls, stopping after `Finished`.
pub fn step_n(task: &mut dyn Task, canvas: &mut RecordingCanvas, n: usize) -> Vec<Status> {
    let mut controls = IdleControls;
    let mut spawned = Vec::new();
    let mut statuses = Vec::with_capacity(n);
    for _ in 0..n {
        let status = step_with(task, canvas, &mut controls, &mut spawned).unwrap();
        statuses.push(status);
        if status == Status::Finished {
            break;
        }
    }
    statuses
}
