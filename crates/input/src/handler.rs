//! Terminal control source.
//!
//! Pending key events are drained once per tick and collapsed into one
//! [`ControlInput`], which the ship reads when it steps.

use std::time::Duration;

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::engine::ControlSource;
use crate::map::{fold_controls, map_key, should_quit, Control};
use crate::types::ControlInput;

/// Gestures kept per tick. Anything beyond waits for the next tick.
const MAX_CONTROLS_PER_TICK: usize = 32;

/// Reads the real terminal without blocking.
#[derive(Debug, Default)]
pub struct TerminalControls {
    latched: ControlInput,
    quit: bool,
}

impl TerminalControls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key press. Returns `false` once the buffer is full.
    fn accept(&mut self, key: KeyEvent, pending: &mut ArrayVec<Control, MAX_CONTROLS_PER_TICK>) -> bool {
        if key.kind == KeyEventKind::Release {
            return true;
        }
        if should_quit(key) {
            self.quit = true;
            return true;
        }
        match map_key(key) {
            Some(control) => pending.try_push(control).is_ok(),
            None => true,
        }
    }
}

impl ControlSource for TerminalControls {
    fn pump(&mut self) -> Result<()> {
        let mut pending = ArrayVec::<Control, MAX_CONTROLS_PER_TICK>::new();
        while !pending.is_full() && event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if !self.accept(key, &mut pending) {
                    break;
                }
            }
        }
        self.latched = fold_controls(&pending);
        Ok(())
    }

    fn poll(&mut self) -> ControlInput {
        std::mem::take(&mut self.latched)
    }

    fn quit_requested(&self) -> bool {
        self.quit
    }
}
