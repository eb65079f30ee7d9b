//! TerminalRenderer: flushes a screen buffer to a real terminal.
//!
//! The first present is a full redraw; after that only runs of changed cells
//! are written.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, SetAttribute},
    terminal, QueueableCommand,
};

use crate::screen::Screen;
use crate::types::Brightness;

const BELL: &str = "\x07";

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Screen>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Write the screen, diffing against what was presented last.
    pub fn present(&mut self, screen: &mut Screen) -> Result<()> {
        self.buf.clear();
        match &self.last {
            Some(prev) if prev.rows() == screen.rows() && prev.cols() == screen.cols() => {
                encode_diff_into(prev, screen, &mut self.buf)?;
            }
            _ => encode_full_into(screen, &mut self.buf)?,
        }
        if screen.take_bell() {
            self.buf.queue(Print(BELL))?;
        }
        self.flush_buf()?;

        match &mut self.last {
            Some(prev) => prev.clone_from(screen),
            None => self.last = Some(screen.clone()),
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-screen redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(screen: &Screen, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut current: Option<Brightness> = None;
    for row in 0..screen.rows() {
        out.queue(cursor::MoveTo(0, row))?;
        for col in 0..screen.cols() {
            let cell = screen
                .get(i32::from(row), i32::from(col))
                .unwrap_or_default();
            if current != Some(cell.brightness) {
                apply_brightness_into(out, cell.brightness)?;
                current = Some(cell.brightness);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(prev: &Screen, next: &Screen, out: &mut Vec<u8>) -> Result<()> {
    let mut current: Option<Brightness> = None;

    for_each_changed_run(prev, next, |row, col, len| {
        out.queue(cursor::MoveTo(col, row))?;
        for dx in 0..len {
            let cell = next
                .get(i32::from(row), i32::from(col + dx))
                .unwrap_or_default();
            if current != Some(cell.brightness) {
                apply_brightness_into(out, cell.brightness)?;
                current = Some(cell.brightness);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_brightness_into(out: &mut Vec<u8>, brightness: Brightness) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    match brightness {
        Brightness::Dim => {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        Brightness::Bold => {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        Brightness::Normal => {}
    }
    Ok(())
}

/// Call `f(row, col, len)` for every horizontal run of cells that differ.
fn for_each_changed_run(
    prev: &Screen,
    next: &Screen,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let cols = next.cols();

    for row in 0..next.rows() {
        let differs = |col: u16| {
            let (r, c) = (i32::from(row), i32::from(col));
            prev.get(r, c) != next.get(r, c)
        };

        let mut col = 0;
        while col < cols {
            if !differs(col) {
                col += 1;
                continue;
            }

            let start = col;
            col += 1;
            while col < cols && differs(col) {
                col += 1;
            }
            f(row, start, col - start)?;
        }
    }

    Ok(())
}
