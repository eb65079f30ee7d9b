//! Collaborator seams: where the scene meets the terminal.
//!
//! The engine never touches a real terminal. Drawing goes through [`Canvas`],
//! input through [`ControlSource`], and the per-tick chrome/flush through
//! [`Surface`]. The terminal front end implements all three; tests use
//! in-memory versions.

use anyhow::Result;

use crate::core::Frame;
use crate::types::{Brightness, ControlInput, Position, ScreenSize};

/// A grid of character cells the tasks draw onto.
pub trait Canvas {
    fn size(&self) -> ScreenSize;

    /// Put one glyph. Cells off the screen are silently dropped.
    fn put_glyph(&mut self, row: i32, col: i32, ch: char, brightness: Brightness);

    /// Emit an audible cue.
    fn ring(&mut self);

    /// Draw (or erase) multi-line text with its top-left corner at `(row, col)`.
    ///
    /// Spaces are transparent. Glyphs falling off the screen are clipped one by
    /// one, and the bottom-right cell is always skipped since terminals scroll
    /// when it is written.
    fn draw_text(&mut self, row: i32, col: i32, text: &str, erase: bool) {
        draw_lines(self, row, col, text.lines(), erase);
    }

    /// Draw (or erase) a frame at a fractional position, rounded to the nearest cell.
    fn draw_frame(&mut self, pos: Position, frame: &Frame, erase: bool) {
        let (row, col) = pos.rounded();
        draw_lines(self, row, col, frame.lines(), erase);
    }
}

fn draw_lines<'a, C: Canvas + ?Sized>(
    canvas: &mut C,
    row: i32,
    col: i32,
    lines: impl Iterator<Item = &'a str>,
    erase: bool,
) {
    let size = canvas.size();
    let last_row = i32::from(size.rows) - 1;
    let last_col = i32::from(size.cols) - 1;

    for (dy, line) in lines.enumerate() {
        let r = row + dy as i32;
        if r < 0 {
            continue;
        }
        if r > last_row {
            break;
        }
        for (dx, ch) in line.chars().enumerate() {
            let c = col + dx as i32;
            if c < 0 || ch == ' ' {
                continue;
            }
            if c > last_col {
                break;
            }
            if r == last_row && c == last_col {
                continue;
            }
            let glyph = if erase { ' ' } else { ch };
            canvas.put_glyph(r, c, glyph, Brightness::Normal);
        }
    }
}

/// Source of per-tick controls.
pub trait ControlSource {
    /// Latch whatever input arrived since the last tick. Called once per tick
    /// by the scheduler before any task runs.
    fn pump(&mut self) -> Result<()>;

    /// Controls for this tick. Neutral when nothing is pending. Reading consumes
    /// the latched fire request.
    fn poll(&mut self) -> ControlInput;

    /// Whether the user asked to leave.
    fn quit_requested(&self) -> bool;
}

/// A canvas that can also draw chrome and present a finished frame.
pub trait Surface: Canvas {
    fn draw_border(&mut self);

    fn present(&mut self) -> Result<()>;
}

/// A control source that never produces input.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdleControls;

impl ControlSource for IdleControls {
    fn pump(&mut self) -> Result<()> {
        Ok(())
    }

    fn poll(&mut self) -> ControlInput {
        ControlInput::NEUTRAL
    }

    fn quit_requested(&self) -> bool {
        false
    }
}
