//! Screen buffer: a persistent grid of styled cells.
//!
//! Tasks draw and erase explicitly, so the buffer is never cleared between
//! ticks; whatever was put on it stays until something overwrites it.

use crate::engine::Canvas;
use crate::types::{Brightness, ScreenSize};

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub brightness: Brightness,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            brightness: Brightness::Normal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    size: ScreenSize,
    cells: Vec<Cell>,
    bell: bool,
}

impl Screen {
    pub fn new(size: ScreenSize) -> Self {
        let len = usize::from(size.rows) * usize::from(size.cols);
        Self {
            size,
            cells: vec![Cell::default(); len],
            bell: false,
        }
    }

    pub fn rows(&self) -> u16 {
        self.size.rows
    }

    pub fn cols(&self) -> u16 {
        self.size.cols
    }

    #[inline(always)]
    fn idx(&self, row: i32, col: i32) -> Option<usize> {
        if !self.size.contains(row, col) {
            return None;
        }
        Some(row as usize * usize::from(self.size.cols) + col as usize)
    }

    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.idx(row, col).map(|i| self.cells[i])
    }

    pub fn set(&mut self, row: i32, col: i32, cell: Cell) {
        if let Some(i) = self.idx(row, col) {
            self.cells[i] = cell;
        }
    }

    /// Text of one row, for assertions and debugging.
    pub fn row_text(&self, row: u16) -> String {
        (0..self.size.cols)
            .map(|col| {
                self.get(i32::from(row), i32::from(col))
                    .unwrap_or_default()
                    .ch
            })
            .collect()
    }

    /// Frame the screen with a box drawn on its outermost cells.
    ///
    /// The bottom-right corner stays blank: writing it scrolls some terminals.
    pub fn draw_border(&mut self) {
        let rows = i32::from(self.size.rows);
        let cols = i32::from(self.size.cols);
        if rows < 2 || cols < 2 {
            return;
        }

        let edge = |ch| Cell {
            ch,
            brightness: Brightness::Normal,
        };
        for col in 1..cols - 1 {
            self.set(0, col, edge('─'));
            self.set(rows - 1, col, edge('─'));
        }
        for row in 1..rows - 1 {
            self.set(row, 0, edge('│'));
            self.set(row, cols - 1, edge('│'));
        }
        self.set(0, 0, edge('┌'));
        self.set(0, cols - 1, edge('┐'));
        self.set(rows - 1, 0, edge('└'));
    }

    /// Whether a bell was rung since the last call; clears the request.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell)
    }
}

impl Canvas for Screen {
    fn size(&self) -> ScreenSize {
        self.size
    }

    fn put_glyph(&mut self, row: i32, col: i32, ch: char, brightness: Brightness) {
        self.set(row, col, Cell { ch, brightness });
    }

    fn ring(&mut self) {
        self.bell = true;
    }
}
