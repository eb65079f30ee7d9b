//! The terminal-backed [`Surface`].

use anyhow::Result;

use crate::engine::{Canvas, Surface};
use crate::renderer::TerminalRenderer;
use crate::screen::Screen;
use crate::types::{Brightness, ScreenSize};

/// Screen buffer plus the renderer that flushes it.
pub struct TerminalSurface {
    screen: Screen,
    renderer: TerminalRenderer,
}

impl TerminalSurface {
    pub fn new(size: ScreenSize) -> Self {
        Self {
            screen: Screen::new(size),
            renderer: TerminalRenderer::new(),
        }
    }

    /// Size of the current terminal, as reported by crossterm.
    pub fn terminal_size() -> Result<ScreenSize> {
        let (cols, rows) = crossterm::terminal::size()?;
        Ok(ScreenSize::new(rows, cols))
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl Canvas for TerminalSurface {
    fn size(&self) -> ScreenSize {
        self.screen.size()
    }

    fn put_glyph(&mut self, row: i32, col: i32, ch: char, brightness: Brightness) {
        self.screen.put_glyph(row, col, ch, brightness);
    }

    fn ring(&mut self) {
        self.screen.ring();
    }
}

impl Surface for TerminalSurface {
    fn draw_border(&mut self) {
        self.screen.draw_border();
    }

    fn present(&mut self) -> Result<()> {
        self.renderer.present(&mut self.screen)
    }
}
