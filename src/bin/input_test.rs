//! Input diagnostic: prints the control input collected each tick.
//!
//! Useful for checking how a terminal reports arrow keys and repeats.
//! Press `q` to exit.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::terminal;

use tui_space::engine::ControlSource;
use tui_space::input::TerminalControls;
use tui_space::types::TICK_MS;

fn main() -> Result<()> {
    terminal::enable_raw_mode()?;
    let result = run();
    let _ = terminal::disable_raw_mode();
    result
}

fn run() -> Result<()> {
    let mut controls = TerminalControls::new();
    let mut stdout = io::stdout();
    let mut tick: u64 = 0;

    write!(stdout, "arrows steer, space fires, q quits\r\n")?;
    stdout.flush()?;

    loop {
        controls.pump()?;
        if controls.quit_requested() {
            return Ok(());
        }

        let input = controls.poll();
        if !input.is_neutral() {
            write!(
                stdout,
                "tick {tick:>6}  d_row={:>2} d_col={:>2} fire={}\r\n",
                input.d_row, input.d_col, input.fire
            )?;
            stdout.flush()?;
        }

        tick += 1;
        thread::sleep(Duration::from_millis(TICK_MS));
    }
}
