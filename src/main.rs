//! Terminal space scene (default binary).
//!
//! Loads the frame assets, builds the scene and hands it to the scheduler
//! until the user quits. Uses crossterm for input and a diffing screen-buffer
//! renderer for output.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_space::config::Settings;
use tui_space::core::{SceneAssets, SimpleRng};
use tui_space::engine::{Scene, Scheduler};
use tui_space::input::TerminalControls;
use tui_space::term::TerminalSurface;
use tui_space::types::ScreenSize;

fn main() -> Result<()> {
    let settings = Settings::from_env();
    init_logging(&settings)?;

    // Asset problems are reported before the terminal is taken over.
    let assets = SceneAssets::load(&settings.frames_dir)
        .with_context(|| format!("loading frames from {}", settings.frames_dir.display()))?;

    let size = TerminalSurface::terminal_size()?;
    let mut surface = TerminalSurface::new(size);
    surface.enter()?;

    let result = run(&settings, &assets, size, &mut surface);

    // Always try to restore terminal state.
    let _ = surface.exit();
    result
}

fn run(
    settings: &Settings,
    assets: &SceneAssets,
    size: ScreenSize,
    surface: &mut TerminalSurface,
) -> Result<()> {
    let seed = settings.seed.unwrap_or_else(rand::random);
    info!(seed, "starting scene");

    let mut rng = SimpleRng::new(seed);
    let scene = Scene::build(&settings.scene, assets, size, &mut rng);
    let mut scheduler = Scheduler::with_tasks(settings.scene.tick, scene.tasks);
    let mut controls = TerminalControls::new();

    scheduler.run(surface, &mut controls)
}

/// Logs go to a file; the terminal belongs to the scene.
fn init_logging(settings: &Settings) -> Result<()> {
    let Some(path) = &settings.log_path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
