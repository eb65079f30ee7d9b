//! Scene configuration and the initial task set.

use std::rc::Rc;
use std::time::Duration;

use tracing::info;

use crate::behaviors::{BlinkCadence, DebrisSpawner, Projectile, ShipNavigation, ShipRender, Star};
use crate::core::{Bounds, Handling, SceneAssets, ShipReader, ShipState, SimpleRng};
use crate::task::Task;
use crate::types::{
    Position, ScreenSize, Velocity, DEBRIS_MAX_SPEED, DEBRIS_MIN_SPEED, DEBRIS_SPAWN_INTERVAL_TICKS,
    PROJECTILE_COL_SPEED, PROJECTILE_ROW_SPEED, SHIP_RENDER_PAUSE_TICKS, STAR_COUNT, STAR_SYMBOLS,
    TICK_MS,
};

/// Tunables for one scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub tick: Duration,
    pub star_count: usize,
    pub star_symbols: Vec<char>,
    pub cadence: BlinkCadence,
    pub handling: Handling,
    pub ship_pause_ticks: u32,
    pub shot_velocity: Velocity,
    pub spawn_interval: u32,
    pub debris_speed: (f64, f64),
    /// Fire one shot from the screen center when the scene opens.
    pub opening_shot: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(TICK_MS),
            star_count: STAR_COUNT,
            star_symbols: STAR_SYMBOLS.chars().collect(),
            cadence: BlinkCadence::default(),
            handling: Handling::default(),
            ship_pause_ticks: SHIP_RENDER_PAUSE_TICKS,
            shot_velocity: Velocity::new(PROJECTILE_ROW_SPEED, PROJECTILE_COL_SPEED),
            spawn_interval: DEBRIS_SPAWN_INTERVAL_TICKS,
            debris_speed: (DEBRIS_MIN_SPEED, DEBRIS_MAX_SPEED),
            opening_shot: true,
        }
    }
}

/// The tasks a scene starts with, plus a read handle on the ship.
pub struct Scene {
    pub tasks: Vec<Box<dyn Task>>,
    pub ship: ShipReader,
}

impl Scene {
    /// Lay out stars, the opening shot, the ship and the debris spawner.
    pub fn build(
        config: &SceneConfig,
        assets: &SceneAssets,
        screen: ScreenSize,
        rng: &mut SimpleRng,
    ) -> Self {
        let mut tasks: Vec<Box<dyn Task>> = Vec::new();

        // Stars stay off the border.
        if screen.rows >= 3 && screen.cols >= 3 && !config.star_symbols.is_empty() {
            let max_row = i32::from(screen.rows) - 2;
            let max_col = i32::from(screen.cols) - 2;
            for _ in 0..config.star_count {
                let row = rng.range_inclusive(1, max_row);
                let col = rng.range_inclusive(1, max_col);
                let symbol = rng.choose(&config.star_symbols).copied().unwrap_or('*');
                tasks.push(Box::new(Star::new(row, col, symbol, config.cadence.clone(), rng)));
            }
        }

        let center = Position::new(
            f64::from(screen.rows / 2),
            f64::from(screen.cols / 2),
        );
        if config.opening_shot {
            tasks.push(Box::new(Projectile::new(center, config.shot_velocity)));
        }

        let ship_frames: Vec<_> = assets.ship.iter().cloned().map(Rc::new).collect();
        let (ship_height, ship_width) = ship_frames
            .iter()
            .map(|f| f.size())
            .fold((0, 0), |(h, w), (fh, fw)| (h.max(fh), w.max(fw)));
        let bounds = Bounds::for_ship(screen, ship_height, ship_width);
        let (writer, reader) = ShipState::new(center, bounds).share();

        tasks.push(Box::new(ShipNavigation::new(
            writer,
            config.handling,
            ship_width,
            config.shot_velocity,
        )));
        tasks.push(Box::new(ShipRender::new(
            reader.clone(),
            ship_frames,
            config.ship_pause_ticks,
        )));

        let debris_frames = assets.debris.iter().cloned().map(Rc::new).collect();
        tasks.push(Box::new(DebrisSpawner::new(
            debris_frames,
            rng.fork(),
            config.spawn_interval,
            config.debris_speed,
        )));

        info!(
            rows = screen.rows,
            cols = screen.cols,
            tasks = tasks.len(),
            "scene built"
        );
        Self {
            tasks,
            ship: reader,
        }
    }
}
