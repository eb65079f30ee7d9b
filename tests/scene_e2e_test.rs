//! End-to-end behavior of the scene tasks driven through the scheduler.

use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use tui_space::core::{Bounds, Frame, Handling, SceneAssets, ShipState, SimpleRng};
use tui_space::engine::behaviors::{BlinkCadence, DebrisFall, Projectile, ShipNavigation, Star};
use tui_space::engine::testing::ScriptedControls;
use tui_space::engine::{
    Canvas, IdleControls, Scene, SceneConfig, Scheduler, Status, Task, TickContext,
};
use tui_space::term::Screen;
use tui_space::types::{Brightness, ControlInput, Position, ScreenSize, Velocity};

fn tick() -> Duration {
    Duration::from_millis(100)
}

#[test]
fn navigation_scenario_on_24_by_80() {
    let screen_size = ScreenSize::new(24, 80);
    let ship_width = 5;
    let bounds = Bounds::for_ship(screen_size, 9, ship_width);
    let (writer, reader) = ShipState::new(Position::new(12.0, 40.0), bounds).share();

    let nav = ShipNavigation::new(writer, Handling::default(), ship_width, Velocity::new(-0.3, 0.0));
    let mut scheduler = Scheduler::with_tasks(tick(), [Box::new(nav) as Box<dyn Task>]);
    let mut screen = Screen::new(screen_size);
    let mut controls = ScriptedControls::new([
        ControlInput::new(0, 1, false),
        ControlInput::new(0, 1, false),
        ControlInput::new(0, 0, false),
    ]);

    let mut cols = vec![reader.position().col];
    for _ in 0..3 {
        scheduler.tick(&mut screen, &mut controls).unwrap();
        cols.push(reader.position().col);
    }

    let ship = reader.snapshot();
    // Two impulses (0.8, then 1.44) and one damping-only tick.
    assert!((ship.velocity.col_speed - 1.152).abs() < 1e-9);
    assert_eq!(ship.velocity.row_speed, 0.0);
    assert!(cols.windows(2).all(|w| w[1] > w[0]), "columns: {cols:?}");
    assert!(cols.iter().all(|c| *c <= f64::from(80 - 5 - 1)));
    assert!((ship.pos.col - (40.0 + 0.8 + 1.44 + 1.152)).abs() < 1e-9);
}

#[test]
fn fire_spawns_projectile_from_the_ship_nose() {
    let screen_size = ScreenSize::new(24, 80);
    let bounds = Bounds::for_ship(screen_size, 3, 5);
    let (writer, _reader) = ShipState::new(Position::new(10.0, 30.0), bounds).share();
    let nav = ShipNavigation::new(writer, Handling::default(), 5, Velocity::new(-0.3, 0.0));

    let mut scheduler = Scheduler::with_tasks(tick(), [Box::new(nav) as Box<dyn Task>]);
    let mut screen = Screen::new(screen_size);
    let mut controls = ScriptedControls::new([ControlInput::new(0, 0, true)]);

    scheduler.tick(&mut screen, &mut controls).unwrap();
    assert_eq!(scheduler.registry().count_named("projectile"), 1);

    // The shot muzzles at (10, 30 + 5 / 2) on its first step.
    scheduler.tick(&mut screen, &mut controls).unwrap();
    assert_eq!(screen.get(10, 32).map(|c| c.ch), Some('*'));
    assert!(screen.take_bell());
}

fn projectile_lifetime(row0: f64) -> u32 {
    let shot = Projectile::new(Position::new(row0, 40.0), Velocity::new(-0.3, 0.0));
    let mut scheduler = Scheduler::with_tasks(tick(), [Box::new(shot) as Box<dyn Task>]);
    let mut screen = Screen::new(ScreenSize::new(24, 80));

    let mut ticks = 0;
    while !scheduler.registry().is_empty() {
        scheduler.tick(&mut screen, &mut IdleControls).unwrap();
        ticks += 1;
        assert!(ticks < 1000, "projectile never finished");
    }
    ticks
}

#[test]
fn projectile_flight_lasts_ceil_row_over_speed() {
    // Two ticks of muzzle flash, then one tick per 0.3 rows of travel.
    // Multiples of 0.3 land exactly on the top edge.
    for row0 in [0.9_f64, 3.0, 5.0, 6.0, 7.0, 9.0, 10.0, 12.0, 20.0] {
        let flight = (row0 / 0.3 - 1e-9).ceil() as u32;
        assert_eq!(projectile_lifetime(row0), 2 + flight, "row0 = {row0}");
    }
}

#[test]
fn projectile_leaves_no_glyphs_behind() {
    let shot = Projectile::new(Position::new(6.0, 40.0), Velocity::new(-0.3, 0.0));
    let mut scheduler = Scheduler::with_tasks(tick(), [Box::new(shot) as Box<dyn Task>]);
    let mut screen = Screen::new(ScreenSize::new(24, 80));

    while !scheduler.registry().is_empty() {
        scheduler.tick(&mut screen, &mut IdleControls).unwrap();
    }
    for row in 0..24 {
        assert!(screen.row_text(row).trim().is_empty(), "row {row} not clean");
    }
}

#[test]
fn debris_crosses_a_20_row_screen_in_40_ticks() {
    let screen_size = ScreenSize::new(20, 40);
    let frame = Rc::new(Frame::parse("@@").unwrap());
    let fall = DebrisFall::new(frame, 10, 0.5, screen_size);
    let mut scheduler = Scheduler::with_tasks(tick(), [Box::new(fall) as Box<dyn Task>]);
    let mut screen = Screen::new(screen_size);

    // Tick 39 draws at row 19.0, the last row.
    for _ in 0..39 {
        scheduler.tick(&mut screen, &mut IdleControls).unwrap();
    }
    assert_eq!(screen.get(19, 10).map(|c| c.ch), Some('@'));

    // Tick 40 moves to 19.5, which rounds off the screen but is still below 20.
    scheduler.tick(&mut screen, &mut IdleControls).unwrap();
    assert_eq!(scheduler.registry().len(), 1);
    assert_eq!(screen.get(19, 10).map(|c| c.ch), Some(' '));

    let summary = scheduler.tick(&mut screen, &mut IdleControls).unwrap();
    assert_eq!(summary.finished, 1);
    assert!(scheduler.registry().is_empty());
    assert_eq!(scheduler.ticks(), 41);
}

/// Counts the brightness of every glyph put on it.
#[derive(Default)]
struct BrightnessTally {
    dim: usize,
    normal: usize,
    bold: usize,
}

impl Canvas for BrightnessTally {
    fn size(&self) -> ScreenSize {
        ScreenSize::new(24, 80)
    }

    fn put_glyph(&mut self, _row: i32, _col: i32, _ch: char, brightness: Brightness) {
        match brightness {
            Brightness::Dim => self.dim += 1,
            Brightness::Normal => self.normal += 1,
            Brightness::Bold => self.bold += 1,
        }
    }

    fn ring(&mut self) {}
}

#[test]
fn star_population_follows_the_duty_cycle() {
    let cadence = BlinkCadence::default();
    let total = cadence.total_ticks() as usize;
    let mut rng = SimpleRng::new(31337);
    let mut stars: Vec<Star> = (0..3100)
        .map(|_| Star::new(5, 5, '*', cadence.clone(), &mut rng))
        .collect();

    let mut controls = IdleControls;
    let mut spawned = Vec::new();
    let mut warmup = BrightnessTally::default();
    for _ in 0..total {
        let mut cx = TickContext::new(&mut warmup, &mut controls, &mut spawned);
        for star in &mut stars {
            assert_eq!(star.step(&mut cx).unwrap(), Status::Suspended);
        }
    }

    // Every offset has been consumed, so each star now draws exactly once.
    let mut tally = BrightnessTally::default();
    {
        let mut cx = TickContext::new(&mut tally, &mut controls, &mut spawned);
        for star in &mut stars {
            star.step(&mut cx).unwrap();
        }
    }
    assert_eq!(tally.dim + tally.normal + tally.bold, stars.len());

    let share = |n: usize| n as f64 / stars.len() as f64;
    assert!((share(tally.dim) - 20.0 / 31.0).abs() < 0.04, "dim {}", tally.dim);
    assert!((share(tally.normal) - 6.0 / 31.0).abs() < 0.04, "normal {}", tally.normal);
    assert!((share(tally.bold) - 5.0 / 31.0).abs() < 0.04, "bold {}", tally.bold);
}

#[test]
fn full_scene_runs_with_bundled_frames() {
    let frames_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("frames");
    let assets = SceneAssets::load(&frames_dir).unwrap();
    let screen_size = ScreenSize::new(30, 100);
    let mut rng = SimpleRng::new(7);
    let config = SceneConfig::default();

    let scene = Scene::build(&config, &assets, screen_size, &mut rng);
    let ship = scene.ship.clone();
    let bounds = ship.snapshot().bounds();
    let mut scheduler = Scheduler::with_tasks(config.tick, scene.tasks);
    let mut screen = Screen::new(screen_size);

    let script: Vec<_> = (0..400)
        .map(|_| {
            ControlInput::new(
                rng.range_inclusive(-1, 1),
                rng.range_inclusive(-1, 1),
                rng.next_range(10) == 0,
            )
        })
        .collect();
    let mut controls = ScriptedControls::new(script);

    let mut saw_debris = false;
    let mut saw_projectile = false;
    for _ in 0..400 {
        scheduler.tick(&mut screen, &mut controls).unwrap();
        screen.draw_border();
        assert!(bounds.contains(ship.position()));
        saw_debris |= scheduler.registry().count_named("debris") > 0;
        saw_projectile |= scheduler.registry().count_named("projectile") > 0;
    }

    assert!(saw_debris);
    assert!(saw_projectile);
    assert_eq!(scheduler.registry().count_named("star"), config.star_count);
    assert_eq!(scheduler.registry().count_named("debris-spawner"), 1);
    assert!(screen.row_text(0).starts_with('┌'));
}
