//! Cooperative scene engine.
//!
//! Many small animation routines share one thread. Each is a [`Task`] that does
//! one tick of work per call to [`Task::step`]; the [`Scheduler`] steps every
//! live task once per tick at a fixed interval.
//!
//! # Module Structure
//!
//! - [`task`]: the `Task` trait, step `Status` and the per-step `TickContext`
//! - [`registry`]: live task storage with snapshot-then-merge passes
//! - [`scheduler`]: the tick loop
//! - [`io`]: `Canvas`, `ControlSource` and `Surface`, implemented by the front end
//! - [`behaviors`]: stars, ship, projectiles and debris
//! - [`scene`]: scene configuration and the initial task set
//!
//! # Spawning
//!
//! A task may spawn others mid-step. New tasks are held back until the pass
//! ends and are first stepped on the next tick, so a pass never sees tasks it
//! created.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use tui_space_engine::behaviors::{BlinkCadence, Star};
//! use tui_space_engine::io::{Canvas, IdleControls};
//! use tui_space_engine::types::{Brightness, ScreenSize};
//! use tui_space_engine::{Scheduler, Task};
//!
//! struct Blank;
//! impl Canvas for Blank {
//!     fn size(&self) -> ScreenSize { ScreenSize::new(10, 10) }
//!     fn put_glyph(&mut self, _: i32, _: i32, _: char, _: Brightness) {}
//!     fn ring(&mut self) {}
//! }
//!
//! let star = Star::with_offset(1, 1, '*', BlinkCadence::default(), 0);
//! let mut scheduler = Scheduler::with_tasks(Duration::from_millis(100), [Box::new(star) as Box<dyn Task>]);
//!
//! scheduler.tick(&mut Blank, &mut IdleControls).unwrap();
//! assert_eq!(scheduler.registry().len(), 1);
//! ```

pub mod behaviors;
pub mod io;
pub mod registry;
pub mod scene;
pub mod scheduler;
pub mod task;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use tui_space_core as core;
pub use tui_space_types as types;

pub use io::{Canvas, ControlSource, IdleControls, Surface};
pub use registry::{PassSummary, TaskId, TaskRegistry};
pub use scene::{Scene, SceneConfig};
pub use scheduler::Scheduler;
pub use task::{Status, Task, TickContext};
