//! Entity behaviors. Each one is a [`Task`](crate::task::Task) owning the state
//! machine of a single animated thing.

pub mod debris;
pub mod projectile;
pub mod ship;
pub mod star;

pub use debris::{DebrisFall, DebrisSpawner};
pub use projectile::Projectile;
pub use ship::{ShipNavigation, ShipRender};
pub use star::{BlinkCadence, Star};
