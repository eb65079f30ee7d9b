//! Capped-velocity integrator for the ship.
//!
//! Each axis is updated independently: the input direction is added as an
//! impulse, the result is clamped on the side the input points to, and the
//! speed is damped. Without input the ship drifts to rest instead of stopping.

use crate::error::{Error, Result};
use crate::types::{Velocity, DAMPING_FRACTION, SPEED_LIMIT};

/// Advance one axis speed by one tick.
///
/// Only the bound on the side of `direction` is enforced (`direction >= 0`
/// caps at `+limit`, `direction < 0` caps at `-limit`); the other side is left
/// alone. Damping is applied after the clamp.
pub fn update_speed(speed: f64, direction: i32, limit: f64, damping: f64) -> Result<f64> {
    if !(-1..=1).contains(&direction) {
        return Err(Error::InvalidDirection(direction));
    }

    let mut next = speed + f64::from(direction);
    if direction >= 0 {
        next = next.min(limit);
    } else {
        next = next.max(-limit);
    }

    Ok(next * damping)
}

/// Speed limit and damping applied by [`Handling::steer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handling {
    pub limit: f64,
    pub damping: f64,
}

impl Handling {
    pub const fn new(limit: f64, damping: f64) -> Self {
        Self { limit, damping }
    }

    /// Apply a `(d_row, d_col)` input to both axes. Diagonals are not normalized.
    pub fn steer(&self, velocity: Velocity, d_row: i32, d_col: i32) -> Result<Velocity> {
        Ok(Velocity {
            row_speed: update_speed(velocity.row_speed, d_row, self.limit, self.damping)?,
            col_speed: update_speed(velocity.col_speed, d_col, self.limit, self.damping)?,
        })
    }
}

impl Default for Handling {
    fn default() -> Self {
        Self::new(SPEED_LIMIT, DAMPING_FRACTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn impulse_then_damping() {
        let s = update_speed(0.0, 1, 2.0, 0.8).unwrap();
        assert!((s - 0.8).abs() < EPS);

        let s = update_speed(s, 1, 2.0, 0.8).unwrap();
        assert!((s - 1.44).abs() < EPS);
    }

    #[test]
    fn clamp_only_on_input_side() {
        // 1.9 + 1 is capped at 2.0 before damping.
        let s = update_speed(1.9, 1, 2.0, 0.8).unwrap();
        assert!((s - 1.6).abs() < EPS);

        // Pushing up caps at -limit.
        let s = update_speed(-1.9, -1, 2.0, 0.8).unwrap();
        assert!((s + 1.6).abs() < EPS);

        // With no input only the upper bound is enforced, so an out-of-range
        // negative speed is merely damped.
        let s = update_speed(-5.0, 0, 2.0, 0.8).unwrap();
        assert!((s + 4.0).abs() < EPS);

        // A positive speed above the limit is capped even with zero input.
        let s = update_speed(5.0, 0, 2.0, 0.8).unwrap();
        assert!((s - 1.6).abs() < EPS);
    }

    #[test]
    fn zero_input_decays_to_rest() {
        let mut s = 1.6;
        for _ in 0..100 {
            s = update_speed(s, 0, 2.0, 0.8).unwrap();
        }
        assert!(s.abs() < 1e-6);
    }

    #[test]
    fn rejects_out_of_range_direction() {
        assert!(matches!(
            update_speed(0.0, 2, 2.0, 0.8),
            Err(Error::InvalidDirection(2))
        ));
        assert!(matches!(
            update_speed(0.0, -3, 2.0, 0.8),
            Err(Error::InvalidDirection(-3))
        ));
    }

    #[test]
    fn axes_are_independent() {
        let handling = Handling::default();
        let v = handling.steer(Velocity::ZERO, 1, 1).unwrap();
        assert!((v.row_speed - 0.8).abs() < EPS);
        assert!((v.col_speed - 0.8).abs() < EPS);

        let v = handling.steer(v, 0, -1).unwrap();
        assert!((v.row_speed - 0.64).abs() < EPS);
        assert!((v.col_speed - (-0.2 * 0.8)).abs() < EPS);
    }
}
