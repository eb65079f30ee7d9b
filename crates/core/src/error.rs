//! Error types for the pure scene logic.

use std::io;
use std::path::PathBuf;

/// Errors raised by the core crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A steering direction outside `{-1, 0, 1}`.
    #[error("invalid direction {0}: expected -1, 0 or 1")]
    InvalidDirection(i32),

    #[error("failed to load frame asset {}", path.display())]
    AssetLoad {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Frame text without a single line.
    #[error("frame has no lines")]
    EmptyFrame,

    #[error("no debris frames found in {}", .0.display())]
    NoDebrisFrames(PathBuf),

    /// A blink cadence whose phases add up to zero ticks.
    #[error("blink cadence must last at least one tick")]
    InvalidCadence,
}

pub type Result<T> = std::result::Result<T, Error>;
