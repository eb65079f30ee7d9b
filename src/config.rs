//! Runtime settings, read from the environment.
//!
//! - `TUI_SPACE_FRAMES_DIR`: frame asset directory (default: `frames`)
//! - `TUI_SPACE_TICK_MS`: tick interval in milliseconds (default: 100)
//! - `TUI_SPACE_STARS`: number of stars (default: 100)
//! - `TUI_SPACE_SEED`: RNG seed; a random one is picked when unset
//! - `TUI_SPACE_LOG`: write logs to this file; no logging when unset
//!
//! Unparsable values fall back to the default.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::engine::SceneConfig;
use crate::types::FRAMES_DIR;

#[derive(Debug, Clone)]
pub struct Settings {
    pub frames_dir: PathBuf,
    pub seed: Option<u32>,
    pub log_path: Option<PathBuf>,
    pub scene: SceneConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frames_dir: PathBuf::from(FRAMES_DIR),
            seed: None,
            log_path: None,
            scene: SceneConfig::default(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(dir) = non_empty("TUI_SPACE_FRAMES_DIR") {
            settings.frames_dir = PathBuf::from(dir);
        }
        if let Some(ms) = non_empty("TUI_SPACE_TICK_MS").and_then(|s| s.parse::<u64>().ok()) {
            if ms > 0 {
                settings.scene.tick = Duration::from_millis(ms);
            }
        }
        if let Some(stars) = non_empty("TUI_SPACE_STARS").and_then(|s| s.parse().ok()) {
            settings.scene.star_count = stars;
        }
        settings.seed = non_empty("TUI_SPACE_SEED").and_then(|s| s.parse().ok());
        settings.log_path = non_empty("TUI_SPACE_LOG").map(PathBuf::from);

        settings
    }
}
