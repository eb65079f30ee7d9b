//! Glyph frames and the asset set they are loaded from.
//!
//! A frame is one multi-line ASCII picture. Its bounding box is the line count
//! by the longest line; trailing spaces widen the box but are never drawn.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Error, Result};

/// Immutable multi-line glyph picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    lines: Vec<String>,
    width: usize,
}

impl Frame {
    /// Build a frame from text. Blank lines are kept; text with no lines at all is rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<String> = text.lines().map(str::to_owned).collect();
        if lines.is_empty() {
            return Err(Error::EmptyFrame);
        }
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        Ok(Self { lines, width })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::AssetLoad {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// `(height, width)` bounding box.
    pub fn size(&self) -> (usize, usize) {
        (self.height(), self.width)
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

/// Ship frame file names, in animation order.
pub const SHIP_FRAME_FILES: [&str; 2] = ["rocket_frame_1.txt", "rocket_frame_2.txt"];

/// Subdirectory holding debris frames.
pub const DEBRIS_DIR: &str = "debris";

/// Every frame the scene needs, loaded once at startup.
#[derive(Debug, Clone)]
pub struct SceneAssets {
    pub ship: Vec<Frame>,
    pub debris: Vec<Frame>,
}

impl SceneAssets {
    /// Load the ship frames and every `*.txt` under `debris/`, sorted by file name.
    ///
    /// Any missing or unreadable file fails the whole load.
    pub fn load(dir: &Path) -> Result<Self> {
        let ship = SHIP_FRAME_FILES
            .iter()
            .map(|name| Frame::from_file(&dir.join(name)))
            .collect::<Result<Vec<_>>>()?;

        let debris_dir = dir.join(DEBRIS_DIR);
        let mut paths = debris_paths(&debris_dir)?;
        paths.sort();
        if paths.is_empty() {
            return Err(Error::NoDebrisFrames(debris_dir));
        }
        let debris = paths
            .iter()
            .map(|p| Frame::from_file(p))
            .collect::<Result<Vec<_>>>()?;

        info!(
            dir = %dir.display(),
            ship_frames = ship.len(),
            debris_frames = debris.len(),
            "loaded frame assets"
        );
        Ok(Self { ship, debris })
    }
}

fn debris_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let to_err = |source| Error::AssetLoad {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(to_err)? {
        let path = entry.map_err(to_err)?.path();
        if path.extension().is_some_and(|ext| ext == "txt") {
            paths.push(path);
        }
    }
    Ok(paths)
}
