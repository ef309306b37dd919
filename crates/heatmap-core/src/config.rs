use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH, DEFAULT_PLAYBACK_INTERVAL_MS};
use crate::error::Result;
use crate::scene::PlaybackEnd;

/// Viewer settings, usually read from a TOML file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Floor-plan raster.
    pub image: PathBuf,
    /// Room occupancy records (JSON).
    pub dataset: PathBuf,
    /// Bounding box the floor plan is fitted into.
    pub max_width: u32,
    pub max_height: u32,
    pub initial_hour: u8,
    pub playback: PlaybackConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            image: PathBuf::from("1stFloor.png"),
            dataset: PathBuf::from("data.json"),
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
            initial_hour: 0,
            playback: PlaybackConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    pub interval_ms: u64,
    pub end: PlaybackEnd,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_PLAYBACK_INTERVAL_MS,
            end: PlaybackEnd::Stop,
        }
    }
}

impl ViewerConfig {
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }
}
