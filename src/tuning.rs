//! Data-driven game balance
//!
//! The five values that define how the game feels. Defaults match the
//! shipped balance; a JSON file can override any subset for playtesting.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::consts::{FLAP_IMPULSE, GRAVITY, PIPE_GAP, SCROLL_SPEED, SPAWN_INTERVAL_MS};

/// Balance values the simulation reads every frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration, px per nominal frame squared
    pub gravity: f32,
    /// Velocity a flap sets, px per nominal frame (negative = up)
    pub flap_impulse: f32,
    /// Obstacle scroll speed, px per nominal frame
    pub scroll_speed: f32,
    /// Vertical gap opening, px
    pub pipe_gap: f32,
    /// Milliseconds between obstacle spawns
    pub spawn_interval_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,
            scroll_speed: SCROLL_SPEED,
            pipe_gap: PIPE_GAP,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
        }
    }
}

impl Tuning {
    /// Override file name inside the data directory
    const STORAGE_FILE: &'static str = "tuning.json";

    fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "moo-flap").map(|dirs| dirs.data_dir().join(Self::STORAGE_FILE))
    }

    /// Load overrides from the default location
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_or_default(&path),
            None => Self::default(),
        }
    }

    /// Read a tuning override file, falling back to defaults on absence or
    /// parse failure
    pub fn load_or_default(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning overrides from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("tuning file unreadable ({err}), using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Write the current values, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }
}
