//! Best score record
//!
//! Persisted as a small JSON file in the platform data directory. Storage
//! trouble never reaches the simulation: loads fall back to zero and saves
//! log a warning and move on.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Best score achieved across all runs
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BestScore {
    pub value: u32,
}

impl BestScore {
    /// Save file name inside the data directory
    const STORAGE_FILE: &'static str = "best_score.json";

    pub fn new(value: u32) -> Self {
        Self { value }
    }

    /// Fold a run score into the record; returns true when the record moved
    pub fn update(&mut self, score: u32) -> bool {
        if score > self.value {
            self.value = score;
            true
        } else {
            false
        }
    }

    /// Default save location, if the platform exposes a data directory
    fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "moo-flap").map(|dirs| dirs.data_dir().join(Self::STORAGE_FILE))
    }

    /// Load the record from the default location
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from a specific file, treating absence or corruption as a
    /// fresh record
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<BestScore>(&json) {
                Ok(best) => {
                    log::info!("loaded best score {}", best.value);
                    best
                }
                Err(err) => {
                    log::warn!("best score file unreadable ({err}), starting fresh");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no best score file, starting fresh");
                Self::default()
            }
        }
    }

    /// Save to the default location; failures are logged and swallowed
    pub fn save(&self) {
        let Some(path) = Self::default_path() else {
            log::warn!("no data directory available, best score not saved");
            return;
        };
        if let Err(err) = self.save_to(&path) {
            log::warn!("could not save best score: {err}");
        } else {
            log::info!("saved best score {}", self.value);
        }
    }

    /// Save to a specific file, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }
}
