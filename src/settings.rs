//! Host settings
//!
//! Read from a JSON file next to the binary. The simulation itself never reads
//! files; it receives a [`SimConfig`] built from these settings.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::{Playfield, SimConfig};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frames per second of the driving loop
    pub fps: u32,
    /// Per-frame target spawn probability
    pub spawn_chance: f64,
    /// Fixed RNG seed; the wall clock is used when absent
    pub seed: Option<u64>,
    /// Frames the headless demo runs before exiting
    pub max_frames: u64,
    /// Sleep between frames to run at `fps` instead of as fast as possible
    pub realtime: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fps: FPS,
            spawn_chance: TARGET_SPAWN_CHANCE,
            seed: None,
            max_frames: 60 * FPS as u64,
            realtime: false,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults if the file is missing or bad
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.fps == 0 {
            return Err(SettingsError::Invalid {
                field: "fps",
                reason: "must be at least 1".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return Err(SettingsError::Invalid {
                field: "spawn_chance",
                reason: format!("{} is outside [0, 1]", self.spawn_chance),
            });
        }
        for (field, vol) in [
            ("master_volume", self.master_volume),
            ("sfx_volume", self.sfx_volume),
        ] {
            if !(0.0..=1.0).contains(&vol) {
                return Err(SettingsError::Invalid {
                    field,
                    reason: format!("{vol} is outside [0, 1]"),
                });
            }
        }
        Ok(())
    }

    /// Simulation parameters for a new game
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            playfield: Playfield::default(),
            spawn_chance: self.spawn_chance,
        }
    }
}
