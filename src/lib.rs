//! u235 - A grid arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, reflection, collisions, scoring)
//! - `audio`: Playback seam for the sound requests the simulation emits
//! - `session`: Frame driver that interprets Quit/Restart around the simulation
//! - `autopilot`: Demo-mode command source
//! - `settings`: Host configuration loaded from JSON

pub mod audio;
pub mod autopilot;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::{Flow, RunSummary, Session};
pub use settings::{Settings, SettingsError};

use std::time::{SystemTime, UNIX_EPOCH};

/// Game configuration constants
pub mod consts {
    /// Display dimensions the playfield is laid out for
    pub const SCREEN_WIDTH: u32 = 640;
    pub const SCREEN_HEIGHT: u32 = 400;
    pub const CELL_SIZE_PX: u32 = 16;

    /// Fixed frame rate of the driving loop
    pub const FPS: u32 = 30;

    /// First playable cell on both axes (walls and HUD sit above/left of it)
    pub const PLAYFIELD_MIN: i32 = 2;
    /// Cells between the last playable cell and the screen's far edge
    pub const PLAYFIELD_FAR_MARGIN: i32 = 3;

    /// Player start column and footprint width in cells
    pub const PLAYER_START_X: i32 = 18;
    pub const PLAYER_WIDTH: i32 = 3;

    /// Per-frame probability that a target spawns
    pub const TARGET_SPAWN_CHANCE: f64 = 0.05;
    /// Targets spawn above this row (exclusive), leaving the lower field clear
    pub const TARGET_SPAWN_Y_END: i32 = 15;
}

/// Seed derived from the wall clock (whole seconds since the Unix epoch)
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
