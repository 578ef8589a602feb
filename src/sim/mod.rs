//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per frame, no wall-clock time
//! - Seeded RNG owned by the state
//! - Stable iteration order (insertion order, stable removal)
//! - No rendering or audio dependencies; sounds are requests for the caller

pub mod collision;
pub mod command;
pub mod playfield;
pub mod state;
pub mod tick;

pub use collision::{Contact, bullet_hits_player, scan_contacts};
pub use command::{Command, UnknownCommand};
pub use playfield::Playfield;
pub use state::{Bullet, Direction, GamePhase, GameState, Player, SimConfig, SoundEffect, Target};
pub use tick::tick;
