//! Sound playback seam
//!
//! The simulation only queues [`SoundEffect`] requests. Whatever owns the frame
//! loop drains the queue and hands each request to a [`SoundPlayer`].

use crate::settings::Settings;
use crate::sim::SoundEffect;

/// Something that can play the simulation's sound requests
pub trait SoundPlayer {
    fn play(&mut self, effect: SoundEffect);
}

/// Recording player, handy for tests and replays
impl SoundPlayer for Vec<SoundEffect> {
    fn play(&mut self, effect: SoundEffect) {
        self.push(effect);
    }
}

/// Player without an audio device: applies volume/mute and logs each request
#[derive(Debug, Clone)]
pub struct LogPlayer {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    played: [u32; SoundEffect::ALL.len()],
}

impl Default for LogPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl LogPlayer {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            played: [0; SoundEffect::ALL.len()],
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut player = Self::new();
        player.set_master_volume(settings.master_volume);
        player.set_sfx_volume(settings.sfx_volume);
        player.set_muted(settings.muted);
        player
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// How many times an effect was actually played (silent requests excluded)
    pub fn played(&self, effect: SoundEffect) -> u32 {
        self.played[effect as usize]
    }
}

impl SoundPlayer for LogPlayer {
    fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.played[effect as usize] += 1;
        log::debug!("Play {} ({}) at volume {:.2}", effect.id(), effect.file_name(), vol);
    }
}
