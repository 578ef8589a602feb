//! Frame driver around the simulation
//!
//! Interprets the commands `tick` ignores (Quit, Restart), forwards the rest,
//! and plays whatever sounds the frame requested.

use serde::{Deserialize, Serialize};

use crate::audio::SoundPlayer;
use crate::sim::{Command, GameState};

/// What the driving loop should do after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// The game was over and has been replaced with a fresh one
    Restarted,
    Quit,
}

/// Summary of a session, reported when the loop ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Updates run across all games
    pub frames: u64,
    pub restarts: u32,
    pub score: u32,
    pub high_score: u32,
    pub game_over: bool,
}

/// Owns the game state and the sound output for one process lifetime
pub struct Session<P: SoundPlayer> {
    state: GameState,
    sounds: P,
    frames: u64,
    restarts: u32,
    /// Base seed for restarts; the wall clock reseeds them when absent
    seed: Option<u64>,
}

impl<P: SoundPlayer> Session<P> {
    pub fn new(state: GameState, sounds: P) -> Self {
        Self {
            state,
            sounds,
            frames: 0,
            restarts: 0,
            seed: None,
        }
    }

    /// Derive every restart's seed from `seed` so a whole run replays exactly
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn sounds(&self) -> &P {
        &self.sounds
    }

    /// Run one frame with the commands polled for it.
    ///
    /// Only the first command is checked for Quit/Restart, and Restart only
    /// counts once the game is over. A restarting frame does not update.
    pub fn step(&mut self, commands: &[Command]) -> Flow {
        match commands.first() {
            Some(Command::Quit) => return Flow::Quit,
            Some(Command::Restart) if self.state.is_over() => {
                self.restarts += 1;
                self.state = match self.seed {
                    Some(base) => self
                        .state
                        .restart_with_seed(base.wrapping_add(u64::from(self.restarts))),
                    None => self.state.restart(),
                };
                log::info!(
                    "Restart #{} (high score {})",
                    self.restarts,
                    self.state.high_score
                );
                return Flow::Restarted;
            }
            _ => {}
        }

        if !self.state.is_over() {
            self.frames += 1;
        }
        self.state.update(commands);
        for effect in self.state.take_sounds() {
            self.sounds.play(effect);
        }
        Flow::Continue
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            frames: self.frames,
            restarts: self.restarts,
            score: self.state.score,
            high_score: self.state.high_score,
            game_over: self.state.is_over(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Bullet, Direction, SimConfig, SoundEffect, Target};
    use glam::IVec2;

    fn session() -> Session<Vec<SoundEffect>> {
        let state = GameState::new(
            5,
            SimConfig {
                spawn_chance: 0.0,
                ..Default::default()
            },
        );
        Session::new(state, Vec::new())
    }

    #[test]
    fn test_quit_stops_before_update() {
        let mut session = session();
        assert_eq!(session.step(&[Command::Quit, Command::Left]), Flow::Quit);
        assert_eq!(session.state().frame, 0);
        assert_eq!(session.state().player.x, 18);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut session = session();
        assert_eq!(session.step(&[Command::Restart]), Flow::Continue);
        assert_eq!(session.state().frame, 1);
        assert_eq!(session.summary().restarts, 0);
    }

    #[test]
    fn test_sounds_are_played_and_drained() {
        let mut session = session();
        session
            .state
            .bullets
            .push(Bullet::new(IVec2::new(10, 10), Direction::Up));
        session.state.targets.push(Target::new(IVec2::new(10, 9)));

        session.step(&[]);

        assert_eq!(session.sounds(), &vec![SoundEffect::Hit]);
        assert!(session.state().requested_sounds.is_empty());
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut session = session();
        session
            .state
            .bullets
            .push(Bullet::new(IVec2::new(10, 10), Direction::Up));
        session.state.targets.push(Target::new(IVec2::new(10, 9)));
        session.step(&[]);
        session
            .state
            .bullets
            .push(Bullet::new(IVec2::new(19, 21), Direction::Down));
        session.step(&[]);
        assert!(session.state().is_over());
        assert_eq!(session.sounds(), &vec![SoundEffect::Hit, SoundEffect::Crash]);

        // Not the first command: no restart
        assert_eq!(session.step(&[Command::Left, Command::Restart]), Flow::Continue);
        assert!(session.state().is_over());

        assert_eq!(session.step(&[Command::Restart]), Flow::Restarted);
        let summary = session.summary();
        assert_eq!(summary.frames, 2);
        assert_eq!(summary.restarts, 1);
        assert_eq!(summary.score, 0);
        assert_eq!(summary.high_score, 1);
        assert!(!summary.game_over);
    }

    fn play_to_game_over(session: &mut Session<Vec<SoundEffect>>) {
        session
            .state
            .bullets
            .push(Bullet::new(IVec2::new(19, 21), Direction::Down));
        session.step(&[]);
        assert!(session.state().is_over());
    }

    #[test]
    fn test_seeded_restarts_replay() {
        let config = SimConfig {
            spawn_chance: 0.5,
            ..Default::default()
        };
        let mut a = Session::new(GameState::new(42, config), Vec::new()).with_seed(42);
        let mut b = Session::new(GameState::new(42, config), Vec::new()).with_seed(42);

        for session in [&mut a, &mut b] {
            play_to_game_over(session);
            assert_eq!(session.step(&[Command::Restart]), Flow::Restarted);
            for _ in 0..50 {
                session.step(&[Command::Shoot, Command::Left]);
            }
        }

        assert_eq!(a.state().seed, 43);
        assert_eq!(a.state().seed, b.state().seed);
        assert_eq!(a.state().frame, b.state().frame);
        assert_eq!(a.state().player, b.state().player);
        assert_eq!(a.state().bullets, b.state().bullets);
        assert_eq!(a.state().targets, b.state().targets);
        assert_eq!(a.summary(), b.summary());
    }
}
