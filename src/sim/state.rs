//! Game state and core simulation types
//!
//! Everything the frame update reads or writes lives here, including the RNG,
//! so two states built from the same seed evolve identically.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::command::Command;
use super::playfield::Playfield;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player was hit; only a restart leaves this phase
    GameOver,
}

/// Travel direction of a bullet, one cell per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Split order used when a target is destroyed
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Cell offset for one frame of travel (`y` grows downward)
    pub fn step(self) -> IVec2 {
        match self {
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// Sound the caller should play after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundEffect {
    /// Player was hit
    Crash,
    /// Target destroyed
    Hit,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 2] = [SoundEffect::Crash, SoundEffect::Hit];

    /// Stable identifier of the sound request
    pub fn id(&self) -> &'static str {
        match self {
            SoundEffect::Crash => "crash",
            SoundEffect::Hit => "hit",
        }
    }

    /// Asset file the host loads for this sound
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundEffect::Crash => "crash.wav",
            SoundEffect::Hit => "hit.wav",
        }
    }
}

/// The player's cannon on the bottom row, `PLAYER_WIDTH` cells wide from `x`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub x: i32,
    pub y: i32,
}

impl Player {
    pub fn new(field: &Playfield) -> Self {
        Self {
            x: PLAYER_START_X.clamp(field.min.x, field.player_x_max()),
            y: field.player_row(),
        }
    }

    /// Left edge may reach `max.x` here; only `step_right` accounts for the footprint.
    pub fn step_left(&mut self, field: &Playfield) {
        self.x = (self.x - 1).clamp(field.min.x, field.max.x);
    }

    pub fn step_right(&mut self, field: &Playfield) {
        self.x = (self.x + 1).clamp(field.min.x, field.player_x_max());
    }

    /// Whether a cell overlaps the player's footprint
    #[inline]
    pub fn covers(&self, cell: IVec2) -> bool {
        cell.y == self.y && (self.x..self.x + PLAYER_WIDTH).contains(&cell.x)
    }

    /// Cell a new shot appears in: above the middle of the footprint
    pub fn muzzle(&self) -> IVec2 {
        IVec2::new(self.x + 1, self.y - 1)
    }
}

/// A bullet entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
    pub direction: Direction,
    /// Dropped at the end of the frame
    pub pending_removal: bool,
}

impl Bullet {
    pub fn new(cell: IVec2, direction: Direction) -> Self {
        Self {
            x: cell.x,
            y: cell.y,
            direction,
            pending_removal: false,
        }
    }

    #[inline]
    pub fn cell(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// Advance one frame.
    ///
    /// At a wall the bullet reverses in place instead of moving. The bottom edge
    /// is open: a bullet falling past it is marked for removal.
    pub fn advance(&mut self, field: &Playfield) {
        let at_edge = match self.direction {
            Direction::Left => self.x == field.min.x,
            Direction::Right => self.x == field.max.x,
            Direction::Up => self.y == field.min.y,
            Direction::Down => self.y == field.max.y,
        };

        if !at_edge {
            let next = self.cell() + self.direction.step();
            self.x = next.x;
            self.y = next.y;
        } else if self.direction == Direction::Down {
            self.pending_removal = true;
        } else {
            self.direction = self.direction.reversed();
        }
    }
}

/// A target entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub x: i32,
    pub y: i32,
    pub pending_removal: bool,
}

impl Target {
    pub fn new(cell: IVec2) -> Self {
        Self {
            x: cell.x,
            y: cell.y,
            pending_removal: false,
        }
    }

    #[inline]
    pub fn cell(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }
}

/// Simulation parameters injected at construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    pub playfield: Playfield,
    /// Per-frame target spawn probability in [0, 1]
    pub spawn_chance: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            playfield: Playfield::default(),
            spawn_chance: TARGET_SPAWN_CHANCE,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub(super) rng: Pcg32,
    pub config: SimConfig,
    pub phase: GamePhase,
    /// Frames simulated since the last (re)start
    pub frame: u64,
    pub player: Player,
    /// Live bullets in creation order
    pub bullets: Vec<Bullet>,
    /// Live targets in spawn order
    pub targets: Vec<Target>,
    pub score: u32,
    pub high_score: u32,
    /// Sounds requested during the last update, to be drained by the caller
    pub requested_sounds: Vec<SoundEffect>,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, config: SimConfig) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            config,
            phase: GamePhase::Playing,
            frame: 0,
            player: Player::new(&config.playfield),
            bullets: Vec::with_capacity(100),
            targets: Vec::with_capacity(50),
            score: 0,
            high_score: 0,
            requested_sounds: Vec::new(),
        }
    }

    /// Create a new game state seeded from the wall clock
    pub fn from_clock(config: SimConfig) -> Self {
        Self::new(crate::clock_seed(), config)
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Advance one frame; see [`super::tick::tick`]
    pub fn update(&mut self, commands: &[Command]) {
        super::tick::tick(self, commands);
    }

    /// Fresh game reseeded from the wall clock, keeping the high score.
    ///
    /// Only meaningful once the game is over; an in-progress game comes back unchanged.
    pub fn restart(&self) -> Self {
        self.restart_with_seed(crate::clock_seed())
    }

    /// Like [`Self::restart`] with an explicit seed
    pub fn restart_with_seed(&self, seed: u64) -> Self {
        if !self.is_over() {
            log::debug!("Restart ignored: game still in progress");
            return self.clone();
        }
        let mut state = Self::new(seed, self.config);
        state.high_score = self.high_score;
        state
    }

    /// Hand the queued sound requests to the caller, leaving the queue empty
    pub fn take_sounds(&mut self) -> Vec<SoundEffect> {
        std::mem::take(&mut self.requested_sounds)
    }

    pub(super) fn request_sound(&mut self, effect: SoundEffect) {
        self.requested_sounds.push(effect);
    }

    /// Credit one destroyed target
    pub(super) fn add_point(&mut self) {
        self.score += 1;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }
}
