//! Game state and core simulation types
//!
//! Everything a frontend needs to observe lives here; a `&World` borrow is
//! the read-only view of the whole simulation.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Active gameplay
    Running,
    /// Run ended on a collision; only a restart mutates the world from here
    Ended,
}

/// Things a frame step can report back to the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Flap impulse applied
    Flapped,
    /// An ended world was reset by a flap or an explicit restart
    Restarted,
    /// A new obstacle entered at the right edge
    Spawned,
    /// An obstacle was passed; score went up by one
    Scored,
    /// Score exceeded the stored best; the driver should persist it
    NewBest,
    /// A collision ended the run
    Ended,
}

/// Playable area dimensions, supplied fresh by the driver every frame so
/// resizes take effect immediately
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Y of the ground line (top edge of the ground strip)
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.height - GROUND_HEIGHT
    }
}

/// The controlled object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Center of the collision box; x never changes after spawn
    pub pos: Vec2,
    /// Vertical velocity, px per nominal frame (positive = falling)
    pub vy: f32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            vy: 0.0,
        }
    }

    /// Left edge of the collision box
    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - PLAYER_HALF
    }

    /// Right edge of the collision box
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + PLAYER_HALF
    }

    /// Top edge of the collision box
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - PLAYER_HALF
    }

    /// Bottom edge of the collision box
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + PLAYER_HALF
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// One scrolling obstacle: a barrier pair with a vertical gap between
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge; decreases every frame
    pub x: f32,
    /// Top of the gap opening (fixed at spawn)
    pub gap_top: f32,
    /// Set exactly once, when the player has passed this obstacle
    pub scored: bool,
}

impl Pipe {
    pub fn new(x: f32, gap_top: f32) -> Self {
        Self {
            x,
            gap_top,
            scored: false,
        }
    }

    /// Right edge
    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.x + PIPE_WIDTH
    }

    /// Bottom of the gap opening for the given gap height
    #[inline]
    pub fn gap_bottom(&self, gap: f32) -> f32 {
        self.gap_top + gap
    }
}

/// Seed wrapper for the injectable spawn RNG
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// The controlled object
    pub player: Player,
    /// Live obstacles, oldest first: the head is always the leftmost and
    /// the only removal point
    pub pipes: VecDeque<Pipe>,
    /// Obstacles passed this run
    pub score: u32,
    /// Highest score across runs; seeded from persistence at startup
    pub best: u32,
    /// Current phase
    pub phase: Phase,
    /// Driver-clock timestamp (ms) of the most recent spawn
    pub last_spawn_ms: f64,
    /// Frame counter for this run
    pub ticks: u64,
    /// Balance values in effect
    pub tuning: Tuning,
}

impl World {
    /// Fresh world with default tuning, already Running
    pub fn new() -> Self {
        Self::with_tuning(Tuning::default())
    }

    pub fn with_tuning(tuning: Tuning) -> Self {
        Self {
            player: Player::new(),
            pipes: VecDeque::new(),
            score: 0,
            best: 0,
            phase: Phase::Running,
            last_spawn_ms: 0.0,
            ticks: 0,
            tuning,
        }
    }

    /// Back to the initial snapshot: start position, zero velocity, empty
    /// obstacle queue, zero score, spawn timer zeroed. Best score and
    /// tuning carry over.
    pub fn reset(&mut self) {
        self.player = Player::new();
        self.pipes.clear();
        self.score = 0;
        self.phase = Phase::Running;
        self.last_spawn_ms = 0.0;
        self.ticks = 0;
    }

    /// Handle one flap command. While Running it overwrites the vertical
    /// velocity with the upward impulse; while Ended it restarts the run
    /// ("tap to restart").
    pub fn flap(&mut self) -> Option<GameEvent> {
        match self.phase {
            Phase::Running => {
                self.player.vy = self.tuning.flap_impulse;
                Some(GameEvent::Flapped)
            }
            Phase::Ended => {
                self.reset();
                Some(GameEvent::Restarted)
            }
        }
    }

    #[inline]
    pub fn is_ended(&self) -> bool {
        self.phase == Phase::Ended
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
