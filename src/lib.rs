//! Moo Flap - a barnyard flap-to-fly arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacle stream, collisions, game state)
//! - `render`: Pure World-to-draw-command translation for any frontend
//! - `highscores`: Best score record with tolerant load/save
//! - `tuning`: Data-driven game balance

pub mod highscores;
pub mod render;
pub mod sim;
pub mod tuning;

pub use highscores::BestScore;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Duration of one nominal frame in milliseconds (60 Hz cadence);
    /// `dt` passed to the sim is real elapsed time divided by this
    pub const NOMINAL_FRAME_MS: f64 = 16.67;

    /// Player start position
    pub const PLAYER_START_X: f32 = 150.0;
    pub const PLAYER_START_Y: f32 = 200.0;
    /// Half-extent of the player's collision box
    pub const PLAYER_HALF: f32 = 22.0;

    /// Downward acceleration, px per nominal frame squared
    pub const GRAVITY: f32 = 0.22;
    /// Velocity a flap sets (overwrites, never adds), px per nominal frame
    pub const FLAP_IMPULSE: f32 = -7.5;

    /// Obstacle scroll speed, px per nominal frame
    pub const SCROLL_SPEED: f32 = 2.2;
    /// Vertical opening between an obstacle's upper and lower halves
    pub const PIPE_GAP: f32 = 350.0;
    /// Milliseconds between obstacle spawns
    pub const SPAWN_INTERVAL_MS: f64 = 2000.0;
    /// Obstacle width
    pub const PIPE_WIDTH: f32 = 100.0;
    /// How far past the right viewport edge new obstacles appear
    pub const SPAWN_LEAD: f32 = 80.0;
    /// Obstacles are retired from the head of the queue once x drops below this
    pub const PIPE_CULL_X: f32 = -120.0;

    /// Minimum distance between the gap top and the viewport top
    pub const GAP_MARGIN_TOP: f32 = 80.0;
    /// Minimum distance between the gap bottom and the viewport bottom
    pub const GAP_MARGIN_BOTTOM: f32 = 120.0;
    /// Height of the ground strip; the ground line sits this far above the viewport bottom
    pub const GROUND_HEIGHT: f32 = 60.0;
}

/// Convert real elapsed milliseconds to nominal-frame units (1.0 at 60 Hz)
#[inline]
pub fn frames_from_ms(elapsed_ms: f64) -> f32 {
    (elapsed_ms / consts::NOMINAL_FRAME_MS) as f32
}
