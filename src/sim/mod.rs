//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-stepped only, driven by an external clock
//! - Injected RNG only
//! - Stable obstacle order (head = oldest spawn)
//! - No rendering or platform dependencies

pub mod collision;
pub mod physics;
pub mod pipes;
pub mod state;
pub mod tick;

pub use collision::{ScoreUpdate, check_boundaries, check_pipes, update_scoring};
pub use physics::integrate;
pub use pipes::{advance_and_cull, maybe_spawn};
pub use state::{GameEvent, Phase, Pipe, Player, RngState, Viewport, World};
pub use tick::{FrameInput, step};
