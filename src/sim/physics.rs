//! Vertical physics for the controlled object

use super::state::World;

/// Semi-implicit Euler step: velocity first, then position from the new
/// velocity. `dt` is in nominal-frame units, so the tuning constants apply
/// unchanged at any real frame rate.
pub fn integrate(world: &mut World, dt: f32) {
    world.player.vy += world.tuning.gravity * dt;
    world.player.pos.y += world.player.vy * dt;
}
