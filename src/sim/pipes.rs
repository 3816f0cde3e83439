//! Obstacle stream: spawning, scrolling, and retiring gap obstacles

use rand::Rng;

use super::state::{Pipe, Viewport, World};
use crate::consts::{GAP_MARGIN_BOTTOM, GAP_MARGIN_TOP, PIPE_CULL_X, SPAWN_LEAD};

/// Spawn one obstacle at the right edge if the spawn interval has elapsed
/// since the last spawn. Returns true if a spawn happened.
///
/// The gap top is drawn uniformly from the band that keeps the whole gap
/// plus both margins inside the viewport; a viewport too short for any band
/// collapses to the top margin instead of failing.
pub fn maybe_spawn<R: Rng>(world: &mut World, view: Viewport, rng: &mut R, now_ms: f64) -> bool {
    if now_ms - world.last_spawn_ms <= world.tuning.spawn_interval_ms {
        return false;
    }

    let span =
        (view.height - world.tuning.pipe_gap - GAP_MARGIN_TOP - GAP_MARGIN_BOTTOM).max(0.0);
    let gap_top = GAP_MARGIN_TOP + rng.random::<f32>() * span;

    world.pipes.push_back(Pipe::new(view.width + SPAWN_LEAD, gap_top));
    world.last_spawn_ms = now_ms;
    log::debug!("spawned obstacle at gap_top={gap_top:.1}");
    true
}

/// Scroll every obstacle left by `speed * dt`, then retire obstacles from
/// the head of the queue once they have drifted past the cull line. Only
/// the head is ever removed; the queue stays ordered oldest-first.
pub fn advance_and_cull(world: &mut World, dt: f32) {
    let dx = world.tuning.scroll_speed * dt;
    for pipe in world.pipes.iter_mut() {
        pipe.x -= dx;
    }
    while world.pipes.front().is_some_and(|p| p.x < PIPE_CULL_X) {
        world.pipes.pop_front();
    }
}
