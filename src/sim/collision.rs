//! Boundary and obstacle collision tests, plus pass-through scoring

use super::state::World;

/// Outcome of one scoring pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreUpdate {
    /// Obstacles newly scored this frame
    pub scored: u32,
    /// True when the run score moved past the stored best
    pub new_best: bool,
}

/// True if the player sits on or below the ground line, or at or above the
/// ceiling
pub fn check_boundaries(world: &World, ground_y: f32) -> bool {
    world.player.pos.y >= ground_y || world.player.pos.y <= 0.0
}

/// True if any obstacle overlapping the player horizontally has the
/// player's box poking outside its gap. Every live obstacle uses the same
/// test, so which one hits first is unobservable.
pub fn check_pipes(world: &World) -> bool {
    let p = &world.player;
    let gap = world.tuning.pipe_gap;
    world.pipes.iter().any(|pipe| {
        let overlaps = p.right() > pipe.x && p.left() < pipe.trailing_edge();
        overlaps && (p.top() < pipe.gap_top || p.bottom() > pipe.gap_bottom(gap))
    })
}

/// Mark every obstacle whose trailing edge has passed the player's
/// x-position, counting each exactly once, and fold the run score into the
/// best score.
pub fn update_scoring(world: &mut World) -> ScoreUpdate {
    let player_x = world.player.pos.x;
    let mut scored = 0;
    for pipe in world.pipes.iter_mut() {
        if !pipe.scored && pipe.trailing_edge() < player_x {
            pipe.scored = true;
            scored += 1;
        }
    }
    world.score += scored;

    let new_best = world.score > world.best;
    if new_best {
        world.best = world.score;
    }
    ScoreUpdate { scored, new_best }
}
