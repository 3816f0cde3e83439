//! World-to-draw-command translation
//!
//! A frontend renders a frame by replaying the command list in order.
//! Nothing here mutates the world; the list is rebuilt from scratch every
//! frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{GROUND_HEIGHT, PIPE_WIDTH, PLAYER_HALF};
use crate::sim::{Phase, Viewport, World};

/// What a rectangle stands for, so frontends can map roles to colors or
/// sprites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RectKind {
    /// Barrier from the ceiling down to the gap top
    ObstacleUpper,
    /// Barrier from the gap bottom down to the viewport bottom
    ObstacleLower,
    /// The ground strip
    Ground,
}

/// One drawing primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCmd {
    /// Axis-aligned rectangle; `min` is the top-left corner
    Rect {
        min: Vec2,
        size: Vec2,
        kind: RectKind,
    },
    /// The player marker
    Circle { center: Vec2, radius: f32 },
    /// Text anchored at its top-center
    Text { pos: Vec2, text: String, size: f32 },
}

/// Build the frame's draw list in paint order: obstacles, ground strip,
/// player, then text.
pub fn draw_commands(world: &World, view: Viewport) -> Vec<DrawCmd> {
    let gap = world.tuning.pipe_gap;
    let mut cmds = Vec::with_capacity(world.pipes.len() * 2 + 6);

    for pipe in &world.pipes {
        cmds.push(DrawCmd::Rect {
            min: Vec2::new(pipe.x, 0.0),
            size: Vec2::new(PIPE_WIDTH, pipe.gap_top),
            kind: RectKind::ObstacleUpper,
        });
        let bottom_y = pipe.gap_bottom(gap);
        cmds.push(DrawCmd::Rect {
            min: Vec2::new(pipe.x, bottom_y),
            size: Vec2::new(PIPE_WIDTH, (view.height - bottom_y).max(0.0)),
            kind: RectKind::ObstacleLower,
        });
    }

    cmds.push(DrawCmd::Rect {
        min: Vec2::new(0.0, view.ground_y()),
        size: Vec2::new(view.width, GROUND_HEIGHT),
        kind: RectKind::Ground,
    });

    cmds.push(DrawCmd::Circle {
        center: world.player.pos,
        radius: PLAYER_HALF,
    });

    cmds.push(DrawCmd::Text {
        pos: Vec2::new(view.width / 2.0, 80.0),
        text: world.score.to_string(),
        size: 48.0,
    });

    if world.phase == Phase::Ended {
        let cx = view.width / 2.0;
        let cy = view.height / 2.0;
        cmds.push(DrawCmd::Text {
            pos: Vec2::new(cx, cy - 60.0),
            text: "MOOOO OVERRR".into(),
            size: 56.0,
        });
        cmds.push(DrawCmd::Text {
            pos: Vec2::new(cx, cy),
            text: format!("Score: {}", world.score),
            size: 32.0,
        });
        cmds.push(DrawCmd::Text {
            pos: Vec2::new(cx, cy + 40.0),
            text: format!("Best: {}", world.best),
            size: 32.0,
        });
    }

    cmds
}
