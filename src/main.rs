//! Moo Flap entry point
//!
//! Headless demo driver: plays autopilot runs against the real sim at a
//! synthetic nominal-rate clock and persists the best score, with the same
//! wiring a windowed frontend would use.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

use moo_flap::consts::NOMINAL_FRAME_MS;
use moo_flap::render::draw_commands;
use moo_flap::sim::{FrameInput, GameEvent, RngState, Viewport, World, step};
use moo_flap::{BestScore, Tuning};

/// How many runs the demo plays before exiting
const DEMO_RUNS: u32 = 3;
/// Hard frame cap regardless of autopilot skill
const MAX_FRAMES: u64 = 20_000;

/// Driver state a frontend would own: the world, its input edge, and the
/// persistence handle
struct Game {
    world: World,
    input: FrameInput,
    best: BestScore,
    view: Viewport,
    now_ms: f64,
}

impl Game {
    fn new(tuning: Tuning, best: BestScore) -> Self {
        let mut world = World::with_tuning(tuning);
        world.best = best.value;
        Self {
            world,
            input: FrameInput::default(),
            best,
            view: Viewport::new(800.0, 600.0),
            now_ms: 0.0,
        }
    }

    /// Flap whenever the player sinks below the center of the next gap
    /// still able to collide
    fn autopilot(&mut self) {
        let target = self
            .world
            .pipes
            .iter()
            .find(|p| p.trailing_edge() > self.world.player.left())
            .map(|p| p.gap_top + self.world.tuning.pipe_gap / 2.0)
            .unwrap_or(self.view.height / 2.0);
        if self.world.player.pos.y > target {
            self.input.flap = true;
        }
    }

    /// One frame at the nominal cadence; returns the frame's events
    fn update<R: Rng>(&mut self, rng: &mut R) -> Vec<GameEvent> {
        self.now_ms += NOMINAL_FRAME_MS;
        let events = step(&mut self.world, &self.input, self.view, rng, 1.0, self.now_ms);
        // Clear one-shot inputs after processing
        self.input = FrameInput::default();
        events
    }
}

fn main() {
    env_logger::init();
    log::info!("Moo Flap starting...");

    let tuning = Tuning::load();
    let best = BestScore::load();
    log::info!("best score on file: {}", best.value);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut rng = RngState::new(seed).to_rng();
    log::info!("spawn rng seeded with {seed}");

    let mut game = Game::new(tuning, best);
    let mut runs = 0u32;
    let mut frames = 0u64;

    while runs < DEMO_RUNS && frames < MAX_FRAMES {
        game.autopilot();
        let events = game.update(&mut rng);
        frames += 1;

        for event in events {
            match event {
                GameEvent::NewBest => {
                    game.best.update(game.world.best);
                    game.best.save();
                }
                GameEvent::Ended => {
                    runs += 1;
                    log::info!(
                        "run {runs} over: score {}, best {}",
                        game.world.score,
                        game.world.best
                    );
                    if runs < DEMO_RUNS {
                        // Tap to restart, as a player would
                        game.input.flap = true;
                    }
                }
                _ => {}
            }
        }
    }

    let final_frame = draw_commands(&game.world, game.view);
    log::info!(
        "demo finished after {frames} frames: {runs} runs completed, score {}, best {}, {} draw commands in the last frame",
        game.world.score,
        game.best.value,
        final_frame.len()
    );
}
