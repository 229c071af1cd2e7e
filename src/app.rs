//! Fixed-rate frame loop
//!
//! One frame: spawn, draw, present, wait out the tick, poll input, then
//! run the rest of the simulation phases. Drawing sits before the input
//! poll so what the player reacts to is what was on screen.

use std::time::{Duration, Instant};

use crate::input::InputSource;
use crate::render::{Renderer, draw_scene};
use crate::sim::{GameState, spawn_targets, step_after_draw};

/// Sleeps out the remainder of each fixed-length frame.
#[derive(Debug)]
pub struct FramePacer {
    frame: Duration,
    next: Instant,
}

impl FramePacer {
    pub fn new(tick_rate: u32) -> Self {
        let frame = Duration::from_secs(1) / tick_rate;
        Self {
            frame,
            next: Instant::now() + frame,
        }
    }

    /// Block until the current frame's deadline. A frame that already
    /// overran restarts the schedule from now instead of sprinting to
    /// catch up.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if now < self.next {
            std::thread::sleep(self.next - now);
            self.next += self.frame;
        } else {
            self.next = now + self.frame;
        }
    }
}

/// Ties a game state to its renderer and input collaborators.
pub struct GameApp {
    pub state: GameState,
    pacer: FramePacer,
}

impl GameApp {
    pub fn new(state: GameState) -> Self {
        let pacer = FramePacer::new(state.config.tick_rate);
        Self { state, pacer }
    }

    /// Run one complete frame.
    pub fn frame(&mut self, out: &mut dyn Renderer, input: &mut dyn InputSource) {
        if self.state.finished {
            return;
        }
        spawn_targets(&mut self.state);
        draw_scene(&self.state, out);
        out.present();
        self.pacer.wait();
        let events = input.poll();
        step_after_draw(&mut self.state, &events);
    }

    /// Run frames until the game finishes.
    pub fn run(&mut self, out: &mut dyn Renderer, input: &mut dyn InputSource) {
        while !self.state.finished {
            self.frame(out, input);
        }
        log::info!(
            "finished after {} ticks, scores {:?}",
            self.state.time_ticks,
            self.state.scores
        );
    }
}
