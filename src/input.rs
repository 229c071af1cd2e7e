//! Input collaborator
//!
//! The frame loop drains a queue of discrete events exactly once per
//! tick. Anything that can produce such a queue (a windowing backend, a
//! replay file, a test script) implements `InputSource`.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Keys the game binds by default. Backends map their own key codes
/// onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    A,
    D,
    W,
    S,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Space,
    Shift,
    Escape,
}

/// One discrete input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    /// Pointer motion with the new position in screen coordinates
    PointerMoved(Vec2),
    PointerDown,
    PointerUp,
}

/// Produces the events that arrived since the previous poll.
pub trait InputSource {
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// Deterministic event script, one batch per tick. Used by tests and
/// the headless demo binary.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
    /// Report a quit event once the script runs out
    pub end_with_quit: bool,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one tick's worth of events.
    pub fn push_frame(&mut self, events: Vec<InputEvent>) {
        self.frames.push_back(events);
    }

    /// Queue `n` ticks with no input at all.
    pub fn idle_frames(&mut self, n: usize) {
        for _ in 0..n {
            self.frames.push_back(Vec::new());
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.frames.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        match self.frames.pop_front() {
            Some(events) => events,
            None if self.end_with_quit => vec![InputEvent::Quit],
            None => Vec::new(),
        }
    }
}
