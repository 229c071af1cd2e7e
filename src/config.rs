//! Game configuration
//!
//! One immutable struct passed into the game at construction. The
//! defaults describe the standard duel; a JSON file can override them
//! for re-binding keys or running at a different resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts;
use crate::input::Key;

/// Movement bindings for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub move_right: Key,
    pub move_left: Key,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Height of the ground band at the bottom of the screen
    pub ground_height: f32,
    /// Downward acceleration per tick applied to projectiles
    pub gravity: f32,
    /// Fixed simulation/render rate in Hz
    pub tick_rate: u32,
    /// Initial x coordinates of the two tanks
    pub tank_spawns: [f32; 2],
    /// Movement keys for players one and two
    pub controls: [Controls; 2],
    /// Toggles which tank is under control
    pub tank_switch: Key,
    /// Swaps Artillery and Shotgun on the controlled tank
    pub gun_switch: Key,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 1920.0,
            screen_height: 1080.0,
            ground_height: consts::GROUND_HEIGHT,
            gravity: consts::GRAVITY,
            tick_rate: consts::TICK_RATE,
            tank_spawns: [300.0, 1200.0],
            controls: [
                Controls {
                    move_right: Key::D,
                    move_left: Key::A,
                },
                Controls {
                    move_right: Key::ArrowRight,
                    move_left: Key::ArrowLeft,
                },
            ],
            tank_switch: Key::Space,
            gun_switch: Key::Shift,
        }
    }
}

impl GameConfig {
    /// Particle lifetime: one second worth of ticks.
    pub fn particle_lifetime(&self) -> u32 {
        self.tick_rate
    }

    /// Per-tick probability shared by target spawning and bomb drops,
    /// about one event every five seconds.
    pub fn rare_event_chance(&self) -> f64 {
        1.0 / (self.tick_rate as f64 * 5.0)
    }

    /// Top of the collidable ground plane, halfway into the drawn
    /// ground band.
    pub fn ground_level(&self) -> f32 {
        self.screen_height - self.ground_height / 2.0
    }

    /// Load a config from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Write the config out as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(self).expect("config serializes");
        std::fs::write(path, text).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
