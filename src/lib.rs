//! Tank Duel - a two-player artillery game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ballistics, hit testing, entity lifecycle)
//! - `render`: Draw-primitive collaborator trait and scene drawing
//! - `input`: Polled input-event collaborator
//! - `assets`: Named texture catalog with fail-fast resolution
//! - `config`: Data-driven game setup
//! - `app`: Fixed-rate frame loop tying the collaborators together

pub mod app;
pub mod assets;
pub mod config;
pub mod input;
pub mod render;
pub mod sim;

pub use config::{Controls, GameConfig};

use glam::Vec2;

/// Game tuning constants
pub mod consts {
    /// Downward acceleration applied to projectiles, units per tick²
    pub const GRAVITY: f32 = 0.9;
    /// Height of the ground band at the bottom of the screen
    pub const GROUND_HEIGHT: f32 = 250.0;
    /// Fixed simulation/render rate in Hz
    pub const TICK_RATE: u32 = 120;

    /// Tank horizontal speed while a movement key is held, units per tick
    pub const TANK_SPEED: f32 = 5.0;

    /// Projectile stats
    pub const SHELL_RADIUS: f32 = 8.0;
    pub const SHELL_DAMAGE: i32 = 3;
    pub const SHRAPNEL_RADIUS: f32 = 3.0;
    pub const SHRAPNEL_DAMAGE: i32 = 1;
    pub const BOMB_RADIUS: f32 = 10.0;
    pub const BOMB_DAMAGE: i32 = 5;

    /// Gun geometry; the drawn barrel is `BARREL_LENGTH * 10` long
    pub const BARREL_WIDTH: f32 = 12.0;
    pub const BARREL_LENGTH: f32 = 4.0;
    /// Fire power bounds; power doubles as launch speed
    pub const FIRE_POWER_MIN: f32 = 10.0;
    pub const FIRE_POWER_MAX: f32 = 50.0;
    /// The gun chamber rides this far above the tank center
    pub const GUN_MOUNT_RISE: f32 = 15.0;

    /// Concurrent target cap
    pub const MAX_TARGETS: usize = 4;
    /// Airship share of spawned targets; the rest are balloons
    pub const AIRSHIP_WEIGHT: f32 = 0.2;
}

/// Quadrant-aware aim angle from a gun mount toward the pointer, in
/// screen coordinates (y grows downward).
///
/// Vertical alignment aims straight up regardless of which side the
/// pointer is on; pointers below the horizon clamp to horizontal, so a
/// gun never aims into the ground.
pub fn aim_angle(mount: Vec2, pointer: Vec2) -> f32 {
    use std::f32::consts::PI;
    let dx = pointer.x - mount.x;
    let dy = pointer.y - mount.y;
    if dx == 0.0 {
        -PI / 2.0
    } else if dy > 0.0 {
        if dx > 0.0 { 0.0 } else { PI }
    } else if dy < 0.0 && dx > 0.0 {
        (dy / dx).atan()
    } else {
        (dy / dx).atan() + PI
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    const MOUNT: Vec2 = Vec2::new(100.0, 100.0);

    #[test]
    fn vertical_alignment_aims_straight_up() {
        assert_eq!(aim_angle(MOUNT, Vec2::new(100.0, 0.0)), -PI / 2.0);
        // Same answer even with the pointer below the mount
        assert_eq!(aim_angle(MOUNT, Vec2::new(100.0, 200.0)), -PI / 2.0);
    }

    #[test]
    fn pointer_below_horizon_clamps_to_horizontal() {
        assert_eq!(aim_angle(MOUNT, Vec2::new(150.0, 150.0)), 0.0);
        assert_eq!(aim_angle(MOUNT, Vec2::new(50.0, 150.0)), PI);
    }

    #[test]
    fn upper_right_quadrant() {
        let angle = aim_angle(MOUNT, Vec2::new(150.0, 50.0));
        assert!((angle - (-PI / 4.0)).abs() < 1e-6);
    }

    #[test]
    fn upper_left_quadrant() {
        let angle = aim_angle(MOUNT, Vec2::new(50.0, 50.0));
        assert!((angle - (PI / 4.0 + PI)).abs() < 1e-6);
    }
}
