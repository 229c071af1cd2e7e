//! Guns: aim, charge, fire
//!
//! A gun rides above its tank, tracks the pointer, charges launch speed
//! while the trigger is held and emits projectiles on release.

use std::f32::consts::PI;

use glam::Vec2;

use crate::aim_angle;
use crate::consts::*;

use super::projectile::{Projectile, ProjectileKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GunKind {
    /// One heavy shell per shot
    Artillery,
    /// Five-pellet fan per shot
    Shotgun,
}

impl GunKind {
    /// The other kind; used by the gun-switch key.
    pub fn switched(self) -> Self {
        match self {
            GunKind::Artillery => GunKind::Shotgun,
            GunKind::Shotgun => GunKind::Artillery,
        }
    }

    /// Projectiles emitted per trigger release.
    pub fn shot_count(self) -> u32 {
        match self {
            GunKind::Artillery => 1,
            GunKind::Shotgun => SHOTGUN_SPREAD.len() as u32,
        }
    }
}

/// Shrapnel fan offsets relative to the aim angle, widest first.
pub const SHOTGUN_SPREAD: [f32; 5] = [PI / 12.0, PI / 24.0, 0.0, -PI / 24.0, -PI / 12.0];

#[derive(Debug, Clone)]
pub struct Gun {
    pub kind: GunKind,
    /// Chamber position; follows the owning tank's mount
    pub pos: Vec2,
    /// Aim angle in radians, screen coordinates
    pub angle: f32,
    /// Launch speed accumulated while the trigger is held
    pub fire_power: f32,
    /// Trigger currently held
    pub armed: bool,
}

impl Gun {
    /// New gun chambered at a tank mount, aim and power at defaults.
    pub fn new(kind: GunKind, mount: Vec2) -> Self {
        Self {
            kind,
            pos: mount,
            // Tipped down-right until the first pointer event
            angle: 1.0,
            fire_power: FIRE_POWER_MIN,
            armed: false,
        }
    }

    /// Follow the owning tank's mount.
    pub fn move_to(&mut self, mount: Vec2) {
        self.pos = mount;
    }

    /// Swing the barrel toward the pointer.
    pub fn aim_at(&mut self, pointer: Vec2) {
        self.angle = aim_angle(self.pos, pointer);
    }

    /// Trigger pressed.
    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// While armed, charge one unit per tick up to the cap.
    pub fn power_up(&mut self) {
        if self.armed && self.fire_power < FIRE_POWER_MAX {
            self.fire_power += 1.0;
        }
    }

    /// Muzzle point at the end of the barrel.
    pub fn muzzle(&self) -> Vec2 {
        self.pos + BARREL_LENGTH * 10.0 * Vec2::new(self.angle.cos(), self.angle.sin())
    }

    /// Trigger released: emit this gun's projectiles from the muzzle and
    /// reset the firing state. `first_id` starts a block of
    /// `kind.shot_count()` consecutive entity ids reserved by the caller.
    pub fn fire(&mut self, first_id: u32) -> Vec<Projectile> {
        let muzzle = self.muzzle();
        let speed = self.fire_power;
        let shots = match self.kind {
            GunKind::Artillery => vec![Projectile::new(
                first_id,
                ProjectileKind::Shell,
                muzzle,
                speed * Vec2::new(self.angle.cos(), self.angle.sin()),
            )],
            GunKind::Shotgun => SHOTGUN_SPREAD
                .iter()
                .enumerate()
                .map(|(i, offset)| {
                    let angle = self.angle + offset;
                    Projectile::new(
                        first_id + i as u32,
                        ProjectileKind::Shrapnel,
                        muzzle,
                        speed * Vec2::new(angle.cos(), angle.sin()),
                    )
                })
                .collect(),
        };
        self.armed = false;
        self.fire_power = FIRE_POWER_MIN;
        shots
    }
}
