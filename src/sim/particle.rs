//! Cosmetic particles

use glam::Vec2;

use crate::assets::Sprite;

/// Short-lived effect image. Purely cosmetic; never collides and never
/// affects scoring.
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub size: Vec2,
    pub sprite: Sprite,
    lifetime: u32,
    age: u32,
}

impl Particle {
    pub fn new(pos: Vec2, size: Vec2, sprite: Sprite, lifetime: u32) -> Self {
        Self {
            pos,
            size,
            sprite,
            lifetime,
            age: 0,
        }
    }

    /// One tick of aging.
    pub fn age_tick(&mut self) {
        self.age += 1;
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// Expired strictly after outliving its lifetime; a particle at
    /// exactly its lifetime still draws.
    pub fn is_expired(&self) -> bool {
        self.age > self.lifetime
    }
}
