//! Projectiles: shells, shrapnel and bombs
//!
//! All three fly the same way - constant downward acceleration, no
//! drag - and differ only in radius, damage and what they leave behind
//! when they hit the ground.

use glam::Vec2;

use crate::assets::Sprite;
use crate::config::GameConfig;
use crate::consts::*;

use super::hitbox::circle_corners_hit;
use super::particle::Particle;
use super::vehicle::Vehicle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileKind {
    /// Single heavy round from an artillery gun
    Shell,
    /// One pellet of a shotgun blast
    Shrapnel,
    /// Dropped from an airship
    Bomb,
}

impl ProjectileKind {
    pub fn radius(self) -> f32 {
        match self {
            ProjectileKind::Shell => SHELL_RADIUS,
            ProjectileKind::Shrapnel => SHRAPNEL_RADIUS,
            ProjectileKind::Bomb => BOMB_RADIUS,
        }
    }

    pub fn damage(self) -> i32 {
        match self {
            ProjectileKind::Shell => SHELL_DAMAGE,
            ProjectileKind::Shrapnel => SHRAPNEL_DAMAGE,
            ProjectileKind::Bomb => BOMB_DAMAGE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: u32,
    pub kind: ProjectileKind,
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Projectile {
    pub fn new(id: u32, kind: ProjectileKind, pos: Vec2, vel: Vec2) -> Self {
        Self { id, kind, pos, vel }
    }

    /// One tick of ballistic flight: gravity first, then integration.
    pub fn advance(&mut self, gravity: f32) {
        self.vel.y += gravity;
        self.pos += self.vel;
    }

    pub fn radius(&self) -> f32 {
        self.kind.radius()
    }

    pub fn damage(&self) -> i32 {
        self.kind.damage()
    }

    /// Corner test of the bounding square against the vehicle
    /// silhouette.
    pub fn hits_vehicle(&self, vehicle: &Vehicle) -> bool {
        circle_corners_hit(self.pos, self.radius(), &vehicle.hitbox_parts())
    }

    /// Sunk below the top of the ground band.
    pub fn hit_ground(&self, cfg: &GameConfig) -> bool {
        self.pos.y - self.radius() > cfg.ground_level()
    }

    /// Fully past the left or right screen edge.
    pub fn off_screen(&self, cfg: &GameConfig) -> bool {
        self.pos.x < -self.radius() || self.pos.x > cfg.screen_width + self.radius()
    }

    /// Ground-impact explosion, sized and raised relative to the round.
    /// Shrapnel burns up without one.
    pub fn ground_explosion(&self, cfg: &GameConfig) -> Option<Particle> {
        let (scale, rise) = match self.kind {
            ProjectileKind::Shell => (5.0, 2.5),
            ProjectileKind::Bomb => (8.0, 4.0),
            ProjectileKind::Shrapnel => return None,
        };
        let radius = self.radius();
        Some(Particle::new(
            Vec2::new(
                self.pos.x,
                cfg.screen_height - (cfg.ground_height / 2.0 + rise * radius),
            ),
            Vec2::splat(scale * radius),
            Sprite::LandExplosion,
            cfg.particle_lifetime(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn shell(pos: Vec2, vel: Vec2) -> Projectile {
        Projectile::new(1, ProjectileKind::Shell, pos, vel)
    }

    #[test]
    fn gravity_accumulates_only_vertically() {
        let mut projectile = shell(Vec2::ZERO, Vec2::new(12.0, -30.0));
        for _ in 0..40 {
            projectile.advance(GRAVITY);
        }
        assert_eq!(projectile.vel.x, 12.0);
        assert!((projectile.vel.y - (-30.0 + 40.0 * GRAVITY)).abs() < 1e-3);
    }

    #[test]
    fn flat_shot_moves_purely_rightward_first_tick() {
        let mut projectile = shell(Vec2::new(100.0, 500.0), Vec2::new(25.0, 0.0));
        projectile.advance(GRAVITY);
        assert_eq!(projectile.pos.x, 125.0);
        // Only the first gravity increment has crept in vertically
        assert!((projectile.pos.y - (500.0 + GRAVITY)).abs() < 1e-4);
    }

    #[test]
    fn ground_plane_is_half_the_ground_band() {
        let cfg = GameConfig::default();
        let level = cfg.ground_level();
        let above = shell(Vec2::new(0.0, level + SHELL_RADIUS - 0.1), Vec2::ZERO);
        let below = shell(Vec2::new(0.0, level + SHELL_RADIUS + 0.1), Vec2::ZERO);
        assert!(!above.hit_ground(&cfg));
        assert!(below.hit_ground(&cfg));
    }

    #[test]
    fn off_screen_allows_the_full_radius() {
        let cfg = GameConfig::default();
        let grazing_left = shell(Vec2::new(-SHELL_RADIUS, 100.0), Vec2::ZERO);
        let gone_left = shell(Vec2::new(-SHELL_RADIUS - 0.1, 100.0), Vec2::ZERO);
        let gone_right = shell(Vec2::new(cfg.screen_width + SHELL_RADIUS + 0.1, 100.0), Vec2::ZERO);
        assert!(!grazing_left.off_screen(&cfg));
        assert!(gone_left.off_screen(&cfg));
        assert!(gone_right.off_screen(&cfg));
    }

    #[test]
    fn only_shell_and_bomb_explode_on_the_ground() {
        let cfg = GameConfig::default();
        let at = Vec2::new(400.0, cfg.ground_level() + 20.0);

        let shell = Projectile::new(1, ProjectileKind::Shell, at, Vec2::ZERO);
        let bomb = Projectile::new(2, ProjectileKind::Bomb, at, Vec2::ZERO);
        let shrapnel = Projectile::new(3, ProjectileKind::Shrapnel, at, Vec2::ZERO);

        let blast = shell.ground_explosion(&cfg).unwrap();
        assert_eq!(blast.size, Vec2::splat(5.0 * SHELL_RADIUS));
        assert_eq!(blast.pos.x, 400.0);

        let blast = bomb.ground_explosion(&cfg).unwrap();
        assert_eq!(blast.size, Vec2::splat(8.0 * BOMB_RADIUS));

        assert!(shrapnel.ground_explosion(&cfg).is_none());
    }
}
