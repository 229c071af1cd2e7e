//! Vehicles: player tanks and the aerial targets worth experience

use glam::Vec2;
use rand::Rng;

use crate::assets::Sprite;
use crate::config::{Controls, GameConfig};
use crate::consts::TANK_SPEED;
use crate::input::InputEvent;

use super::hitbox::HitboxPart;
use super::particle::Particle;
use super::projectile::{Projectile, ProjectileKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleKind {
    /// Player-controlled, carries a gun
    Tank { controls: Controls },
    /// Static aerial target
    AirBalloon,
    /// Drifting target that drops bombs
    Airship,
}

#[derive(Debug, Clone)]
pub struct Vehicle {
    pub id: u32,
    pub kind: VehicleKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub hit_points: i32,
    pub exp_points: u32,
}

impl Vehicle {
    /// Tank spawn: parked on the ground at the given x.
    pub fn tank(id: u32, spawn_x: f32, controls: Controls, cfg: &GameConfig) -> Self {
        Self {
            id,
            kind: VehicleKind::Tank { controls },
            pos: Vec2::new(spawn_x, cfg.ground_level() - 30.0),
            vel: Vec2::ZERO,
            size: Vec2::new(100.0, 60.0),
            hit_points: 10,
            exp_points: 10,
        }
    }

    /// Balloon spawn: a random spot inside the screen margins.
    pub fn air_balloon(id: u32, cfg: &GameConfig, rng: &mut impl Rng) -> Self {
        let size = Vec2::new(90.0, 120.0);
        let pos = Vec2::new(
            rng.random_range(size.x..=cfg.screen_width - size.x),
            rng.random_range(size.y..=cfg.screen_height - cfg.ground_height - size.y),
        );
        Self {
            id,
            kind: VehicleKind::AirBalloon,
            pos,
            vel: Vec2::ZERO,
            size,
            hit_points: 1,
            exp_points: 1,
        }
    }

    /// Airship spawn: just past a random screen edge, drifting across at
    /// a random whole-number speed.
    pub fn airship(id: u32, cfg: &GameConfig, rng: &mut impl Rng) -> Self {
        let size = Vec2::new(300.0, 160.0);
        let y = rng.random_range(size.y..=cfg.screen_height - cfg.ground_height - size.y);
        let (x, vx) = if rng.random_bool(0.5) {
            (-size.x, rng.random_range(1..=5) as f32)
        } else {
            (cfg.screen_width + size.x, -(rng.random_range(1..=5) as f32))
        };
        Self {
            id,
            kind: VehicleKind::Airship,
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, 0.0),
            size,
            hit_points: 4,
            exp_points: 3,
        }
    }

    /// Silhouette rectangles at the current position. Offsets are fixed
    /// per kind, tuned to the sprite art.
    pub fn hitbox_parts(&self) -> Vec<HitboxPart> {
        let at = self.pos;
        let part = |dx: f32, dy: f32, hw: f32, hh: f32| {
            HitboxPart::new(Vec2::new(at.x + dx, at.y + dy), Vec2::new(hw, hh))
        };
        match self.kind {
            VehicleKind::Tank { .. } => vec![
                part(0.0, 21.0, self.size.x / 2.0, 9.0),
                part(0.0, 4.0, 36.0, 7.0),
                part(0.0, -17.0, 25.0, 13.0),
            ],
            VehicleKind::AirBalloon => vec![
                part(0.0, 44.0, 8.0, 16.0),
                part(0.0, 15.0, 39.0, 13.0),
                part(0.0, -19.0, self.size.x / 2.0, 21.0),
                part(0.0, -50.0, 38.0, 10.0),
            ],
            VehicleKind::Airship => vec![
                part(-125.0, -14.0, 24.0, 62.0),
                part(-50.0, 0.0, 51.0, 56.0),
                part(42.0, 0.0, 40.0, self.size.y / 2.0),
                part(114.0, 0.0, 36.0, 10.0),
            ],
        }
    }

    /// One tick of movement.
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Movement-key handling; only tanks listen.
    pub fn control(&mut self, event: &InputEvent) {
        let VehicleKind::Tank { controls } = self.kind else {
            return;
        };
        match *event {
            InputEvent::KeyDown(key) if key == controls.move_right => self.vel.x = TANK_SPEED,
            InputEvent::KeyDown(key) if key == controls.move_left => self.vel.x = -TANK_SPEED,
            InputEvent::KeyUp(key) if key == controls.move_right || key == controls.move_left => {
                self.vel.x = 0.0
            }
            _ => {}
        }
    }

    pub fn take_damage(&mut self, damage: i32) {
        self.hit_points -= damage;
    }

    /// Dead strictly below zero; a vehicle at exactly zero hit points is
    /// still in the fight.
    pub fn is_dead(&self) -> bool {
        self.hit_points < 0
    }

    /// Explosion left where the vehicle died. Tanks throw a tall plume
    /// above the wreck; aerial targets pop in place.
    pub fn death_particle(&self, lifetime: u32) -> Particle {
        match self.kind {
            VehicleKind::Tank { .. } => Particle::new(
                Vec2::new(self.pos.x, self.pos.y - 1.5 * self.size.y),
                Vec2::new(self.size.x * 2.0, self.size.y * 4.0),
                Sprite::LandExplosion,
                lifetime,
            ),
            _ => Particle::new(self.pos, self.size, Sprite::AirExplosion, lifetime),
        }
    }

    /// Bomb released from beneath the airship cockpit.
    pub fn drop_bomb(&self, id: u32) -> Projectile {
        Projectile::new(
            id,
            ProjectileKind::Bomb,
            self.pos + Vec2::new(35.0, 91.0),
            Vec2::ZERO,
        )
    }

    pub fn sprite(&self) -> Sprite {
        match self.kind {
            VehicleKind::Tank { .. } => Sprite::Tank,
            VehicleKind::AirBalloon => Sprite::AirBalloon,
            VehicleKind::Airship => Sprite::Airship,
        }
    }

    /// Airships flying right-to-left use the mirrored sprite.
    pub fn mirrored(&self) -> bool {
        self.kind == VehicleKind::Airship && self.vel.x < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn cfg() -> GameConfig {
        GameConfig::default()
    }

    fn controls() -> Controls {
        Controls {
            move_right: Key::D,
            move_left: Key::A,
        }
    }

    #[test]
    fn tank_sits_on_the_ground() {
        let config = cfg();
        let tank = Vehicle::tank(1, 300.0, controls(), &config);
        assert_eq!(tank.pos, Vec2::new(300.0, config.ground_level() - 30.0));
        assert_eq!(tank.hitbox_parts().len(), 3);
        // Tread part spans the full hull width
        assert_eq!(tank.hitbox_parts()[0].half.x, 50.0);
    }

    #[test]
    fn movement_keys_set_and_clear_velocity() {
        let config = cfg();
        let mut tank = Vehicle::tank(1, 300.0, controls(), &config);

        tank.control(&InputEvent::KeyDown(Key::D));
        assert_eq!(tank.vel.x, TANK_SPEED);
        tank.control(&InputEvent::KeyDown(Key::A));
        assert_eq!(tank.vel.x, -TANK_SPEED);
        tank.control(&InputEvent::KeyUp(Key::D));
        assert_eq!(tank.vel.x, 0.0);

        // Unbound keys are ignored
        tank.control(&InputEvent::KeyDown(Key::W));
        assert_eq!(tank.vel.x, 0.0);
    }

    #[test]
    fn death_is_strictly_below_zero() {
        let config = cfg();
        let mut tank = Vehicle::tank(1, 300.0, controls(), &config);
        tank.take_damage(10);
        assert_eq!(tank.hit_points, 0);
        assert!(!tank.is_dead());
        tank.take_damage(1);
        assert!(tank.is_dead());
    }

    #[test]
    fn balloon_spawns_inside_margins() {
        let config = cfg();
        let mut rng = Pcg32::seed_from_u64(7);
        for id in 0..50 {
            let balloon = Vehicle::air_balloon(id, &config, &mut rng);
            assert!(balloon.pos.x >= 90.0 && balloon.pos.x <= config.screen_width - 90.0);
            assert!(balloon.pos.y >= 120.0);
            assert!(balloon.pos.y <= config.screen_height - config.ground_height - 120.0);
            assert_eq!(balloon.vel, Vec2::ZERO);
        }
    }

    #[test]
    fn airship_edge_picks_drift_direction() {
        let config = cfg();
        let mut rng = Pcg32::seed_from_u64(42);
        let mut saw_left = false;
        let mut saw_right = false;
        for id in 0..100 {
            let ship = Vehicle::airship(id, &config, &mut rng);
            assert_eq!(ship.vel.x.fract(), 0.0, "whole-number drift speed");
            if ship.pos.x < 0.0 {
                saw_left = true;
                assert!((1.0..=5.0).contains(&ship.vel.x));
            } else {
                saw_right = true;
                assert_eq!(ship.pos.x, config.screen_width + 300.0);
                assert!((-5.0..=-1.0).contains(&ship.vel.x));
                assert!(ship.mirrored());
            }
        }
        assert!(saw_left && saw_right);
    }

    #[test]
    fn bomb_drops_beneath_the_cockpit() {
        let config = cfg();
        let mut rng = Pcg32::seed_from_u64(1);
        let ship = Vehicle::airship(9, &config, &mut rng);
        let bomb = ship.drop_bomb(77);
        assert_eq!(bomb.id, 77);
        assert_eq!(bomb.kind, ProjectileKind::Bomb);
        assert_eq!(bomb.pos, ship.pos + Vec2::new(35.0, 91.0));
        assert_eq!(bomb.vel, Vec2::ZERO);
    }

    #[test]
    fn hitboxes_track_the_vehicle() {
        let config = cfg();
        let mut tank = Vehicle::tank(1, 300.0, controls(), &config);
        let before = tank.hitbox_parts();
        tank.vel.x = TANK_SPEED;
        tank.advance();
        let after = tank.hitbox_parts();
        for (a, b) in before.iter().zip(&after) {
            assert_eq!(b.center.x - a.center.x, TANK_SPEED);
            assert_eq!(a.half, b.half);
        }
    }
}
