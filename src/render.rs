//! Render collaborator and scene drawing
//!
//! The simulation never draws; `draw_scene` walks a `GameState` and
//! issues draw-primitive calls against whatever `Renderer` the app was
//! handed. Guns are drawn from geometry rather than sprites, so the
//! barrel and its charge overlay rotate exactly with the aim angle.

use glam::Vec2;

use crate::assets::Sprite;
use crate::consts::{BARREL_LENGTH, BARREL_WIDTH, FIRE_POWER_MIN};
use crate::sim::{GameState, Gun, GunKind, ProjectileKind};

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Daytime sky behind everything
pub const SKY: Rgba = Rgba::opaque(95, 204, 250);
/// Barrel color
pub const GUN_METAL: Rgba = Rgba::opaque(28, 43, 28);
/// Bombs and the charge overlay
pub const EXPLOSIVE_RED: Rgba = Rgba::opaque(184, 59, 28);
/// Shells and shrapnel
pub const PROJECTILE_BLACK: Rgba = Rgba::opaque(0, 0, 0);
/// Charge overlays are translucent so the scene stays readable
pub const AIM_ALPHA: u8 = 120;

/// Axis-aligned screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Rectangle of `size` centered on `center`.
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
        }
    }
}

/// Draw primitives the scene needs. One frame is a `clear`, a batch of
/// draw calls, then a `present`.
pub trait Renderer {
    fn clear(&mut self, color: Rgba);
    /// Draw a texture stretched into `dst`; `flip_x` mirrors it.
    fn blit(&mut self, sprite: Sprite, dst: Rect, flip_x: bool);
    fn fill_polygon(&mut self, points: &[Vec2], color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn present(&mut self);
}

/// Renderer that draws nothing. Headless runs and simulation tests use
/// it so the frame loop stays identical with or without a window.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn clear(&mut self, _color: Rgba) {}
    fn blit(&mut self, _sprite: Sprite, _dst: Rect, _flip_x: bool) {}
    fn fill_polygon(&mut self, _points: &[Vec2], _color: Rgba) {}
    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Rgba) {}
    fn present(&mut self) {}
}

/// Rotated rectangle along `dir` starting at `origin`.
fn beam(origin: Vec2, dir: Vec2, length: f32, half_width: f32) -> [Vec2; 4] {
    let perp = Vec2::new(-dir.y, dir.x);
    let far = origin + dir * length;
    [
        origin + perp * half_width,
        far + perp * half_width,
        far - perp * half_width,
        origin - perp * half_width,
    ]
}

/// The barrel rectangle for a gun at its current angle.
pub fn barrel_polygon(gun: &Gun) -> [Vec2; 4] {
    let dir = Vec2::new(gun.angle.cos(), gun.angle.sin());
    beam(gun.pos, dir, BARREL_LENGTH * 10.0, BARREL_WIDTH / 2.0)
}

/// Artillery charge overlay: a beam along the aim whose length tracks
/// the accumulated fire power.
pub fn artillery_aim_polygon(gun: &Gun) -> [Vec2; 4] {
    let dir = Vec2::new(gun.angle.cos(), gun.angle.sin());
    beam(gun.pos, dir, BARREL_LENGTH * gun.fire_power, BARREL_WIDTH / 2.0)
}

/// Shotgun charge overlay: a fan opening from the muzzle, wider and
/// longer as the fire power grows.
pub fn shotgun_aim_polygon(gun: &Gun) -> [Vec2; 4] {
    let dir = Vec2::new(gun.angle.cos(), gun.angle.sin());
    let perp = Vec2::new(-dir.y, dir.x);
    let near = gun.pos + dir * (BARREL_LENGTH * 10.0);
    let far = gun.pos + dir * (BARREL_LENGTH * gun.fire_power);
    let half_near = BARREL_WIDTH / 2.0;
    let half_far = (BARREL_WIDTH + (gun.fire_power - FIRE_POWER_MIN) / 40.0 * 70.0) / 2.0;
    [
        near + perp * half_near,
        far + perp * half_far,
        far - perp * half_far,
        near - perp * half_near,
    ]
}

/// Draw one frame of the scene, back to front. `present` is left to the
/// caller so it can sit exactly where the frame loop wants it.
pub fn draw_scene(state: &GameState, out: &mut dyn Renderer) {
    let cfg = &state.config;
    out.clear(SKY);
    out.blit(
        Sprite::Ground,
        Rect::new(
            Vec2::new(0.0, cfg.screen_height - cfg.ground_height),
            Vec2::new(cfg.screen_width, cfg.ground_height),
        ),
        false,
    );

    for gun in &state.guns {
        if gun.armed {
            let overlay = match gun.kind {
                GunKind::Artillery => artillery_aim_polygon(gun),
                GunKind::Shotgun => shotgun_aim_polygon(gun),
            };
            out.fill_polygon(&overlay, EXPLOSIVE_RED.with_alpha(AIM_ALPHA));
        }
        out.fill_polygon(&barrel_polygon(gun), GUN_METAL);
    }

    for tank in &state.tanks {
        out.blit(tank.sprite(), Rect::centered(tank.pos, tank.size), false);
    }
    for target in &state.targets {
        out.blit(
            target.sprite(),
            Rect::centered(target.pos, target.size),
            target.mirrored(),
        );
    }

    for projectile in &state.projectiles {
        let color = match projectile.kind {
            ProjectileKind::Bomb => EXPLOSIVE_RED,
            _ => PROJECTILE_BLACK,
        };
        out.fill_circle(projectile.pos, projectile.radius(), color);
    }

    for particle in &state.particles {
        out.blit(
            particle.sprite,
            Rect::centered(particle.pos, particle.size),
            false,
        );
    }
}
