//! Hitbox geometry
//!
//! Vehicles approximate their silhouette with a handful of axis-aligned
//! rectangles. Projectiles test the four corners of their bounding
//! square against each part.

use glam::Vec2;

/// One axis-aligned rectangle of a vehicle silhouette: center plus half
/// extents on each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitboxPart {
    pub center: Vec2,
    pub half: Vec2,
}

impl HitboxPart {
    pub const fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    /// Open-interval containment: points exactly on an edge are outside.
    pub fn contains(&self, point: Vec2) -> bool {
        (point.x - self.center.x).abs() < self.half.x
            && (point.y - self.center.y).abs() < self.half.y
    }
}

/// Whether a circle at `center` with `radius` hits any part, testing the
/// four corners of its bounding square. Deliberately not a true
/// circle-rectangle intersection; the corner approximation is part of
/// the game balance.
pub fn circle_corners_hit(center: Vec2, radius: f32, parts: &[HitboxPart]) -> bool {
    let corners = [
        center + Vec2::new(-radius, -radius),
        center + Vec2::new(radius, -radius),
        center + Vec2::new(radius, radius),
        center + Vec2::new(-radius, radius),
    ];
    parts
        .iter()
        .any(|part| corners.iter().any(|&corner| part.contains(corner)))
}
