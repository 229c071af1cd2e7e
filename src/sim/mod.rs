//! Deterministic game simulation
//!
//! Pure state and tick logic with no windowing, timing or drawing
//! concerns. Given the same seed and the same per-tick event batches,
//! two runs produce identical states.

pub mod gun;
pub mod hitbox;
pub mod particle;
pub mod projectile;
pub mod state;
pub mod tick;
pub mod vehicle;

pub use gun::{Gun, GunKind, SHOTGUN_SPREAD};
pub use hitbox::{HitboxPart, circle_corners_hit};
pub use particle::Particle;
pub use projectile::{Projectile, ProjectileKind};
pub use state::GameState;
pub use tick::{advance, spawn_targets, step_after_draw};
pub use vehicle::{Vehicle, VehicleKind};
