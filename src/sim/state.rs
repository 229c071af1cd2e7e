//! Orchestrator-owned game state

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::GameConfig;
use crate::consts::GUN_MOUNT_RISE;

use super::gun::{Gun, GunKind};
use super::particle::Particle;
use super::projectile::Projectile;
use super::vehicle::Vehicle;

/// Complete game state. The orchestrator exclusively owns every entity
/// collection and mutates them in place once per tick; entities never
/// reference each other.
#[derive(Debug)]
pub struct GameState {
    pub config: GameConfig,
    pub rng: Pcg32,
    /// Player tanks; index-parallel with `guns`
    pub tanks: Vec<Vehicle>,
    pub guns: Vec<Gun>,
    /// Non-player vehicles worth experience
    pub targets: Vec<Vehicle>,
    pub projectiles: Vec<Projectile>,
    pub particles: Vec<Particle>,
    /// Experience per player slot, credited to whichever slot holds
    /// control when the kill lands
    pub scores: [u32; 2],
    /// Index into `tanks`/`guns` of the controlled pair
    pub tank_under_control: usize,
    pub finished: bool,
    pub time_ticks: u64,
    next_id: u32,
}

impl GameState {
    /// Set up the standard duel: two tanks at their spawn points,
    /// player one on artillery, player two on the shotgun.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut state = Self {
            rng: Pcg32::seed_from_u64(seed),
            tanks: Vec::new(),
            guns: Vec::new(),
            targets: Vec::new(),
            projectiles: Vec::new(),
            particles: Vec::new(),
            scores: [0, 0],
            tank_under_control: 0,
            finished: false,
            time_ticks: 0,
            next_id: 1,
            config,
        };

        for (slot, kind) in [(0, GunKind::Artillery), (1, GunKind::Shotgun)] {
            let id = state.next_entity_id();
            let tank = Vehicle::tank(
                id,
                state.config.tank_spawns[slot],
                state.config.controls[slot],
                &state.config,
            );
            state.guns.push(Gun::new(kind, Self::mount_of(&tank)));
            state.tanks.push(tank);
        }

        state
    }

    /// Allocate one entity id.
    pub fn next_entity_id(&mut self) -> u32 {
        self.reserve_entity_ids(1)
    }

    /// Reserve `n` consecutive ids; shotgun blasts spawn several
    /// projectiles at once.
    pub fn reserve_entity_ids(&mut self, n: u32) -> u32 {
        let base = self.next_id;
        self.next_id += n;
        base
    }

    /// Mount point of a tank: the gun chamber rides above the hull.
    pub fn mount_of(tank: &Vehicle) -> Vec2 {
        tank.pos - Vec2::new(0.0, GUN_MOUNT_RISE)
    }

    /// The currently controlled gun.
    pub fn controlled_gun(&self) -> &Gun {
        &self.guns[self.tank_under_control]
    }

    /// The currently controlled tank.
    pub fn controlled_tank(&self) -> &Vehicle {
        &self.tanks[self.tank_under_control]
    }
}
