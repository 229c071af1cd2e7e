//! Per-tick orchestration
//!
//! Phase functions advance the game in a fixed order each frame. The
//! app loop draws and presents between `spawn_targets` and
//! `step_after_draw`; `advance` bundles the whole simulation side for
//! headless runs and tests.

use glam::Vec2;
use rand::Rng;

use crate::consts::{AIRSHIP_WEIGHT, MAX_TARGETS};
use crate::input::InputEvent;

use super::gun::Gun;
use super::state::GameState;
use super::vehicle::{Vehicle, VehicleKind};

/// One simulation tick: everything except drawing, in frame order.
pub fn advance(state: &mut GameState, events: &[InputEvent]) {
    if state.finished {
        return;
    }
    spawn_targets(state);
    step_after_draw(state, events);
}

/// The phases that run after the frame has been drawn: input, movement,
/// AI, collisions, cleanup and the control check.
pub fn step_after_draw(state: &mut GameState, events: &[InputEvent]) {
    process_input(state, events);
    move_entities(state);
    run_target_ai(state);
    resolve_collisions(state);
    remove_dead_vehicles(state);
    age_particles(state);
    check_tanks(state);
    state.time_ticks += 1;
}

/// Maybe spawn one new target, capped at four concurrent. Airships are
/// the rare draw; balloons the common one.
pub fn spawn_targets(state: &mut GameState) {
    if state.targets.len() >= MAX_TARGETS {
        return;
    }
    if state.rng.random::<f64>() >= state.config.rare_event_chance() {
        return;
    }
    let id = state.next_entity_id();
    let target = if state.rng.random::<f32>() < AIRSHIP_WEIGHT {
        Vehicle::airship(id, &state.config, &mut state.rng)
    } else {
        Vehicle::air_balloon(id, &state.config, &mut state.rng)
    };
    log::debug!("spawned {:?} #{} at {}", target.kind, target.id, target.pos);
    state.targets.push(target);
}

/// Drain this tick's input events, then charge the armed gun once.
pub fn process_input(state: &mut GameState, events: &[InputEvent]) {
    for event in events {
        match *event {
            InputEvent::Quit => state.finished = true,
            InputEvent::KeyDown(key) if key == state.config.tank_switch => {
                // Only meaningful while both tanks are in the fight
                if state.tanks.len() == 2 {
                    state.tanks[state.tank_under_control].vel = Vec2::ZERO;
                    state.tank_under_control = 1 - state.tank_under_control;
                }
            }
            InputEvent::KeyDown(key) if key == state.config.gun_switch => {
                let slot = state.tank_under_control;
                let mount = GameState::mount_of(&state.tanks[slot]);
                let kind = state.guns[slot].kind.switched();
                state.guns[slot] = Gun::new(kind, mount);
            }
            InputEvent::PointerMoved(pointer) => {
                state.guns[state.tank_under_control].aim_at(pointer)
            }
            InputEvent::PointerDown => state.guns[state.tank_under_control].arm(),
            InputEvent::PointerUp => {
                let count = state.guns[state.tank_under_control].kind.shot_count();
                let base = state.reserve_entity_ids(count);
                let shots = state.guns[state.tank_under_control].fire(base);
                state.projectiles.extend(shots);
            }
            _ => {}
        }
        // Movement keys reach only the controlled tank
        state.tanks[state.tank_under_control].control(event);
    }
    state.guns[state.tank_under_control].power_up();
}

/// Integrate motion and keep the controlled gun on its mount.
pub fn move_entities(state: &mut GameState) {
    for tank in &mut state.tanks {
        tank.advance();
    }
    for target in &mut state.targets {
        target.advance();
    }
    for projectile in &mut state.projectiles {
        projectile.advance(state.config.gravity);
    }
    let mount = GameState::mount_of(&state.tanks[state.tank_under_control]);
    state.guns[state.tank_under_control].move_to(mount);
}

/// Each airship rolls its bomb-drop chance.
pub fn run_target_ai(state: &mut GameState) {
    let chance = state.config.rare_event_chance();
    let mut droppers = Vec::new();
    for (index, target) in state.targets.iter().enumerate() {
        if target.kind == VehicleKind::Airship && state.rng.random::<f64>() < chance {
            droppers.push(index);
        }
    }
    for index in droppers {
        let id = state.next_entity_id();
        let bomb = state.targets[index].drop_bomb(id);
        log::debug!("airship #{} dropped bomb #{}", state.targets[index].id, bomb.id);
        state.projectiles.push(bomb);
    }
}

/// Projectile hits: the first vehicle hit takes the damage and ends the
/// projectile; otherwise ground and screen-edge exits apply. Removal is
/// id-keyed, so an id that is already gone is a no-op.
pub fn resolve_collisions(state: &mut GameState) {
    let GameState {
        projectiles,
        targets,
        tanks,
        particles,
        config,
        ..
    } = state;

    let mut spent: Vec<u32> = Vec::new();
    for projectile in projectiles.iter() {
        let victim = targets
            .iter_mut()
            .chain(tanks.iter_mut())
            .find(|vehicle| projectile.hits_vehicle(vehicle));
        if let Some(vehicle) = victim {
            vehicle.take_damage(projectile.damage());
            spent.push(projectile.id);
            continue;
        }
        if projectile.hit_ground(config) {
            if let Some(explosion) = projectile.ground_explosion(config) {
                particles.push(explosion);
            }
            spent.push(projectile.id);
            continue;
        }
        if projectile.off_screen(config) {
            spent.push(projectile.id);
        }
    }

    projectiles.retain(|projectile| !spent.contains(&projectile.id));
}

/// Dead vehicles explode and credit the controlling player; a dead tank
/// takes its gun with it.
pub fn remove_dead_vehicles(state: &mut GameState) {
    let lifetime = state.config.particle_lifetime();
    let slot = state.tank_under_control;

    let GameState {
        targets,
        tanks,
        guns,
        particles,
        scores,
        ..
    } = state;

    targets.retain(|target| {
        if target.is_dead() {
            log::info!(
                "{:?} #{} destroyed, +{} exp to player {}",
                target.kind,
                target.id,
                target.exp_points,
                slot + 1
            );
            particles.push(target.death_particle(lifetime));
            scores[slot] += target.exp_points;
            false
        } else {
            true
        }
    });

    let mut index = 0;
    while index < tanks.len() {
        if tanks[index].is_dead() {
            let tank = tanks.remove(index);
            guns.remove(index);
            log::info!("tank #{} destroyed, +{} exp to player {}", tank.id, tank.exp_points, slot + 1);
            particles.push(tank.death_particle(lifetime));
            scores[slot] += tank.exp_points;
        } else {
            index += 1;
        }
    }
}

/// Age particles and drop the expired ones.
pub fn age_particles(state: &mut GameState) {
    for particle in &mut state.particles {
        particle.age_tick();
    }
    state.particles.retain(|particle| !particle.is_expired());
}

/// A lone tank is always the controlled one; no tanks ends the game.
pub fn check_tanks(state: &mut GameState) {
    match state.tanks.len() {
        1 => state.tank_under_control = 0,
        0 => {
            if !state.finished {
                log::info!("game over, scores {:?}", state.scores);
            }
            state.finished = true;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::consts::{FIRE_POWER_MIN, TANK_SPEED};
    use crate::input::Key;
    use crate::sim::gun::GunKind;
    use crate::sim::projectile::{Projectile, ProjectileKind};

    fn state() -> GameState {
        GameState::new(GameConfig::default(), 123)
    }

    fn balloon_at(state: &mut GameState, pos: Vec2) {
        let id = state.next_entity_id();
        state.targets.push(Vehicle {
            id,
            kind: VehicleKind::AirBalloon,
            pos,
            vel: Vec2::ZERO,
            size: Vec2::new(90.0, 120.0),
            hit_points: 1,
            exp_points: 1,
        });
    }

    #[test]
    fn tank_switch_zeroes_velocity_and_toggles() {
        let mut game = state();
        process_input(&mut game, &[InputEvent::KeyDown(Key::D)]);
        assert_eq!(game.tanks[0].vel.x, TANK_SPEED);

        process_input(&mut game, &[InputEvent::KeyDown(Key::Space)]);
        assert_eq!(game.tank_under_control, 1);
        assert_eq!(game.tanks[0].vel, Vec2::ZERO);

        process_input(&mut game, &[InputEvent::KeyDown(Key::Space)]);
        assert_eq!(game.tank_under_control, 0);
    }

    #[test]
    fn tank_switch_needs_both_tanks() {
        let mut game = state();
        game.tanks.pop();
        game.guns.pop();
        process_input(&mut game, &[InputEvent::KeyDown(Key::Space)]);
        assert_eq!(game.tank_under_control, 0);
    }

    #[test]
    fn quit_event_finishes_the_game() {
        let mut game = state();
        process_input(&mut game, &[InputEvent::Quit]);
        assert!(game.finished);
    }

    #[test]
    fn gun_switch_rebuilds_at_the_controlled_mount() {
        let mut game = state();
        game.tanks[0].pos.x = 555.0;
        game.guns[0].angle = -1.2;
        game.guns[0].fire_power = 30.0;

        process_input(&mut game, &[InputEvent::KeyDown(Key::Shift)]);
        let gun = &game.guns[0];
        assert_eq!(gun.kind, GunKind::Shotgun);
        assert_eq!(gun.pos, GameState::mount_of(&game.tanks[0]));
        assert_eq!(gun.fire_power, FIRE_POWER_MIN);
        assert!(!gun.armed);

        process_input(&mut game, &[InputEvent::KeyDown(Key::Shift)]);
        assert_eq!(game.guns[0].kind, GunKind::Artillery);
    }

    #[test]
    fn trigger_hold_charges_then_release_fires() {
        let mut game = state();
        process_input(&mut game, &[InputEvent::PointerDown]);
        assert!(game.guns[0].armed);
        assert_eq!(game.guns[0].fire_power, FIRE_POWER_MIN + 1.0);

        process_input(&mut game, &[]);
        assert_eq!(game.guns[0].fire_power, FIRE_POWER_MIN + 2.0);

        process_input(&mut game, &[InputEvent::PointerUp]);
        assert_eq!(game.projectiles.len(), 1);
        assert_eq!(game.projectiles[0].kind, ProjectileKind::Shell);
        // Fired with the power held at release time
        assert!((game.projectiles[0].vel.length() - (FIRE_POWER_MIN + 2.0)).abs() < 1e-3);
        assert_eq!(game.guns[0].fire_power, FIRE_POWER_MIN);
        assert!(!game.guns[0].armed);
    }

    #[test]
    fn movement_and_gun_follow() {
        let mut game = state();
        process_input(&mut game, &[InputEvent::KeyDown(Key::D)]);
        let before = game.tanks[0].pos;
        move_entities(&mut game);
        assert_eq!(game.tanks[0].pos, before + Vec2::new(TANK_SPEED, 0.0));
        assert_eq!(game.guns[0].pos, GameState::mount_of(&game.tanks[0]));
    }

    #[test]
    fn first_victim_takes_the_whole_hit() {
        let mut game = state();
        balloon_at(&mut game, Vec2::new(500.0, 500.0));
        balloon_at(&mut game, Vec2::new(500.0, 500.0));
        let id = game.next_entity_id();
        game.projectiles.push(Projectile::new(
            id,
            ProjectileKind::Shell,
            Vec2::new(500.0, 500.0),
            Vec2::ZERO,
        ));

        resolve_collisions(&mut game);
        assert!(game.projectiles.is_empty());
        assert!(game.targets[0].is_dead());
        assert_eq!(game.targets[1].hit_points, 1, "second balloon untouched");
    }

    #[test]
    fn kills_credit_the_controlling_player() {
        let mut game = state();
        balloon_at(&mut game, Vec2::new(500.0, 500.0));
        game.targets[0].hit_points = -1;

        remove_dead_vehicles(&mut game);
        assert!(game.targets.is_empty());
        assert_eq!(game.scores, [1, 0]);
        assert_eq!(game.particles.len(), 1);
    }

    #[test]
    fn ground_hit_explodes_shells_but_not_shrapnel() {
        let mut game = state();
        let deep = Vec2::new(600.0, game.config.ground_level() + 50.0);
        let id = game.next_entity_id();
        game.projectiles
            .push(Projectile::new(id, ProjectileKind::Shell, deep, Vec2::ZERO));
        let id = game.next_entity_id();
        game.projectiles
            .push(Projectile::new(id, ProjectileKind::Shrapnel, deep, Vec2::ZERO));

        resolve_collisions(&mut game);
        assert!(game.projectiles.is_empty());
        assert_eq!(game.particles.len(), 1);
    }

    #[test]
    fn off_screen_projectiles_vanish_quietly() {
        let mut game = state();
        let id = game.next_entity_id();
        game.projectiles.push(Projectile::new(
            id,
            ProjectileKind::Shell,
            Vec2::new(-100.0, 300.0),
            Vec2::ZERO,
        ));
        resolve_collisions(&mut game);
        assert!(game.projectiles.is_empty());
        assert!(game.particles.is_empty());
    }

    #[test]
    fn dead_tank_takes_its_gun_and_control_falls_back() {
        let mut game = state();
        game.tank_under_control = 1;
        game.tanks[1].hit_points = -1;

        remove_dead_vehicles(&mut game);
        check_tanks(&mut game);

        assert_eq!(game.tanks.len(), 1);
        assert_eq!(game.guns.len(), 1);
        assert_eq!(game.guns[0].kind, GunKind::Artillery, "survivor keeps their own gun");
        assert_eq!(game.scores[1], 10);
        assert_eq!(game.tank_under_control, 0);
        assert!(!game.finished);
    }

    #[test]
    fn no_tanks_ends_the_game() {
        let mut game = state();
        for tank in &mut game.tanks {
            tank.hit_points = -1;
        }
        remove_dead_vehicles(&mut game);
        check_tanks(&mut game);
        assert!(game.finished);
    }

    #[test]
    fn particles_expire_after_their_lifetime() {
        let mut game = state();
        game.particles.push(crate::sim::Particle::new(
            Vec2::ZERO,
            Vec2::splat(10.0),
            crate::assets::Sprite::AirExplosion,
            1,
        ));
        age_particles(&mut game);
        assert_eq!(game.particles.len(), 1);
        age_particles(&mut game);
        assert!(game.particles.is_empty());
    }

    #[test]
    fn spawning_respects_the_target_cap() {
        let mut game = state();
        for _ in 0..MAX_TARGETS {
            balloon_at(&mut game, Vec2::new(500.0, 500.0));
        }
        for _ in 0..2000 {
            spawn_targets(&mut game);
        }
        assert_eq!(game.targets.len(), MAX_TARGETS);
    }

    #[test]
    fn idle_frames_leave_the_duel_standing() {
        let mut game = state();
        for _ in 0..300 {
            advance(&mut game, &[]);
        }
        assert_eq!(game.tanks.len(), 2);
        assert!(!game.finished);
        assert!(game.targets.len() <= MAX_TARGETS);
        assert_eq!(game.time_ticks, 300);
    }

    #[test]
    fn advance_is_inert_once_finished() {
        let mut game = state();
        game.tanks.clear();
        game.guns.clear();
        game.finished = true;
        advance(&mut game, &[InputEvent::PointerDown]);
        assert_eq!(game.time_ticks, 0);
    }
}
