//! Entity factories
//!
//! Set the initial records for each kind of creature. Every creature gets a
//! bounding box and four tracker lines.

use std::f32::consts::PI;

use glam::Vec2;
use hecs::Entity;

use super::bounds::{compute_box, spawn_tracker_lines};
use super::components::{Attractor, Motion, Player, Transform};
use super::physics::PhysicsWorld;
use crate::consts::*;

/// The player's salmon, facing left (angle π, y mirrored)
pub fn spawn_salmon(physics: &mut PhysicsWorld, position: Vec2) -> Entity {
    let transform = Transform::new(position, PI, Vec2::new(SALMON_BB_WIDTH, -SALMON_BB_HEIGHT));
    let entity = physics
        .world_mut()
        .spawn((transform, Motion::default(), compute_box(&transform), Player));
    track(physics, entity)
}

/// Prey swimming straight left
pub fn spawn_fish(physics: &mut PhysicsWorld, position: Vec2) -> Entity {
    let transform = Transform::new(position, 0.0, Vec2::new(-FISH_BB_WIDTH, FISH_BB_HEIGHT));
    let motion = Motion::with_velocity(Vec2::new(-FISH_SPEED, 0.0));
    let entity = physics
        .world_mut()
        .spawn((transform, motion, compute_box(&transform)));
    track(physics, entity)
}

/// Deadly eel swimming straight left, twice as fast as fish
pub fn spawn_eel(physics: &mut PhysicsWorld, position: Vec2) -> Entity {
    let transform = Transform::new(position, 0.0, Vec2::new(-EEL_BB_WIDTH, EEL_BB_HEIGHT));
    let motion = Motion::with_velocity(Vec2::new(-EEL_SPEED, 0.0));
    let entity = physics
        .world_mut()
        .spawn((transform, motion, compute_box(&transform)));
    track(physics, entity)
}

/// Pufferfish rising from the bottom on a curving path
///
/// `turn` picks the turning sense by its sign; `strength` in `[0, 1)` scales
/// the steering acceleration between half and full [`PUFFER_MAX_ACCEL`].
pub fn spawn_puffer(physics: &mut PhysicsWorld, position: Vec2, turn: f32, strength: f32) -> Entity {
    let transform = Transform::new(position, 0.0, Vec2::new(-FISH_BB_WIDTH, FISH_BB_HEIGHT));
    let accel = PUFFER_MAX_ACCEL * (strength / 2.0 + 0.5);
    let motion = Motion {
        velocity: Vec2::new(0.0, -PUFFER_RISE_SPEED),
        acceleration: Vec2::new(accel.copysign(turn), 0.0),
        external_velocity: Vec2::ZERO,
        initial_sign: 1.0_f32.copysign(turn),
    };
    let entity = physics
        .world_mut()
        .spawn((transform, motion, compute_box(&transform)));
    track(physics, entity)
}

/// Stationary whirlpool; `size` scales its sprite, pull and reach together
pub fn spawn_whirlpool(physics: &mut PhysicsWorld, position: Vec2, size: f32) -> Entity {
    let transform = Transform::new(
        position,
        0.0,
        Vec2::new(-WHIRL_BB_WIDTH * size, WHIRL_BB_HEIGHT * size),
    );
    let attractor = Attractor {
        force: WHIRL_FORCE * size,
        radius: WHIRL_RADIUS * size,
    };
    let entity = physics.world_mut().spawn((
        transform,
        Motion::default(),
        compute_box(&transform),
        attractor,
    ));
    track(physics, entity)
}

fn track(physics: &mut PhysicsWorld, entity: Entity) -> Entity {
    let thickness = physics.config().line_thickness;
    if spawn_tracker_lines(physics.world_mut(), entity, thickness).is_none() {
        log::debug!("No bounding box on {entity:?}, skipped tracker lines");
    }
    entity
}
