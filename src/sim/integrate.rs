//! Motion integration
//!
//! Reads: `Transform::angle`, `Motion::external_velocity`, `Player`, `Attractor`.
//! Writes: `Motion::velocity`, `Motion::acceleration`, `Transform::position`.
//!
//! Must run after the force phase has rebuilt `external_velocity`.

use glam::Vec2;
use hecs::World;

use super::components::{Attractor, Motion, Player, Role, Transform};
use crate::rotate_to_world;

/// Integrate every moving entity over `elapsed_ms`
pub fn run(world: &mut World, elapsed_ms: f32) {
    let dt = elapsed_ms / 1000.0;

    for (_entity, (transform, motion, player, attractor)) in world.query_mut::<(
        &mut Transform,
        &mut Motion,
        Option<&Player>,
        Option<&Attractor>,
    )>() {
        let role = Role::classify(player.is_some(), attractor.is_some());
        integrate(transform, motion, role, dt);
    }
}

/// Advance a single entity by `dt` seconds
pub fn integrate(transform: &mut Transform, motion: &mut Motion, role: Role, dt: f32) {
    // Heading is sampled before anything moves this tick
    let heading = transform.angle;

    if role.self_steers() {
        motion.acceleration = steer(motion.velocity, motion.acceleration, motion.initial_sign);
        motion.velocity += motion.acceleration * dt;
    }

    let world_velocity = rotate_to_world(motion.velocity, heading) + motion.external_velocity;
    transform.position += world_velocity * dt;
}

/// Re-aim `acceleration` perpendicular to `velocity`, keeping its magnitude
///
/// `initial_sign` picks the turning sense. With zero velocity there is no
/// perpendicular, so the previous acceleration is kept as is.
pub fn steer(velocity: Vec2, acceleration: Vec2, initial_sign: f32) -> Vec2 {
    let magnitude = acceleration.length();
    let perpendicular = initial_sign * velocity.perp();

    match perpendicular.try_normalize() {
        Some(direction) => direction * magnitude,
        None => acceleration,
    }
}
