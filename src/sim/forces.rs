//! Whirlpool attractor model
//!
//! Reads: `Transform`, `Attractor`. Writes: `Transform::angle` of attractors,
//! `Motion::external_velocity` of every moving entity.
//!
//! The pull is a step function: constant magnitude inside the radius, nothing
//! outside it. Attractors never pull on each other.

use glam::Vec2;
use hecs::World;

use super::components::{Attractor, Motion, Transform};
use crate::wrap_angle;

/// Run the force phase: spin whirlpools, then rebuild every external velocity
pub fn run(world: &mut World, elapsed_ms: f32, spin_rate: f32) {
    spin_attractors(world, elapsed_ms, spin_rate);
    accumulate_external(world);
}

/// Advance each attractor's own orientation by `spin_rate × elapsed_ms`
pub fn spin_attractors(world: &mut World, elapsed_ms: f32, spin_rate: f32) {
    for (_entity, (transform, _attractor)) in world.query_mut::<(&mut Transform, &Attractor)>() {
        transform.angle = wrap_angle(transform.angle + spin_rate * elapsed_ms);
    }
}

/// Overwrite `external_velocity` on every moving entity with this tick's pull
pub fn accumulate_external(world: &mut World) {
    let attractors: Vec<(Vec2, Attractor)> = world
        .query::<(&Transform, &Attractor)>()
        .iter()
        .map(|(_entity, (transform, attractor))| (transform.position, *attractor))
        .collect();

    for (_entity, (transform, motion, own_attractor)) in
        world.query_mut::<(&Transform, &mut Motion, Option<&Attractor>)>()
    {
        motion.external_velocity = if attractors.is_empty() || own_attractor.is_some() {
            Vec2::ZERO
        } else {
            net_pull(transform.position, &attractors)
        };
    }
}

/// Sum of pulls from every attractor in range of `position`
pub fn net_pull(position: Vec2, attractors: &[(Vec2, Attractor)]) -> Vec2 {
    attractors
        .iter()
        .map(|(center, attractor)| pull(position, *center, attractor))
        .sum()
}

/// Pull of a single attractor: `force` toward its center when strictly inside `radius`
///
/// Coincident positions have no direction and yield zero.
#[inline]
pub fn pull(position: Vec2, center: Vec2, attractor: &Attractor) -> Vec2 {
    let diff = position - center;
    if diff.length() < attractor.radius {
        -diff.normalize_or_zero() * attractor.force
    } else {
        Vec2::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::components::Player;

    fn whirl(force: f32, radius: f32) -> Attractor {
        Attractor { force, radius }
    }

    fn spawn_mover(world: &mut World, position: Vec2) -> hecs::Entity {
        world.spawn((
            Transform::new(position, 0.0, Vec2::splat(20.0)),
            Motion::default(),
        ))
    }

    fn external(world: &World, entity: hecs::Entity) -> Vec2 {
        world.get::<&Motion>(entity).unwrap().external_velocity
    }

    #[test]
    fn test_pull_points_at_center() {
        let p = pull(Vec2::new(50.0, 0.0), Vec2::ZERO, &whirl(50.0, 100.0));
        assert!((p - Vec2::new(-50.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_pull_outside_radius() {
        let p = pull(Vec2::new(100.0, 0.0), Vec2::ZERO, &whirl(50.0, 100.0));
        assert_eq!(p, Vec2::ZERO);
    }

    #[test]
    fn test_pull_coincident_is_zero() {
        let p = pull(Vec2::new(3.0, 4.0), Vec2::new(3.0, 4.0), &whirl(50.0, 100.0));
        assert_eq!(p, Vec2::ZERO);
        assert!(!p.is_nan());
    }

    #[test]
    fn test_pull_magnitude_independent_of_distance() {
        let near = pull(Vec2::new(5.0, 0.0), Vec2::ZERO, &whirl(30.0, 100.0));
        let far = pull(Vec2::new(0.0, 95.0), Vec2::ZERO, &whirl(30.0, 100.0));
        assert!((near.length() - 30.0).abs() < 1e-4);
        assert!((far.length() - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_contributions_sum() {
        let attractors = [
            (Vec2::new(-10.0, 0.0), whirl(20.0, 100.0)),
            (Vec2::new(0.0, 10.0), whirl(5.0, 100.0)),
        ];
        let total = net_pull(Vec2::ZERO, &attractors);
        assert!((total - Vec2::new(-20.0, 5.0)).length() < 1e-4);
    }

    #[test]
    fn test_no_attractors_zeroes_external() {
        let mut world = World::new();
        let e = spawn_mover(&mut world, Vec2::new(10.0, 10.0));
        world.get::<&mut Motion>(e).unwrap().external_velocity = Vec2::new(7.0, 7.0);

        accumulate_external(&mut world);
        assert_eq!(external(&world, e), Vec2::ZERO);
    }

    #[test]
    fn test_external_is_overwritten_not_accumulated() {
        let mut world = World::new();
        world.spawn((Transform::new(Vec2::ZERO, 0.0, Vec2::splat(120.0)), whirl(50.0, 100.0)));
        let e = spawn_mover(&mut world, Vec2::new(50.0, 0.0));

        accumulate_external(&mut world);
        accumulate_external(&mut world);
        assert!((external(&world, e) - Vec2::new(-50.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_attractor_ignores_other_attractors() {
        let mut world = World::new();
        world.spawn((Transform::new(Vec2::ZERO, 0.0, Vec2::splat(120.0)), whirl(50.0, 500.0)));
        let other = world.spawn((
            Transform::new(Vec2::new(40.0, 0.0), 0.0, Vec2::splat(120.0)),
            Motion::default(),
            whirl(50.0, 500.0),
        ));

        accumulate_external(&mut world);
        assert_eq!(external(&world, other), Vec2::ZERO);
    }

    #[test]
    fn test_player_is_pulled() {
        let mut world = World::new();
        world.spawn((Transform::new(Vec2::ZERO, 0.0, Vec2::splat(120.0)), whirl(40.0, 100.0)));
        let player = world.spawn((
            Transform::new(Vec2::new(0.0, 30.0), 0.0, Vec2::splat(20.0)),
            Motion::default(),
            Player,
        ));

        accumulate_external(&mut world);
        assert!((external(&world, player) - Vec2::new(0.0, -40.0)).length() < 1e-4);
    }

    #[test]
    fn test_spin_wraps() {
        let mut world = World::new();
        let e = world.spawn((
            Transform::new(Vec2::ZERO, std::f32::consts::TAU - 0.001, Vec2::ONE),
            whirl(1.0, 1.0),
        ));

        spin_attractors(&mut world, 20.0, 0.0001);
        let angle = world.get::<&Transform>(e).unwrap().angle;
        assert!((0.0..std::f32::consts::TAU).contains(&angle));
        assert!((angle - 0.001).abs() < 1e-4);
    }
}
