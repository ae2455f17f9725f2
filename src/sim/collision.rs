//! Broad-phase collision detection
//!
//! Each entity gets a circle through the corners of its unrotated half-extent
//! box. A pair collides when the center distance is inside the LARGER of the
//! two circles (not their sum).
//!
//! The sweep is all-pairs, O(n²) in moving entities. Any replacement must
//! report the same pairs.
//!
//! Reads: `Transform` of every moving entity. Writes: the [`CollisionLog`].

use glam::Vec2;
use hecs::{Entity, World};

use super::components::{Motion, Transform};
use super::geometry::half_extents;

/// One direction of a colliding pair: `entity` touched `other` this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEvent {
    pub entity: Entity,
    pub other: Entity,
}

/// Append-only per-tick event buffer
///
/// Every colliding pair {A, B} is logged as both (A, B) and (B, A). The
/// consumer drains it between ticks.
#[derive(Debug, Clone, Default)]
pub struct CollisionLog {
    events: Vec<CollisionEvent>,
}

impl CollisionLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Record a colliding pair in both directions
    pub fn push_pair(&mut self, a: Entity, b: Entity) {
        self.events.push(CollisionEvent { entity: a, other: b });
        self.events.push(CollisionEvent { entity: b, other: a });
    }

    pub fn events(&self) -> &[CollisionEvent] {
        &self.events
    }

    pub fn iter(&self) -> impl Iterator<Item = &CollisionEvent> {
        self.events.iter()
    }

    /// Everything `entity` hit since the last drain
    pub fn hits_of(&self, entity: Entity) -> impl Iterator<Item = Entity> + '_ {
        self.events
            .iter()
            .filter(move |e| e.entity == entity)
            .map(|e| e.other)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take all events, leaving the log empty
    pub fn drain(&mut self) -> Vec<CollisionEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

/// Snapshot of what the sweep needs from one moving entity
#[derive(Debug, Clone, Copy)]
pub struct Collider {
    pub entity: Entity,
    pub position: Vec2,
    /// Squared radius of the bounding circle
    pub radius_sq: f32,
}

impl Collider {
    pub fn new(entity: Entity, transform: &Transform) -> Self {
        let half = half_extents(transform.scale);
        Self {
            entity,
            position: transform.position,
            radius_sq: half.dot(half),
        }
    }
}

/// Conservative circle overlap of two colliders
#[inline]
pub fn collides(a: &Collider, b: &Collider) -> bool {
    let dist_sq = a.position.distance_squared(b.position);
    let r_sq = a.radius_sq.max(b.radius_sq);
    dist_sq < r_sq
}

/// Moving entities (`Transform` + `Motion`), ordered by entity id
pub fn gather(world: &World) -> Vec<Collider> {
    let mut colliders: Vec<Collider> = world
        .query::<(&Transform, &Motion)>()
        .iter()
        .map(|(entity, (transform, _motion))| Collider::new(entity, transform))
        .collect();
    colliders.sort_by_key(|c| c.entity.id());
    colliders
}

/// Visit each unordered pair once and log every overlap
pub fn sweep(colliders: &[Collider], log: &mut CollisionLog) {
    for (i, a) in colliders.iter().enumerate() {
        // j starts past i: every pair once, never self
        for b in &colliders[i + 1..] {
            if collides(a, b) {
                log.push_pair(a.entity, b.entity);
            }
        }
    }
}

/// Run the collision phase. Returns how many moving entities were swept.
pub fn run(world: &World, log: &mut CollisionLog) -> usize {
    let colliders = gather(world);
    sweep(&colliders, log);
    colliders.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_mover(world: &mut World, position: Vec2, scale: Vec2) -> Entity {
        world.spawn((Transform::new(position, 0.0, scale), Motion::default()))
    }

    #[test]
    fn test_overlap_uses_larger_circle() {
        let mut world = World::new();
        let a = spawn_mover(&mut world, Vec2::ZERO, Vec2::splat(20.0));
        let b = spawn_mover(&mut world, Vec2::new(10.0, 0.0), Vec2::splat(20.0));

        let mut log = CollisionLog::new();
        run(&world, &mut log);
        assert_eq!(log.len(), 2);
        assert_eq!(log.hits_of(a).collect::<Vec<_>>(), vec![b]);
        assert_eq!(log.hits_of(b).collect::<Vec<_>>(), vec![a]);
    }

    #[test]
    fn test_far_apart_no_event() {
        let mut world = World::new();
        spawn_mover(&mut world, Vec2::ZERO, Vec2::splat(20.0));
        spawn_mover(&mut world, Vec2::new(100.0, 0.0), Vec2::splat(20.0));

        let mut log = CollisionLog::new();
        run(&world, &mut log);
        assert!(log.is_empty());
    }

    #[test]
    fn test_asymmetric_sizes() {
        // Small entity inside the big one's circle but far outside its own
        let mut world = World::new();
        spawn_mover(&mut world, Vec2::ZERO, Vec2::splat(200.0));
        spawn_mover(&mut world, Vec2::new(120.0, 0.0), Vec2::splat(2.0));

        let mut log = CollisionLog::new();
        run(&world, &mut log);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_negative_scale_same_circle() {
        let t = Transform::new(Vec2::ZERO, 0.0, Vec2::new(-20.0, 20.0));
        let c = Collider::new(Entity::DANGLING, &t);
        assert_eq!(c.radius_sq, 200.0);
    }

    #[test]
    fn test_boundary_is_not_a_hit() {
        let a = Collider {
            entity: Entity::DANGLING,
            position: Vec2::ZERO,
            radius_sq: 100.0,
        };
        let b = Collider {
            position: Vec2::new(10.0, 0.0),
            ..a
        };
        assert!(!collides(&a, &b));
    }

    #[test]
    fn test_static_entities_are_ignored() {
        // Bounding lines have a Transform but no Motion
        let mut world = World::new();
        spawn_mover(&mut world, Vec2::ZERO, Vec2::splat(20.0));
        world.spawn((Transform::new(Vec2::ZERO, 0.0, Vec2::splat(20.0)),));

        let mut log = CollisionLog::new();
        assert_eq!(run(&world, &mut log), 1);
        assert!(log.is_empty());
    }

    #[test]
    fn test_each_pair_once() {
        let mut world = World::new();
        for i in 0..4 {
            spawn_mover(&mut world, Vec2::new(i as f32, 0.0), Vec2::splat(50.0));
        }

        let mut log = CollisionLog::new();
        run(&world, &mut log);
        // C(4, 2) pairs, two directions each
        assert_eq!(log.len(), 12);
    }

    #[test]
    fn test_drain_empties_log() {
        let mut world = World::new();
        spawn_mover(&mut world, Vec2::ZERO, Vec2::splat(20.0));
        spawn_mover(&mut world, Vec2::ZERO, Vec2::splat(20.0));

        let mut log = CollisionLog::new();
        run(&world, &mut log);
        let drained = log.drain();
        assert_eq!(drained.len(), 2);
        assert!(log.is_empty());
    }
}
