//! Serializable read-only view of the world
//!
//! Used by the demo runner and determinism tests; not consumed by the step.

use hecs::World;
use serde::{Deserialize, Serialize};

use super::components::{
    Attractor, BoundingBox, BoundingLine, LineEdge, Motion, Player, Role, Transform,
};

/// One entity's records at the end of a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    /// `hecs::Entity::to_bits`, stable for the entity's lifetime
    pub id: u64,
    pub transform: Transform,
    /// Present only for moving entities
    pub role: Option<Role>,
    pub motion: Option<Motion>,
    pub attractor: Option<Attractor>,
    pub bounding_box: Option<BoundingBox>,
    pub line_edge: Option<LineEdge>,
}

/// Every placed entity, ordered by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub entities: Vec<EntitySnapshot>,
    /// Collision events waiting to be drained
    pub pending_collisions: usize,
}

impl WorldSnapshot {
    pub fn find(&self, id: u64) -> Option<&EntitySnapshot> {
        self.entities.iter().find(|e| e.id == id)
    }
}

pub fn build_snapshot(world: &World, tick: u64, pending_collisions: usize) -> WorldSnapshot {
    let mut entities: Vec<EntitySnapshot> = world
        .query::<(
            &Transform,
            Option<&Motion>,
            Option<&Player>,
            Option<&Attractor>,
            Option<&BoundingBox>,
            Option<&BoundingLine>,
        )>()
        .iter()
        .map(|(entity, (transform, motion, player, attractor, bbox, line))| EntitySnapshot {
            id: entity.to_bits().get(),
            transform: *transform,
            role: motion.map(|_| Role::classify(player.is_some(), attractor.is_some())),
            motion: motion.copied(),
            attractor: attractor.copied(),
            bounding_box: bbox.copied(),
            line_edge: line.map(|l| l.edge),
        })
        .collect();
    entities.sort_by_key(|e| e.id);

    WorldSnapshot {
        tick,
        entities,
        pending_collisions,
    }
}
