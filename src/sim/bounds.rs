//! Bounding box and debug line maintenance
//!
//! Reads: `Transform` of boxed entities, `BoundingLine`.
//! Writes: `BoundingBox`, `Transform` of line entities; despawns orphaned lines.

use glam::Vec2;
use hecs::{Entity, World};

use super::components::{BoundingBox, BoundingLine, LineEdge, Transform};
use super::geometry::rotated_aabb;

/// Run the maintenance phase. Returns the number of orphaned lines removed.
pub fn run(world: &mut World, line_thickness: f32, despawn_buffer: &mut Vec<Entity>) -> usize {
    refresh_boxes(world);
    refresh_lines(world, line_thickness, despawn_buffer)
}

/// Recompute every bounding box from its entity's current transform
pub fn refresh_boxes(world: &mut World) {
    for (_entity, (transform, bbox)) in world.query_mut::<(&Transform, &mut BoundingBox)>() {
        *bbox = compute_box(transform);
    }
}

/// Bounding box of a transform, rotation included
pub fn compute_box(transform: &Transform) -> BoundingBox {
    let aabb = rotated_aabb(transform.position, transform.angle, transform.scale);
    BoundingBox {
        size: aabb.size,
        center: aabb.center,
    }
}

/// Move each debug line onto its owner's box edge
///
/// Lines whose owner no longer has a bounding box are despawned here, lazily,
/// rather than when the owner goes away.
pub fn refresh_lines(
    world: &mut World,
    line_thickness: f32,
    despawn_buffer: &mut Vec<Entity>,
) -> usize {
    despawn_buffer.clear();

    let lines: Vec<(Entity, BoundingLine)> = world
        .query::<&BoundingLine>()
        .iter()
        .map(|(entity, line)| (entity, *line))
        .collect();

    for (entity, line) in lines {
        let owner_box = world.get::<&BoundingBox>(line.owner).map(|bbox| *bbox);
        let Ok(bbox) = owner_box else {
            despawn_buffer.push(entity);
            continue;
        };
        if let Ok(mut transform) = world.get::<&mut Transform>(entity) {
            *transform = line_transform(line.edge, &bbox, line_thickness);
        }
    }

    let removed = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    if removed > 0 {
        log::debug!("Removed {removed} orphaned bounding lines");
    }
    removed
}

/// Placement of a debug line tracing one edge of `bbox`
pub fn line_transform(edge: LineEdge, bbox: &BoundingBox, thickness: f32) -> Transform {
    let half = bbox.size / 2.0;
    let (offset, scale) = match edge {
        LineEdge::Top => (Vec2::new(0.0, -half.y), Vec2::new(bbox.size.x, thickness)),
        LineEdge::Bottom => (Vec2::new(0.0, half.y), Vec2::new(bbox.size.x, thickness)),
        LineEdge::Left => (Vec2::new(-half.x, 0.0), Vec2::new(thickness, bbox.size.y)),
        LineEdge::Right => (Vec2::new(half.x, 0.0), Vec2::new(thickness, bbox.size.y)),
    };
    Transform::new(bbox.center + offset, 0.0, scale)
}

/// Spawn the four lines tracing `owner`'s bounding box
///
/// Returns `None` when `owner` has no bounding box yet.
pub fn spawn_tracker_lines(
    world: &mut World,
    owner: Entity,
    line_thickness: f32,
) -> Option<[Entity; 4]> {
    let bbox = world.get::<&BoundingBox>(owner).map(|bbox| *bbox).ok()?;
    Some(LineEdge::ALL.map(|edge| {
        let placement = line_transform(edge, &bbox, line_thickness);
        world.spawn((placement, BoundingLine { owner, edge }))
    }))
}
