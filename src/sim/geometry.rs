//! Bounding geometry derived from a transform
//!
//! The AABB is rebuilt from rotated corners every tick; it must never be
//! cached across an angle change.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box around a rotated sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Full width/height
    pub size: Vec2,
    /// World-space center
    pub center: Vec2,
}

/// Unsigned full extents of an entity (scale sign only encodes facing)
#[inline]
pub fn bounding_extents(scale: Vec2) -> Vec2 {
    scale.abs()
}

/// Half of [`bounding_extents`], the radius vector of the collision circle
#[inline]
pub fn half_extents(scale: Vec2) -> Vec2 {
    bounding_extents(scale) / 2.0
}

/// AABB of a box of size `|scale|` centered on `position`, rotated by `angle`
///
/// Corners rotate with `x' = x·c + y·s`, `y' = -x·s + y·c` (+y is down).
pub fn rotated_aabb(position: Vec2, angle: f32, scale: Vec2) -> Aabb {
    let half = half_extents(scale);
    let corners = [
        Vec2::new(-half.x, -half.y),
        Vec2::new(half.x, -half.y),
        Vec2::new(half.x, half.y),
        Vec2::new(-half.x, half.y),
    ];

    let (s, c) = angle.sin_cos();

    let mut min = Vec2::splat(f32::MAX);
    let mut max = Vec2::splat(f32::MIN);
    for corner in corners {
        let rotated = Vec2::new(
            corner.x * c + corner.y * s,
            -corner.x * s + corner.y * c,
        );
        min = min.min(rotated);
        max = max.max(rotated);
    }

    Aabb {
        size: max - min,
        center: position + (min + max) / 2.0,
    }
}
