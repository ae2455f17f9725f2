//! Component records stored in the `hecs` world
//!
//! Plain data only. Per-tick logic lives in the phase modules.

use glam::Vec2;
use hecs::Entity;
use serde::{Deserialize, Serialize};

/// Where an entity sits in the world
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// World-space center
    pub position: Vec2,
    /// Heading in radians (0 = +x)
    pub angle: f32,
    /// Signed extents: sign encodes facing, magnitude is visual size
    pub scale: Vec2,
}

impl Transform {
    pub fn new(position: Vec2, angle: f32, scale: Vec2) -> Self {
        Self {
            position,
            angle,
            scale,
        }
    }
}

/// How an entity moves
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    /// Heading-frame velocity (input from controls, or self-steered)
    pub velocity: Vec2,
    /// Self-steering acceleration; magnitude persists, direction is recomputed
    pub acceleration: Vec2,
    /// World-space pull from whirlpools, rebuilt every tick
    pub external_velocity: Vec2,
    /// ±1, fixes the turning sense of the self-steering law
    pub initial_sign: f32,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            external_velocity: Vec2::ZERO,
            initial_sign: 1.0,
        }
    }
}

impl Motion {
    /// Motion with a fixed heading-frame velocity and no steering
    pub fn with_velocity(velocity: Vec2) -> Self {
        Self {
            velocity,
            ..Default::default()
        }
    }
}

/// Marks the player-controlled entity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player;

/// A whirlpool pulling nearby entities toward its center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Attractor {
    /// Pull strength (pixels/s, independent of distance)
    pub force: f32,
    /// Influence radius (pixels)
    pub radius: f32,
}

/// Rotated axis-aligned bounding box, re-derived every tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Full width/height
    pub size: Vec2,
    /// World-space center
    pub center: Vec2,
}

/// Which AABB edge a debug line traces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineEdge {
    Top,
    Bottom,
    Left,
    Right,
}

impl LineEdge {
    pub const ALL: [LineEdge; 4] = [LineEdge::Top, LineEdge::Bottom, LineEdge::Left, LineEdge::Right];
}

/// Debug line entity tracing one edge of its owner's bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingLine {
    pub owner: Entity,
    pub edge: LineEdge,
}

/// Steering capability, resolved once per entity per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Velocity driven by input
    Player,
    /// Stationary whirlpool; velocity is never steered
    Attractor,
    /// Self-steered by the perpendicular-acceleration law
    Autonomous,
}

impl Role {
    /// Classify from tag presence. Attractor wins if both are present.
    #[inline]
    pub fn classify(is_player: bool, is_attractor: bool) -> Self {
        if is_attractor {
            Role::Attractor
        } else if is_player {
            Role::Player
        } else {
            Role::Autonomous
        }
    }

    #[inline]
    pub fn self_steers(self) -> bool {
        self == Role::Autonomous
    }
}
