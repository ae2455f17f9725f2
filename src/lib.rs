//! Undertow - simulation core of an underwater arcade game
//!
//! Core modules:
//! - `sim`: Per-tick physics (whirlpool forces, integration, collisions, bounding boxes)
//! - `config`: Data-driven simulation tuning

pub mod config;
pub mod sim;

pub use config::{ConfigError, SimConfig};
pub use sim::{CollisionEvent, CollisionLog, PhysicsWorld};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Whirlpool self-rotation rate (radians per millisecond)
    pub const ATTRACTOR_SPIN_RATE: f32 = 0.0001;
    /// Largest time slice a single tick will integrate (milliseconds)
    pub const MAX_ELAPSED_MS: f32 = 250.0;
    /// Width of the debug lines tracing a bounding box (pixels)
    pub const LINE_THICKNESS: f32 = 10.0;
    /// Moving-entity count above which the all-pairs sweep gets expensive
    pub const SWEEP_WARN_THRESHOLD: usize = 256;

    /// Bounding box sizes, hardcoded to the sprite texture dimensions
    pub const FISH_BB_WIDTH: f32 = 0.6 * 165.0;
    pub const FISH_BB_HEIGHT: f32 = 0.6 * 165.0;
    pub const EEL_BB_WIDTH: f32 = 0.6 * 300.0;
    pub const EEL_BB_HEIGHT: f32 = 0.6 * 202.0;
    pub const WHIRL_BB_WIDTH: f32 = 0.6 * 200.0;
    pub const WHIRL_BB_HEIGHT: f32 = 0.6 * 200.0;
    pub const SALMON_BB_WIDTH: f32 = 0.6 * 150.0;
    pub const SALMON_BB_HEIGHT: f32 = 0.6 * 90.0;

    /// Cruise speeds (pixels/s, in the entity's local frame)
    pub const FISH_SPEED: f32 = 50.0;
    pub const EEL_SPEED: f32 = 100.0;
    pub const PUFFER_RISE_SPEED: f32 = 300.0;
    /// Peak steering acceleration of a pufferfish (pixels/s²)
    pub const PUFFER_MAX_ACCEL: f32 = 300.0;

    /// Whirlpool pull before size scaling (pixels/s)
    pub const WHIRL_FORCE: f32 = 150.0;
    /// Whirlpool influence radius before size scaling (pixels)
    pub const WHIRL_RADIUS: f32 = 300.0;
}

/// Rotate a heading-frame vector into world space
///
/// `(c·x - s·y, s·x + c·y)`, the transpose of the rotation used for AABBs in
/// [`sim::geometry::rotated_aabb`].
#[inline]
pub fn rotate_to_world(v: Vec2, angle: f32) -> Vec2 {
    glam::Mat2::from_angle(angle) * v
}

/// Wrap an angle into [0, 2π)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    angle.rem_euclid(std::f32::consts::TAU)
}
