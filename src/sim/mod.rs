//! Per-tick simulation core
//!
//! Everything here is headless and single-threaded:
//! - One `hecs::World` owned by [`PhysicsWorld`]
//! - Phases run in a fixed order inside [`PhysicsWorld::step`]
//! - Stable iteration order for collisions (by entity id)
//! - No rendering, audio or input dependencies

pub mod bounds;
pub mod collision;
pub mod components;
pub mod forces;
pub mod geometry;
pub mod integrate;
pub mod physics;
pub mod snapshot;
pub mod spawn;

pub use collision::{CollisionEvent, CollisionLog, collides};
pub use components::{
    Attractor, BoundingBox, BoundingLine, LineEdge, Motion, Player, Role, Transform,
};
pub use geometry::{Aabb, bounding_extents, rotated_aabb};
pub use physics::PhysicsWorld;
pub use snapshot::{EntitySnapshot, WorldSnapshot};
pub use spawn::{spawn_eel, spawn_fish, spawn_puffer, spawn_salmon, spawn_whirlpool};
