//! The physics step
//!
//! `PhysicsWorld` owns the entity store and the per-tick collision log and
//! runs the four phases in a fixed order:
//!
//! 1. forces: whirlpools spin, `external_velocity` is rebuilt
//! 2. integrate: velocity and position advance
//! 3. collision: all-pairs sweep over final positions
//! 4. bounds: AABBs and debug lines follow, orphaned lines go away
//!
//! No phase may be reordered; each one reads what the previous wrote.

use hecs::{Entity, World};

use super::collision::{CollisionEvent, CollisionLog};
use super::components::{Motion, Player, Transform};
use super::snapshot::{WorldSnapshot, build_snapshot};
use super::{bounds, collision, forces, integrate};
use crate::config::SimConfig;

/// Entity store plus everything one tick needs
pub struct PhysicsWorld {
    world: World,
    config: SimConfig,
    collisions: CollisionLog,
    despawn_buffer: Vec<Entity>,
    tick_count: u64,
    sweep_warned: bool,
}

impl PhysicsWorld {
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            config,
            collisions: CollisionLog::new(),
            despawn_buffer: Vec::new(),
            tick_count: 0,
            sweep_warned: false,
        }
    }

    /// Read-only access to the store
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access for the spawn and gameplay layers, between ticks only
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Number of completed steps
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Advance the simulation by `elapsed_ms`
    ///
    /// The time slice is clamped into `[0, max_elapsed_ms]`. Collision events
    /// are appended to the log; drain it before the next call.
    ///
    /// # Panics
    /// If a `Player` entity lacks a `Transform` or `Motion`.
    pub fn step(&mut self, elapsed_ms: f32) {
        let elapsed = self.config.clamp_elapsed(elapsed_ms);
        if elapsed != elapsed_ms {
            log::warn!("Tick {}: clamped elapsed time {elapsed_ms}ms to {elapsed}ms", self.tick_count);
        }

        if !self.collisions.is_empty() {
            log::warn!(
                "Tick {}: {} collision events were not drained and will be duplicated",
                self.tick_count,
                self.collisions.len()
            );
        }

        self.assert_players_complete();

        forces::run(&mut self.world, elapsed, self.config.attractor_spin_rate);
        integrate::run(&mut self.world, elapsed);

        let swept = collision::run(&self.world, &mut self.collisions);
        if swept > self.config.sweep_warn_threshold && !self.sweep_warned {
            log::warn!(
                "Collision sweep over {swept} moving entities is O(n²); consider a spatial partition"
            );
            self.sweep_warned = true;
        }

        bounds::run(&mut self.world, self.config.line_thickness, &mut self.despawn_buffer);

        self.tick_count += 1;
    }

    /// Events logged since the last drain
    pub fn collisions(&self) -> &CollisionLog {
        &self.collisions
    }

    /// Everything `entity` hit since the last drain
    pub fn collisions_for(&self, entity: Entity) -> Vec<Entity> {
        self.collisions.hits_of(entity).collect()
    }

    /// Hand the events to the gameplay layer and empty the log
    pub fn drain_collisions(&mut self) -> Vec<CollisionEvent> {
        self.collisions.drain()
    }

    pub fn clear_collisions(&mut self) {
        self.collisions.clear();
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        build_snapshot(&self.world, self.tick_count, self.collisions.len())
    }

    fn assert_players_complete(&self) {
        for (entity, (_player, transform, motion)) in self
            .world
            .query::<(&Player, Option<&Transform>, Option<&Motion>)>()
            .iter()
        {
            assert!(
                transform.is_some() && motion.is_some(),
                "player {entity:?} is missing its Transform or Motion"
            );
        }
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}
