//! Undertow headless runner
//!
//! Spawns a seeded scene, steps it at a fixed frame time and prints the final
//! world as JSON.
//!
//! Usage: `undertow [seed] [ticks] [config.json]`

use std::process::ExitCode;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use undertow::sim::{spawn_eel, spawn_fish, spawn_puffer, spawn_salmon, spawn_whirlpool};
use undertow::{PhysicsWorld, SimConfig};

/// Fixed frame time (ms)
const FRAME_MS: f32 = 16.0;

const ARENA_WIDTH: f32 = 1200.0;
const ARENA_HEIGHT: f32 = 800.0;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let ticks: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(600);

    let config = match args.next() {
        Some(path) => match SimConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => SimConfig::default(),
    };

    log::info!("Undertow starting with seed {seed}, {ticks} ticks");

    let mut physics = PhysicsWorld::new(config);
    let mut rng = Pcg32::seed_from_u64(seed);
    populate(&mut physics, &mut rng);

    let mut total_events = 0usize;
    for _ in 0..ticks {
        physics.step(FRAME_MS);
        // Stand-in for the gameplay rules: consume and count
        total_events += physics.drain_collisions().len();
    }

    log::info!(
        "Ran {} ticks, {} collision events, {} entities",
        physics.tick_count(),
        total_events,
        physics.world().len()
    );

    match serde_json::to_string_pretty(&physics.snapshot()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to serialize snapshot: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Salmon in the middle, prey and eels entering from the right, puffers from
/// the bottom and one whirlpool somewhere inside
fn populate(physics: &mut PhysicsWorld, rng: &mut Pcg32) {
    spawn_salmon(physics, Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0));

    for _ in 0..5 {
        let y = ARENA_HEIGHT * rng.random::<f32>();
        spawn_fish(physics, Vec2::new(ARENA_WIDTH + 50.0, y));
    }
    for _ in 0..8 {
        let y = ARENA_HEIGHT * rng.random::<f32>();
        spawn_eel(physics, Vec2::new(ARENA_WIDTH + 50.0, y));
    }
    for _ in 0..3 {
        let x = ARENA_WIDTH * rng.random::<f32>();
        let turn = rng.random::<f32>() - 0.5;
        let strength = rng.random::<f32>();
        spawn_puffer(physics, Vec2::new(x, ARENA_HEIGHT), turn, strength);
    }

    let whirl_pos = Vec2::new(
        (ARENA_WIDTH - 100.0) * rng.random::<f32>() + 50.0,
        (ARENA_HEIGHT - 70.0) * rng.random::<f32>() + 35.0,
    );
    spawn_whirlpool(physics, whirl_pos, rng.random::<f32>() + 0.25);
}
