//! Raid spawning system: spawns raiders at scheduled times.

use hecs::World;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use bulwark_core::config::RaiderDef;

use crate::world_setup;

/// A single raid definition.
#[derive(Debug, Clone)]
pub struct RaidEntry {
    /// Tick at which this raid spawns.
    pub spawn_at_tick: u64,
    /// Number of raiders.
    pub count: u32,
    /// Whether this raid has already been spawned.
    pub spawned: bool,
}

/// Raid schedule for a scenario.
#[derive(Debug, Clone, Default)]
pub struct RaidSchedule {
    pub raids: Vec<RaidEntry>,
}

impl RaidSchedule {
    /// Default 3-raid scenario, spaced so turrets have time to close in between.
    pub fn default_scenario() -> Self {
        Self {
            raids: vec![
                RaidEntry {
                    spawn_at_tick: 50,
                    count: 1,
                    spawned: false,
                },
                RaidEntry {
                    spawn_at_tick: 1_000, // 40 seconds
                    count: 2,
                    spawned: false,
                },
                RaidEntry {
                    spawn_at_tick: 2_000, // 80 seconds
                    count: 2,
                    spawned: false,
                },
            ],
        }
    }

    /// Total number of raiders across all raids.
    pub fn total_raiders(&self) -> u32 {
        self.raids.iter().map(|raid| raid.count).sum()
    }
}

/// Check schedule and spawn any due raids.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    schedule: &mut RaidSchedule,
    raider: &RaiderDef,
    next_unit_id: &mut u32,
    current_tick: u64,
) {
    for raid in &mut schedule.raids {
        if !raid.spawned && current_tick >= raid.spawn_at_tick {
            info!(tick = current_tick, count = raid.count, "raid inbound");
            for _ in 0..raid.count {
                let unit = world_setup::allocate_unit(next_unit_id);
                world_setup::spawn_raider_on_ring(world, rng, raider, unit);
            }
            raid.spawned = true;
        }
    }
}
