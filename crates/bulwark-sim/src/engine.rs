//! Simulation engine: drives popup turrets tick by tick.
//!
//! `SimulationEngine` owns the hecs ECS world, processes queued commands,
//! runs all systems, and produces `SimSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use bulwark_core::commands::SimCommand;
use bulwark_core::config::UnitDefs;
use bulwark_core::enums::PopupState;
use bulwark_core::events::SimEvent;
use bulwark_core::state::SimSnapshot;
use bulwark_core::types::{Position, SimTime, UnitId};
use bulwark_mount::PopupMount;

use crate::systems;
use crate::systems::raid_spawner::RaidSchedule;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Unit definitions used for every spawn.
    pub defs: UnitDefs,
    /// Scheduled raids. Empty by default.
    pub raids: RaidSchedule,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            defs: UnitDefs::default(),
            raids: RaidSchedule::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    paused: bool,
    rng: ChaCha8Rng,
    defs: UnitDefs,
    raids: RaidSchedule,
    next_unit_id: u32,
    command_queue: VecDeque<SimCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            paused: false,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            defs: config.defs,
            raids: config.raids,
            next_unit_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        for command in commands {
            self.queue_command(command);
        }
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> SimSnapshot {
        self.process_commands();

        if !self.paused {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.paused, events)
    }

    /// Place a popup turret immediately, outside the command queue.
    pub fn spawn_turret(&mut self, position: Position, skip_make_animation: bool) -> UnitId {
        let unit = world_setup::allocate_unit(&mut self.next_unit_id);
        world_setup::spawn_popup_turret(
            &mut self.world,
            &self.defs.popup_turret,
            unit,
            position,
            skip_make_animation,
        );
        unit
    }

    /// Place a raider immediately, outside the command queue.
    pub fn spawn_raider(&mut self, position: Position) -> UnitId {
        let unit = world_setup::allocate_unit(&mut self.next_unit_id);
        world_setup::spawn_raider(&mut self.world, &self.defs.raider, unit, position);
        unit
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Find the entity carrying `unit`, if it is still alive.
    pub fn entity_of(&self, unit: UnitId) -> Option<hecs::Entity> {
        let mut query = self.world.query::<&UnitId>();
        query
            .iter()
            .find(|(_, id)| **id == unit)
            .map(|(entity, _)| entity)
    }

    /// Posture of the popup mount on `unit`, if it has one.
    pub fn mount_state(&self, unit: UnitId) -> Option<PopupState> {
        let entity = self.entity_of(unit)?;
        let mount = self.world.get::<&PopupMount>(entity).ok()?;
        Some(mount.state())
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: SimCommand) {
        debug!(?command, tick = self.time.tick, "processing command");
        match command {
            SimCommand::SpawnTurret {
                position,
                skip_make_animation,
            } => {
                self.spawn_turret(position, skip_make_animation);
            }
            SimCommand::SpawnRaider { position } => {
                self.spawn_raider(position);
            }
            SimCommand::Pause => {
                self.paused = true;
            }
            SimCommand::Resume => {
                self.paused = false;
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Raid spawning
        systems::raid_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.raids,
            &self.defs.raider,
            &mut self.next_unit_id,
            self.time.tick,
        );
        // 2. Construction (make countdown, building_complete)
        systems::construction::run(&mut self.world, &mut self.events);
        // 3. Animation players (completion continuations)
        systems::animation::run(&mut self.world, &mut self.events);
        // 4. Reload countdown
        systems::reload::run(&mut self.world);
        // 5. Turret engagement or idle ticking
        systems::engagement::run(&mut self.world, &mut self.events);
        // 6. Turret rotation
        systems::turret::run(&mut self.world);
        // 7. Raider movement and fire
        systems::raider::run(&mut self.world, &mut self.events);
        // 8. Cleanup (destroyed units)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, &mut self.events);
    }
}
