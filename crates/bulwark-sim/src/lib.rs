//! Simulation engine for BULWARK.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces `SimSnapshot`s. Supplies the collaborators a popup mount
//! needs: turret aiming, clip playback, construction, weapons, and damage.

pub mod animation;
pub mod engine;
pub mod systems;
pub mod turret;
pub mod weapon;
pub mod world_setup;

pub use bulwark_core as core;
pub use engine::{SimConfig, SimulationEngine};
