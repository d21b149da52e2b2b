//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Components that carry behaviour (turret, clip player, armament) live in
//! the simulation crate next to the traits they implement.

use serde::{Deserialize, Serialize};

/// Hit points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub hp: i32,
    pub max_hp: i32,
}

/// Construction lifecycle of a building.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Building {
    /// Set once the make animation has finished (or was skipped).
    pub build_complete: bool,
    /// Ticks of make animation left. Zero for a building placed pre-built.
    pub make_ticks_remaining: u32,
}

/// Ground movement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mobile {
    /// Meters per tick.
    pub speed: f64,
}

/// Marks an entity as a popup turret building.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PopupTurret;

/// Marks an entity as a hostile raider.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Raider;
