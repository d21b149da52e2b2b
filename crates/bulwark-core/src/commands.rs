//! Commands sent to the simulation from outside.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::types::Position;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    /// Place a popup turret. `skip_make_animation` places it already built.
    SpawnTurret {
        position: Position,
        skip_make_animation: bool,
    },
    /// Place a hostile raider.
    SpawnRaider { position: Position },
    /// Freeze the simulation clock.
    Pause,
    /// Resume a paused simulation.
    Resume,
}
