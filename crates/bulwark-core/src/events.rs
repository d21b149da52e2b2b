//! Events emitted by the simulation for presentation and logging.

use serde::{Deserialize, Serialize};

use crate::enums::PopupState;
use crate::types::UnitId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A popup mount changed posture.
    MountStateChanged {
        unit: UnitId,
        from: PopupState,
        to: PopupState,
    },
    /// A unit fired its weapon.
    WeaponFired { attacker: UnitId, target: UnitId },
    /// A unit lost hit points. `modifier` is the combined percentage applied.
    DamageTaken {
        unit: UnitId,
        amount: i32,
        modifier: i32,
    },
    /// A unit reached zero hit points and was removed.
    UnitDestroyed { unit: UnitId },
}
