//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state. All state lives in components.

pub mod animation;
pub mod cleanup;
pub mod construction;
pub mod damage;
pub mod engagement;
pub mod raid_spawner;
pub mod raider;
pub mod reload;
pub mod snapshot;
pub mod turret;

use bulwark_core::enums::PopupState;
use bulwark_core::events::SimEvent;
use bulwark_core::types::{Position, UnitId};

/// Emit a `MountStateChanged` event if the posture moved.
fn note_mount_transition(events: &mut Vec<SimEvent>, unit: UnitId, from: PopupState, to: PopupState) {
    if from != to {
        events.push(SimEvent::MountStateChanged { unit, from, to });
    }
}

/// Nearest candidate within `range` of `origin`. Ties go to the lowest unit id.
fn nearest_within<T: Copy>(
    origin: Position,
    range: f64,
    candidates: &[(T, UnitId, Position)],
) -> Option<(T, UnitId, Position)> {
    candidates
        .iter()
        .copied()
        .filter(|(_, _, position)| origin.distance(*position) <= range)
        .min_by(|a, b| {
            origin
                .distance_squared(a.2)
                .total_cmp(&origin.distance_squared(b.2))
                .then(a.1.cmp(&b.1))
        })
}
