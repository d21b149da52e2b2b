//! Cleanup system: removes units that have run out of hit points.

use hecs::{Entity, World};
use tracing::debug;

use bulwark_core::components::Health;
use bulwark_core::events::SimEvent;
use bulwark_core::types::UnitId;

/// Despawn every unit at zero hit points.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, events: &mut Vec<SimEvent>) {
    despawn_buffer.clear();

    for (entity, (unit, health)) in world.query_mut::<(&UnitId, &Health)>() {
        if health.hp <= 0 {
            debug!(?unit, "unit destroyed");
            events.push(SimEvent::UnitDestroyed { unit: *unit });
            despawn_buffer.push(entity);
        }
    }

    // Despawn collected entities. A one-shot clip in flight is dropped with its entity.
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
