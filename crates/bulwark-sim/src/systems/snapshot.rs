//! Snapshot system: builds the serialisable per-tick view of the world.

use hecs::World;

use bulwark_core::components::{Building, Health, Raider};
use bulwark_core::events::SimEvent;
use bulwark_core::state::{MountView, RaiderView, SimSnapshot};
use bulwark_core::types::{Position, SimTime, UnitId};
use bulwark_mount::{Aiming, PopupMount};

use crate::animation::ClipPlayer;
use crate::turret::Turret;

pub fn build_snapshot(world: &World, time: &SimTime, paused: bool, events: Vec<SimEvent>) -> SimSnapshot {
    let mut mounts: Vec<MountView> = {
        let mut query =
            world.query::<(&UnitId, &Position, &PopupMount, &Turret, &ClipPlayer, &Building, &Health)>();
        query
            .iter()
            .map(|(_, (unit, position, mount, turret, player, building, health))| MountView {
                unit: *unit,
                position: *position,
                state: mount.state(),
                idle_ticks: mount.idle_ticks(),
                facing: turret.current_facing(),
                desired_facing: turret.desired_facing(),
                clip: player.looping(),
                pending_clip: player.pending(),
                build_complete: building.build_complete,
                hp: health.hp,
                max_hp: health.max_hp,
            })
            .collect()
    };
    mounts.sort_by_key(|view| view.unit);

    let mut raiders: Vec<RaiderView> = {
        let mut query = world.query::<(&Raider, &UnitId, &Position, &Health)>();
        query
            .iter()
            .map(|(_, (_, unit, position, health))| RaiderView {
                unit: *unit,
                position: *position,
                hp: health.hp,
                max_hp: health.max_hp,
            })
            .collect()
    };
    raiders.sort_by_key(|view| view.unit);

    SimSnapshot {
        time: *time,
        paused,
        mounts,
        raiders,
        events,
    }
}
