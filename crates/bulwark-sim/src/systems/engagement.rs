//! Engagement system: the combat pipeline and idle scheduler for popup turrets.
//!
//! Each turret acquires the nearest live raider in weapon range and polls the
//! mount's eligibility query. A turret with nothing to shoot at is idle and
//! ticks the mount's idle timer instead.

use hecs::{Entity, World};

use bulwark_core::components::{Building, Health, Raider};
use bulwark_core::events::SimEvent;
use bulwark_core::types::{Position, UnitId};
use bulwark_mount::PopupMount;

use crate::animation::ClipPlayer;
use crate::turret::Turret;
use crate::weapon::{Armament, MountedWeapon};

use super::damage::{self, Shot};
use super::{nearest_within, note_mount_transition};

pub fn run(world: &mut World, events: &mut Vec<SimEvent>) {
    let raiders: Vec<(Entity, UnitId, Position)> = {
        let mut query = world.query::<(&Raider, &UnitId, &Position, &Health)>();
        query
            .iter()
            .filter(|(_, (_, _, _, health))| health.hp > 0)
            .map(|(entity, (_, unit, position, _))| (entity, *unit, *position))
            .collect()
    };

    let mut shots: Vec<Shot> = Vec::new();
    for (entity, (unit, position, building, mount, turret, player, armament)) in world
        .query_mut::<(
            &UnitId,
            &Position,
            &Building,
            &mut PopupMount,
            &mut Turret,
            &mut ClipPlayer,
            &mut Armament,
        )>()
    {
        let before = mount.state();

        match nearest_within(*position, armament.range, &raiders) {
            None => mount.tick_idle(turret, player),
            Some((target, target_unit, target_position)) => {
                let weapon = MountedWeapon {
                    armament: &*armament,
                    origin: *position,
                };
                if mount.can_attack(&target_position, building.build_complete, &weapon, turret, player) {
                    armament.fire();
                    shots.push(Shot {
                        attacker: entity,
                        attacker_unit: *unit,
                        target,
                        target_unit,
                        warhead: armament.warhead(),
                    });
                }
            }
        }

        note_mount_transition(events, *unit, before, mount.state());
    }

    for shot in &shots {
        damage::apply(world, shot, events);
    }
}
