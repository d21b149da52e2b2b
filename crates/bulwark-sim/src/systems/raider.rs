//! Raider system: raiders close on the nearest popup turret and fire when in range.

use hecs::{Entity, World};

use bulwark_core::components::{Health, Mobile, PopupTurret, Raider};
use bulwark_core::constants::RAIDER_STANDOFF_MARGIN;
use bulwark_core::events::SimEvent;
use bulwark_core::types::{Position, UnitId};

use crate::weapon::Armament;

use super::damage::{self, Shot};
use super::nearest_within;

pub fn run(world: &mut World, events: &mut Vec<SimEvent>) {
    let turrets: Vec<(Entity, UnitId, Position)> = {
        let mut query = world.query::<(&PopupTurret, &UnitId, &Position, &Health)>();
        query
            .iter()
            .filter(|(_, (_, _, _, health))| health.hp > 0)
            .map(|(entity, (_, unit, position, _))| (entity, *unit, *position))
            .collect()
    };

    let mut shots: Vec<Shot> = Vec::new();
    for (entity, (_raider, unit, position, mobile, armament, health)) in world.query_mut::<(
        &Raider,
        &UnitId,
        &mut Position,
        &Mobile,
        &mut Armament,
        &Health,
    )>() {
        if health.hp <= 0 {
            continue;
        }
        let Some((target, target_unit, target_position)) =
            nearest_within(*position, f64::INFINITY, &turrets)
        else {
            continue;
        };

        let distance = position.distance(target_position);
        if distance > armament.range {
            let standoff = (armament.range - RAIDER_STANDOFF_MARGIN).max(0.0);
            let step = mobile.speed.min(distance - standoff);
            *position += (target_position - *position).normalize_or_zero() * step;
        }

        if !armament.is_reloading() && armament.in_range(*position, target_position) {
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

    for shot in &shots {
        damage::apply(world, shot, events);
    }
}
