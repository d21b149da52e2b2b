//! Damage pipeline: applies a shot to its target through every damage modifier.

use hecs::{Entity, World};
use tracing::trace;

use bulwark_core::components::Health;
use bulwark_core::constants::FULL_DAMAGE_PERCENT;
use bulwark_core::damage::{apply_percentage_modifiers, Warhead};
use bulwark_core::events::SimEvent;
use bulwark_core::types::UnitId;
use bulwark_mount::{DamageModifier, PopupMount};

/// A resolved hit, waiting to be applied.
#[derive(Debug, Clone, Copy)]
pub struct Shot {
    pub attacker: Entity,
    pub attacker_unit: UnitId,
    pub target: Entity,
    pub target_unit: UnitId,
    pub warhead: Warhead,
}

/// Percentage modifiers the target applies to this shot.
fn damage_modifiers(world: &World, shot: &Shot) -> Vec<i32> {
    let mut modifiers = Vec::new();
    if let Ok(mount) = world.get::<&PopupMount>(shot.target) {
        modifiers.push(mount.damage_modifier(&shot.attacker, &shot.warhead));
    }
    modifiers
}

/// Fire `shot`: emit the firing event, then apply modified damage.
/// Targets already at zero hit points are left alone.
pub fn apply(world: &mut World, shot: &Shot, events: &mut Vec<SimEvent>) {
    events.push(SimEvent::WeaponFired {
        attacker: shot.attacker_unit,
        target: shot.target_unit,
    });

    let modifiers = damage_modifiers(world, shot);
    let amount = apply_percentage_modifiers(shot.warhead.damage, modifiers.iter().copied());
    let modifier = apply_percentage_modifiers(FULL_DAMAGE_PERCENT, modifiers.iter().copied());

    let Ok(mut health) = world.get::<&mut Health>(shot.target) else {
        return;
    };
    if health.hp <= 0 {
        return;
    }
    health.hp = (health.hp - amount).clamp(0, health.max_hp);
    trace!(
        attacker = ?shot.attacker_unit,
        target = ?shot.target_unit,
        amount,
        modifier,
        hp = health.hp,
        "damage applied"
    );
    events.push(SimEvent::DamageTaken {
        unit: shot.target_unit,
        amount,
        modifier,
    });
}
