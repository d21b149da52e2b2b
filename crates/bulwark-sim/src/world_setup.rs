//! Entity spawn factories for setting up the simulation world.
//!
//! Creates popup turrets and raiders with appropriate component bundles.

use glam::DVec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use bulwark_core::components::*;
use bulwark_core::config::{PopupTurretDef, RaiderDef};
use bulwark_core::constants::*;
use bulwark_core::types::{Position, UnitId};
use bulwark_mount::PopupMount;

use crate::animation::ClipPlayer;
use crate::turret::Turret;
use crate::weapon::Armament;

/// Hand out the next unit id.
pub fn allocate_unit(next_unit_id: &mut u32) -> UnitId {
    let unit = UnitId(*next_unit_id);
    *next_unit_id += 1;
    unit
}

/// Spawn a popup turret. With `skip_make_animation` it is placed already
/// built and closes on the first construction pass.
pub fn spawn_popup_turret(
    world: &mut World,
    def: &PopupTurretDef,
    unit: UnitId,
    position: Position,
    skip_make_animation: bool,
) -> hecs::Entity {
    let building = Building {
        build_complete: false,
        make_ticks_remaining: if skip_make_animation {
            0
        } else {
            def.animation.make_ticks
        },
    };

    debug!(?unit, x = position.x, y = position.y, skip_make_animation, "spawning popup turret");
    world.spawn((
        PopupTurret,
        unit,
        position,
        Health {
            hp: def.max_hp,
            max_hp: def.max_hp,
        },
        building,
        PopupMount::new(def.mount, skip_make_animation),
        Turret::new(position, &def.turret),
        ClipPlayer::new(def.animation, skip_make_animation),
        Armament::new(&def.armament),
    ))
}

/// Spawn a raider at a fixed position.
pub fn spawn_raider(world: &mut World, def: &RaiderDef, unit: UnitId, position: Position) -> hecs::Entity {
    debug!(?unit, x = position.x, y = position.y, "spawning raider");
    world.spawn((
        Raider,
        unit,
        position,
        Health {
            hp: def.max_hp,
            max_hp: def.max_hp,
        },
        Mobile { speed: def.speed },
        Armament::new(&def.armament),
    ))
}

/// Spawn a raider at a random bearing on the spawn ring around the origin.
pub fn spawn_raider_on_ring(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    def: &RaiderDef,
    unit: UnitId,
) -> hecs::Entity {
    let bearing: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    let radius: f64 = rng.gen_range(RAID_SPAWN_RADIUS_MIN..RAID_SPAWN_RADIUS_MAX);

    // Bearing is measured from North (y-axis) clockwise to East (x-axis).
    let position = DVec2::new(radius * bearing.sin(), radius * bearing.cos());
    spawn_raider(world, def, unit, position)
}
