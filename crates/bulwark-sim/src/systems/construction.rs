//! Construction system: counts down the make animation and reports completion.
//!
//! Every building receives `building_complete` exactly once. A building placed
//! pre-built has no make ticks and completes on the first pass after spawning.

use hecs::World;
use tracing::debug;

use bulwark_core::components::Building;
use bulwark_core::enums::AnimationClip;
use bulwark_core::events::SimEvent;
use bulwark_core::types::UnitId;
use bulwark_mount::PopupMount;

use crate::animation::ClipPlayer;
use crate::turret::Turret;

use super::note_mount_transition;

pub fn run(world: &mut World, events: &mut Vec<SimEvent>) {
    for (_entity, (unit, building, mount, turret, player)) in world.query_mut::<(
        &UnitId,
        &mut Building,
        &mut PopupMount,
        &mut Turret,
        &mut ClipPlayer,
    )>() {
        if building.build_complete {
            continue;
        }

        if building.make_ticks_remaining > 0 {
            building.make_ticks_remaining -= 1;
            if building.make_ticks_remaining > 0 {
                continue;
            }
        }

        // The mount may already be mid-"closing"; its continuation must survive.
        if player.looping() == AnimationClip::Make {
            player.set_looping(AnimationClip::Idle);
        }
        building.build_complete = true;
        debug!(?unit, "construction complete");

        let before = mount.state();
        mount.building_complete(turret, player);
        note_mount_transition(events, *unit, before, mount.state());
    }
}
