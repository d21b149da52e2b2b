//! Animation system: advances clip players and fires finished continuations.

use hecs::World;

use bulwark_core::events::SimEvent;
use bulwark_core::types::UnitId;
use bulwark_mount::PopupMount;

use crate::animation::ClipPlayer;
use crate::turret::Turret;

use super::note_mount_transition;

pub fn run(world: &mut World, events: &mut Vec<SimEvent>) {
    for (_entity, (unit, mount, turret, player)) in
        world.query_mut::<(&UnitId, &mut PopupMount, &mut Turret, &mut ClipPlayer)>()
    {
        if let Some(completion) = player.advance() {
            let before = mount.state();
            mount.complete_animation(completion, turret, player);
            note_mount_transition(events, *unit, before, mount.state());
        }
    }
}
