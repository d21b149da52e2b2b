//! Reload system: counts every armament's cooldown down by one tick.

use hecs::World;

use crate::weapon::Armament;

pub fn run(world: &mut World) {
    for (_entity, armament) in world.query_mut::<&mut Armament>() {
        armament.tick_reload();
    }
}
