//! Turret system: rotates every turret toward its desired facing.

use hecs::World;

use crate::turret::Turret;

pub fn run(world: &mut World) {
    for (_entity, turret) in world.query_mut::<&mut Turret>() {
        turret.tick();
    }
}
