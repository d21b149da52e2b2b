//! Turret aiming subsystem.
//!
//! Holds the turret's facing and the desired-facing command. The turret
//! system steps the facing toward the command once per tick.

use bulwark_core::config::TurretConfig;
use bulwark_core::types::{facing_between, tick_facing, Position};
use bulwark_mount::{Aiming, FaceTarget};

#[derive(Debug, Clone)]
pub struct Turret {
    /// Pivot point. Turrets sit on buildings and never move.
    pub origin: Position,
    pub facing: i32,
    /// `None` holds the current facing.
    pub desired_facing: Option<i32>,
    pub turn_speed: i32,
}

impl Turret {
    pub fn new(origin: Position, config: &TurretConfig) -> Self {
        Self {
            origin,
            facing: config.initial_facing,
            desired_facing: None,
            turn_speed: config.turn_speed,
        }
    }

    /// Rotate one tick's worth toward the desired facing.
    pub fn tick(&mut self) {
        if let Some(desired) = self.desired_facing {
            self.facing = tick_facing(self.facing, desired, self.turn_speed);
        }
    }
}

impl Aiming for Turret {
    fn set_desired_facing(&mut self, facing: Option<i32>) {
        self.desired_facing = facing;
    }

    fn desired_facing(&self) -> Option<i32> {
        self.desired_facing
    }

    fn current_facing(&self) -> i32 {
        self.facing
    }
}

impl FaceTarget<Position> for Turret {
    fn face_target(&mut self, target: &Position) -> bool {
        let desired = facing_between(self.origin, *target, self.facing);
        self.desired_facing = Some(desired);
        self.facing == desired
    }
}
