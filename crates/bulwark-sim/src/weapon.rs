//! Armaments and the base weapon eligibility check.

use bulwark_core::config::ArmamentConfig;
use bulwark_core::damage::Warhead;
use bulwark_core::types::Position;
use bulwark_mount::Weapon;

#[derive(Debug, Clone)]
pub struct Armament {
    pub range: f64,
    pub damage: i32,
    pub reload_ticks: u32,
    /// Ticks until the next shot is possible.
    pub cooldown: u32,
}

impl Armament {
    pub fn new(config: &ArmamentConfig) -> Self {
        Self {
            range: config.range,
            damage: config.damage,
            reload_ticks: config.reload_ticks,
            cooldown: 0,
        }
    }

    pub fn is_reloading(&self) -> bool {
        self.cooldown > 0
    }

    pub fn in_range(&self, origin: Position, target: Position) -> bool {
        origin.distance(target) <= self.range
    }

    pub fn warhead(&self) -> Warhead {
        Warhead {
            damage: self.damage,
        }
    }

    /// Start the reload after a shot.
    pub fn fire(&mut self) {
        self.cooldown = self.reload_ticks;
    }

    pub fn tick_reload(&mut self) {
        self.cooldown = self.cooldown.saturating_sub(1);
    }
}

/// An armament seen from where it is mounted.
pub struct MountedWeapon<'a> {
    pub armament: &'a Armament,
    pub origin: Position,
}

impl Weapon<Position> for MountedWeapon<'_> {
    fn can_attack(&self, target: &Position) -> bool {
        !self.armament.is_reloading() && self.armament.in_range(self.origin, *target)
    }
}
