//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::FACING_STEPS;

/// 2D position in simulation space (meters). x = East, y = North.
pub type Position = DVec2;

/// Stable identifier handed out to every spawned unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// Wrap a facing into `0..FACING_STEPS`.
pub fn normalize_facing(facing: i32) -> i32 {
    facing.rem_euclid(FACING_STEPS)
}

/// Facing from `from` toward `to` (0 = North, clockwise).
/// A zero-length vector has no direction, so `current` is kept.
pub fn facing_between(from: Position, to: Position, current: i32) -> i32 {
    let delta = to - from;
    if delta == DVec2::ZERO {
        return current;
    }
    let bearing = delta.x.atan2(delta.y).rem_euclid(std::f64::consts::TAU);
    let steps = (bearing / std::f64::consts::TAU * FACING_STEPS as f64).round() as i32;
    normalize_facing(steps)
}

/// Step `facing` toward `desired` by at most `turn_speed`, along the shorter arc.
/// Snaps onto `desired` once it is within reach.
pub fn tick_facing(facing: i32, desired: i32, turn_speed: i32) -> i32 {
    let left_turn = normalize_facing(facing - desired);
    let right_turn = normalize_facing(desired - facing);
    if left_turn.min(right_turn) <= turn_speed {
        return normalize_facing(desired);
    }

    if right_turn < left_turn {
        normalize_facing(facing + turn_speed)
    } else {
        normalize_facing(facing - turn_speed)
    }
}
