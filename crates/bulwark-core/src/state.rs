//! Per-tick snapshot of the simulation, handed to whoever presents it.

use serde::{Deserialize, Serialize};

use crate::enums::{AnimationClip, PopupState};
use crate::events::SimEvent;
use crate::types::{Position, SimTime, UnitId};

/// Complete observable state after one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub paused: bool,
    /// Popup turrets, ordered by unit id.
    pub mounts: Vec<MountView>,
    /// Raiders, ordered by unit id.
    pub raiders: Vec<RaiderView>,
    /// Events raised during this tick.
    pub events: Vec<SimEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MountView {
    pub unit: UnitId,
    pub position: Position,
    pub state: PopupState,
    pub idle_ticks: u32,
    pub facing: i32,
    pub desired_facing: Option<i32>,
    /// Looping clip currently shown.
    pub clip: AnimationClip,
    /// One-shot clip in flight, if any.
    pub pending_clip: Option<AnimationClip>,
    pub build_complete: bool,
    pub hp: i32,
    pub max_hp: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaiderView {
    pub unit: UnitId,
    pub position: Position,
    pub hp: i32,
    pub max_hp: i32,
}
