//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Posture of a popup weapon mount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PopupState {
    /// Fully raised, idle timer running, may engage immediately.
    #[default]
    Open,
    /// Raised but turning to its rest facing before retracting.
    Rotating,
    /// An "opening" or "closing" clip is playing. Never eligible to engage.
    Transitioning,
    /// Fully retracted. Incoming damage is reduced.
    Closed,
}

/// Named animation clips played on a popup turret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationClip {
    /// Construction build-up.
    Make,
    /// Mount rising out of its enclosure.
    Opening,
    /// Raised and idle.
    #[default]
    Idle,
    /// Mount retracting into its enclosure.
    Closing,
    /// Retracted and idle.
    ClosedIdle,
}

impl AnimationClip {
    /// The clip name as the presentation layer knows it.
    pub fn name(self) -> &'static str {
        match self {
            AnimationClip::Make => "make",
            AnimationClip::Opening => "opening",
            AnimationClip::Idle => "idle",
            AnimationClip::Closing => "closing",
            AnimationClip::ClosedIdle => "closed-idle",
        }
    }
}

impl std::fmt::Display for AnimationClip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
