//! Interfaces the mount drives or consults.
//!
//! The mount never stores these collaborators. The host passes them in by
//! `&mut` on every call, so the mount can never outlive them.

use bulwark_core::damage::Warhead;
use bulwark_core::enums::AnimationClip;

/// Continuation registered with a one-shot clip.
///
/// The animation player owns it while the clip plays and hands it back
/// exactly once when the clip ends, on a later tick. The host then passes
/// it to [`crate::PopupMount::complete_animation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The "opening" clip finished.
    Opened,
    /// The "closing" clip finished.
    Closed,
}

/// Turret orientation control.
pub trait Aiming {
    /// Command a rotation. `None` means no active aim command.
    fn set_desired_facing(&mut self, facing: Option<i32>);

    /// Readback of the last command, for hosts presenting the turret.
    /// The mount itself only writes it.
    fn desired_facing(&self) -> Option<i32>;

    fn current_facing(&self) -> i32;
}

/// Aiming at a concrete target type.
pub trait FaceTarget<T>: Aiming {
    /// Turn toward `target`. True only if the turret already faces it.
    fn face_target(&mut self, target: &T) -> bool;
}

/// The base weapon check: range, reload, ammunition.
pub trait Weapon<T> {
    fn can_attack(&self, target: &T) -> bool;
}

/// Plays named clips on the mount's building.
pub trait AnimationPlayer {
    /// Play `clip` once, then hand back `on_complete`.
    fn play_once(&mut self, clip: AnimationClip, on_complete: Completion);

    /// Loop `clip` until something else is played.
    fn play_repeating(&mut self, clip: AnimationClip);
}

/// Percentage applied to incoming damage. Combined multiplicatively with
/// every other modifier on the victim.
pub trait DamageModifier<A> {
    fn damage_modifier(&self, attacker: &A, warhead: &Warhead) -> i32;
}
