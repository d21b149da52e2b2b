//! Popup weapon mount for BULWARK.
//!
//! A mount that rises out of an armoured enclosure before it can fire and
//! retracts again after a stretch of inactivity. The state machine in
//! [`popup`] decides whether the mount may engage and how much incoming
//! damage it takes. Aiming, animation, and weapon checks are reached
//! through the traits in [`collaborators`]. No ECS dependency; operates on
//! plain data.

pub mod collaborators;
pub mod popup;

pub use bulwark_core as core;
pub use collaborators::{AnimationPlayer, Aiming, Completion, DamageModifier, FaceTarget, Weapon};
pub use popup::PopupMount;
