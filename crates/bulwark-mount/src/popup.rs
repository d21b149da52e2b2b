//! Popup mount state machine.
//!
//! Open → (idle past close delay) → Rotating → (at rest facing) → Transitioning
//! → ("closing" done) → Closed → (eligible target) → Transitioning
//! → ("opening" done) → Open.

use tracing::debug;

use bulwark_core::config::PopupMountConfig;
use bulwark_core::constants::FULL_DAMAGE_PERCENT;
use bulwark_core::damage::Warhead;
use bulwark_core::enums::{AnimationClip, PopupState};

use crate::collaborators::{AnimationPlayer, Aiming, Completion, DamageModifier, FaceTarget, Weapon};

/// Per-entity popup mount.
///
/// `state` and `idle_ticks` are only written by the entry points below.
#[derive(Debug, Clone)]
pub struct PopupMount {
    config: PopupMountConfig,
    state: PopupState,
    idle_ticks: u32,
    skipped_make_animation: bool,
}

impl PopupMount {
    /// A mount starts Open. `skipped_make_animation` marks an entity that
    /// was placed already built; it closes as soon as construction completes.
    pub fn new(config: PopupMountConfig, skipped_make_animation: bool) -> Self {
        Self {
            config,
            state: PopupState::Open,
            idle_ticks: 0,
            skipped_make_animation,
        }
    }

    pub fn state(&self) -> PopupState {
        self.state
    }

    pub fn idle_ticks(&self) -> u32 {
        self.idle_ticks
    }

    pub fn config(&self) -> &PopupMountConfig {
        &self.config
    }

    /// Eligibility query, polled by the combat pipeline every tick.
    ///
    /// A closed mount that is asked to engage starts opening and denies this
    /// attempt; the caller asks again on a later tick.
    pub fn can_attack<T>(
        &mut self,
        target: &T,
        building_complete: bool,
        weapon: &impl Weapon<T>,
        turret: &mut impl FaceTarget<T>,
        animation: &mut impl AnimationPlayer,
    ) -> bool {
        if self.state == PopupState::Transitioning || !building_complete {
            return false;
        }

        if !weapon.can_attack(target) {
            return false;
        }

        self.idle_ticks = 0;
        if self.state == PopupState::Closed {
            self.set_state(PopupState::Transitioning);
            animation.play_once(AnimationClip::Opening, Completion::Opened);
            return false;
        }

        turret.face_target(target)
    }

    /// Called once per tick while the entity has nothing else to do.
    pub fn tick_idle(&mut self, turret: &mut impl Aiming, animation: &mut impl AnimationPlayer) {
        match self.state {
            PopupState::Open => {
                self.idle_ticks = self.idle_ticks.saturating_add(1);
                if self.idle_ticks > self.config.close_delay {
                    turret.set_desired_facing(Some(self.config.default_facing));
                    self.set_state(PopupState::Rotating);
                }
            }
            PopupState::Rotating if turret.current_facing() == self.config.default_facing => {
                self.set_state(PopupState::Transitioning);
                animation.play_once(AnimationClip::Closing, Completion::Closed);
            }
            _ => {}
        }
    }

    /// Fires the continuation handed back by the animation player.
    pub fn complete_animation(
        &mut self,
        completion: Completion,
        turret: &mut impl Aiming,
        animation: &mut impl AnimationPlayer,
    ) {
        match completion {
            Completion::Opened => {
                self.set_state(PopupState::Open);
                animation.play_repeating(AnimationClip::Idle);
            }
            Completion::Closed => {
                self.set_state(PopupState::Closed);
                animation.play_repeating(AnimationClip::ClosedIdle);
                turret.set_desired_facing(None);
            }
        }
    }

    /// Construction finished. Only a pre-built entity reacts, by retracting
    /// straight away without playing "closing". Later calls are no-ops.
    pub fn building_complete(&mut self, turret: &mut impl Aiming, animation: &mut impl AnimationPlayer) {
        if std::mem::take(&mut self.skipped_make_animation) {
            self.set_state(PopupState::Closed);
            animation.play_repeating(AnimationClip::ClosedIdle);
            turret.set_desired_facing(None);
        }
    }

    fn set_state(&mut self, next: PopupState) {
        if self.state != next {
            debug!(from = ?self.state, to = ?next, idle_ticks = self.idle_ticks, "popup mount state change");
        }
        self.state = next;
    }
}

impl<A> DamageModifier<A> for PopupMount {
    fn damage_modifier(&self, _attacker: &A, _warhead: &Warhead) -> i32 {
        if self.state == PopupState::Closed {
            self.config.closed_damage_multiplier
        } else {
            FULL_DAMAGE_PERCENT
        }
    }
}
