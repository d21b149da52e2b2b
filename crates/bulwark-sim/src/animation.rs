//! Clip player standing in for the presentation layer.
//!
//! Tracks which clip a building shows and counts one-shot clips down so the
//! mount's completion continuation comes back on a later tick.

use tracing::warn;

use bulwark_core::config::AnimationConfig;
use bulwark_core::enums::AnimationClip;
use bulwark_mount::{AnimationPlayer, Completion};

#[derive(Debug, Clone)]
struct OneShot {
    clip: AnimationClip,
    remaining: u32,
    on_complete: Completion,
}

#[derive(Debug, Clone)]
pub struct ClipPlayer {
    lengths: AnimationConfig,
    looping: AnimationClip,
    one_shot: Option<OneShot>,
}

impl ClipPlayer {
    /// A building placed pre-built starts idle; otherwise it shows "make".
    pub fn new(lengths: AnimationConfig, skip_make_animation: bool) -> Self {
        let looping = if skip_make_animation {
            AnimationClip::Idle
        } else {
            AnimationClip::Make
        };
        Self {
            lengths,
            looping,
            one_shot: None,
        }
    }

    /// The looping clip underneath any one-shot.
    pub fn looping(&self) -> AnimationClip {
        self.looping
    }

    /// The one-shot clip in flight, if any.
    pub fn pending(&self) -> Option<AnimationClip> {
        self.one_shot.as_ref().map(|shot| shot.clip)
    }

    /// Swap the looping clip underneath. A one-shot in flight keeps playing
    /// and still hands back its continuation.
    pub fn set_looping(&mut self, clip: AnimationClip) {
        self.looping = clip;
    }

    /// Advance one tick. Returns the continuation of a one-shot clip that
    /// finished this tick. Each continuation is returned exactly once.
    pub fn advance(&mut self) -> Option<Completion> {
        let shot = self.one_shot.as_mut()?;
        shot.remaining = shot.remaining.saturating_sub(1);
        if shot.remaining > 0 {
            return None;
        }
        self.one_shot.take().map(|shot| shot.on_complete)
    }
}

impl AnimationPlayer for ClipPlayer {
    fn play_once(&mut self, clip: AnimationClip, on_complete: Completion) {
        if let Some(previous) = &self.one_shot {
            warn!(superseded = %previous.clip, by = %clip, "one-shot clip replaced before it finished");
        }
        let remaining = self.lengths.length_of(clip).unwrap_or(1).max(1);
        self.one_shot = Some(OneShot {
            clip,
            remaining,
            on_complete,
        });
    }

    fn play_repeating(&mut self, clip: AnimationClip) {
        self.looping = clip;
        self.one_shot = None;
    }
}
