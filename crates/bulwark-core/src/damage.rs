//! Damage math shared by the combat pipeline.

use serde::{Deserialize, Serialize};

use crate::constants::FULL_DAMAGE_PERCENT;

/// What a single shot delivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warhead {
    /// Base damage before modifiers.
    pub damage: i32,
}

/// Apply a chain of percentage modifiers to `value`.
///
/// The modifiers multiply: `[50, 50]` yields a quarter. The product is kept
/// exact and truncated toward zero once at the end, so the order of the
/// modifiers never changes the result.
pub fn apply_percentage_modifiers(value: i32, modifiers: impl IntoIterator<Item = i32>) -> i32 {
    let mut numerator = i128::from(value);
    let mut denominator: i128 = 1;
    for percent in modifiers {
        numerator *= i128::from(percent);
        denominator *= i128::from(FULL_DAMAGE_PERCENT);
    }
    let result = numerator / denominator;
    result.clamp(i128::from(i32::MIN), i128::from(i32::MAX)) as i32
}
