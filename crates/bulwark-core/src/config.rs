//! Unit definitions loaded at startup.
//!
//! Definitions are immutable once loaded. Every field has a default, so a
//! JSON document only needs to name what it overrides.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::constants::*;
use crate::enums::AnimationClip;

/// Failure to load or validate a definition.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read definition file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed definition: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

/// Tunables of the popup mount itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupMountConfig {
    /// Idle ticks before the open mount begins to close.
    pub close_delay: u32,
    /// Facing the mount rotates to before retracting.
    pub default_facing: i32,
    /// Percentage of damage received while closed.
    pub closed_damage_multiplier: i32,
}

impl Default for PopupMountConfig {
    fn default() -> Self {
        Self {
            close_delay: DEFAULT_CLOSE_DELAY,
            default_facing: DEFAULT_REST_FACING,
            closed_damage_multiplier: DEFAULT_CLOSED_DAMAGE_MULTIPLIER,
        }
    }
}

impl PopupMountConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0..FACING_STEPS).contains(&self.default_facing) {
            return Err(invalid(
                "default_facing",
                format!("{} is outside 0..{FACING_STEPS}", self.default_facing),
            ));
        }
        if self.closed_damage_multiplier < 0 {
            return Err(invalid(
                "closed_damage_multiplier",
                format!("{} is negative", self.closed_damage_multiplier),
            ));
        }
        Ok(())
    }
}

/// Aiming subsystem tunables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurretConfig {
    /// Facing steps per tick.
    pub turn_speed: i32,
    /// Facing on spawn.
    pub initial_facing: i32,
}

impl Default for TurretConfig {
    fn default() -> Self {
        Self {
            turn_speed: DEFAULT_TURRET_TURN_SPEED,
            initial_facing: DEFAULT_REST_FACING,
        }
    }
}

impl TurretConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.turn_speed <= 0 {
            return Err(invalid("turn_speed", "must be positive"));
        }
        if !(0..FACING_STEPS).contains(&self.initial_facing) {
            return Err(invalid(
                "initial_facing",
                format!("{} is outside 0..{FACING_STEPS}", self.initial_facing),
            ));
        }
        Ok(())
    }
}

/// A single weapon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArmamentConfig {
    /// Maximum engagement range (meters).
    pub range: f64,
    /// Base damage per shot.
    pub damage: i32,
    /// Ticks between shots.
    pub reload_ticks: u32,
}

impl ArmamentConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.range.is_finite() || self.range <= 0.0 {
            return Err(invalid("range", format!("{} is not a positive distance", self.range)));
        }
        if self.damage < 0 {
            return Err(invalid("damage", format!("{} is negative", self.damage)));
        }
        Ok(())
    }
}

/// Clip lengths for a building's animation sequences, in ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub make_ticks: u32,
    pub opening_ticks: u32,
    pub closing_ticks: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            make_ticks: DEFAULT_MAKE_TICKS,
            opening_ticks: DEFAULT_OPENING_TICKS,
            closing_ticks: DEFAULT_CLOSING_TICKS,
        }
    }
}

impl AnimationConfig {
    /// Length of a one-shot clip. Looping clips have no length.
    pub fn length_of(&self, clip: AnimationClip) -> Option<u32> {
        match clip {
            AnimationClip::Make => Some(self.make_ticks),
            AnimationClip::Opening => Some(self.opening_ticks),
            AnimationClip::Closing => Some(self.closing_ticks),
            AnimationClip::Idle | AnimationClip::ClosedIdle => None,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.opening_ticks == 0 {
            return Err(invalid("opening_ticks", "clip must last at least one tick"));
        }
        if self.closing_ticks == 0 {
            return Err(invalid("closing_ticks", "clip must last at least one tick"));
        }
        Ok(())
    }
}

/// Full definition of a popup turret building.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupTurretDef {
    pub max_hp: i32,
    pub mount: PopupMountConfig,
    pub turret: TurretConfig,
    pub armament: ArmamentConfig,
    pub animation: AnimationConfig,
}

impl Default for PopupTurretDef {
    fn default() -> Self {
        Self {
            max_hp: DEFAULT_TURRET_HP,
            mount: PopupMountConfig::default(),
            turret: TurretConfig::default(),
            armament: ArmamentConfig {
                range: DEFAULT_TURRET_RANGE,
                damage: DEFAULT_TURRET_DAMAGE,
                reload_ticks: DEFAULT_TURRET_RELOAD_TICKS,
            },
            animation: AnimationConfig::default(),
        }
    }
}

impl PopupTurretDef {
    /// Parse and validate a definition from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        parse_validated(json, Self::validate)
    }

    /// Read, parse and validate a definition file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading popup turret definition");
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_hp <= 0 {
            return Err(invalid("max_hp", "must be positive"));
        }
        self.mount.validate()?;
        self.turret.validate()?;
        self.armament.validate()?;
        self.animation.validate()
    }
}

/// Definition of the hostile raider used to exercise turrets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaiderDef {
    pub max_hp: i32,
    /// Meters per tick.
    pub speed: f64,
    pub armament: ArmamentConfig,
}

impl Default for RaiderDef {
    fn default() -> Self {
        Self {
            max_hp: DEFAULT_RAIDER_HP,
            speed: DEFAULT_RAIDER_SPEED,
            armament: ArmamentConfig {
                range: DEFAULT_RAIDER_RANGE,
                damage: DEFAULT_RAIDER_DAMAGE,
                reload_ticks: DEFAULT_RAIDER_RELOAD_TICKS,
            },
        }
    }
}

impl RaiderDef {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        parse_validated(json, Self::validate)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_hp <= 0 {
            return Err(invalid("max_hp", "must be positive"));
        }
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(invalid("speed", format!("{} is not a positive speed", self.speed)));
        }
        self.armament.validate()
    }
}

/// Both definitions in one document, as consumed by the scenario runner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitDefs {
    pub popup_turret: PopupTurretDef,
    pub raider: RaiderDef,
}

impl UnitDefs {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        parse_validated(json, Self::validate)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading unit definitions");
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.popup_turret.validate()?;
        self.raider.validate()
    }
}

fn parse_validated<T: DeserializeOwned>(
    json: &str,
    validate: impl FnOnce(&T) -> Result<(), ConfigError>,
) -> Result<T, ConfigError> {
    let value: T = serde_json::from_str(json)?;
    validate(&value)?;
    Ok(value)
}
