//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 25;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Facing ---

/// Number of discrete facing steps in a full turn. 0 = North, clockwise.
pub const FACING_STEPS: i32 = 256;

// --- Popup mount ---

/// Idle ticks before an open mount starts rotating to its rest facing.
pub const DEFAULT_CLOSE_DELAY: u32 = 125;

/// Facing the mount returns to before retracting.
pub const DEFAULT_REST_FACING: i32 = 0;

/// Percentage of incoming damage applied while the mount is closed.
pub const DEFAULT_CLOSED_DAMAGE_MULTIPLIER: i32 = 50;

/// Damage modifier that leaves damage unchanged.
pub const FULL_DAMAGE_PERCENT: i32 = 100;

// --- Turret ---

/// Facing steps a turret may rotate per tick.
pub const DEFAULT_TURRET_TURN_SPEED: i32 = 8;

// --- Animation clip lengths (ticks) ---

/// Length of the construction ("make") animation.
pub const DEFAULT_MAKE_TICKS: u32 = 40;

/// Length of the "opening" animation.
pub const DEFAULT_OPENING_TICKS: u32 = 12;

/// Length of the "closing" animation.
pub const DEFAULT_CLOSING_TICKS: u32 = 12;

// --- Popup turret weapon ---

/// Popup turret weapon range (meters).
pub const DEFAULT_TURRET_RANGE: f64 = 160.0;

/// Popup turret damage per shot.
pub const DEFAULT_TURRET_DAMAGE: i32 = 40;

/// Ticks between popup turret shots.
pub const DEFAULT_TURRET_RELOAD_TICKS: u32 = 30;

/// Popup turret hit points.
pub const DEFAULT_TURRET_HP: i32 = 400;

// --- Raiders ---

/// Raider hit points.
pub const DEFAULT_RAIDER_HP: i32 = 100;

/// Raider movement speed (meters per tick).
pub const DEFAULT_RAIDER_SPEED: f64 = 1.5;

/// Raider weapon range (meters).
pub const DEFAULT_RAIDER_RANGE: f64 = 120.0;

/// Raider damage per shot.
pub const DEFAULT_RAIDER_DAMAGE: i32 = 20;

/// Ticks between raider shots.
pub const DEFAULT_RAIDER_RELOAD_TICKS: u32 = 40;

/// Inner radius of the raider spawn ring (meters from origin).
pub const RAID_SPAWN_RADIUS_MIN: f64 = 350.0;

/// Outer radius of the raider spawn ring (meters from origin).
pub const RAID_SPAWN_RADIUS_MAX: f64 = 450.0;

/// How far inside its weapon range a raider stops (meters).
pub const RAIDER_STANDOFF_MARGIN: f64 = 1.0;
