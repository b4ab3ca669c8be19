//! Simulation constants and tuning defaults.

// --- Host loop ---

/// Host loop tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the host tick rate.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

/// Upper bound for `SetTimeScale`.
pub const MAX_TIME_SCALE: f32 = 4.0;

// --- World bounds (pixels) ---

pub const WORLD_WIDTH: f32 = 1600.0;
pub const WORLD_HEIGHT: f32 = 900.0;

// --- Presentation sizes (pixels) ---

pub const MONSTER_SIZE: f32 = 32.0;
pub const WAYPOINT_RADIUS: f32 = 16.0;
pub const TOWER_RADIUS: f32 = 16.0;

/// Collision radius of a bullet; also its drawn radius.
pub const BULLET_RADIUS: f32 = 8.0;

// --- Movement ---

/// Monster speed (pixels per second).
pub const MONSTER_SPEED: f32 = 100.0;

/// Bullet speed (pixels per second).
pub const BULLET_SPEED: f32 = 150.0;

/// A monster within this distance of its targeted waypoint has reached it.
pub const WAYPOINT_ARRIVAL_RADIUS: f32 = 2.0;

// --- Monsters ---

/// Spawn health. Also the denominator of the health-bar ratio.
pub const MONSTER_MAX_HEALTH: u32 = 100;

/// Damage a monster deals to the player on breach.
pub const MONSTER_DAMAGE: u32 = 5;

// --- Towers ---

pub const TOWER_RANGE: f32 = 100.0;

/// Seconds between shots.
pub const TOWER_ATTACK_RATE: f32 = 1.5;

pub const BULLET_DAMAGE: u32 = 50;

// --- Player ---

pub const PLAYER_START_HEALTH: u32 = 100;

/// Waypoint seeded at session start so monsters always have a spawn point.
pub const INITIAL_WAYPOINT: (f32, f32) = (150.0, 150.0);
