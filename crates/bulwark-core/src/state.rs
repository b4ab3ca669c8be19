//! Game state snapshot: the complete visible state handed to the presentation layer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::events::GameEvent;
use crate::types::{Position, SimTime, Velocity};

/// Complete game state published after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub monsters: Vec<MonsterView>,
    pub waypoints: Vec<WaypointView>,
    pub towers: Vec<TowerView>,
    pub bullets: Vec<BulletView>,
    pub counters: CountersView,
    pub sizes: SizesView,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonsterView {
    pub position: Position,
    pub velocity: Velocity,
    pub health: u32,
    /// Health over the configured maximum, clamped to 0.0..=1.0 (health bar width).
    pub health_ratio: f32,
    pub waypoint_index: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaypointView {
    pub position: Position,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TowerView {
    pub position: Position,
    pub range: f32,
    /// Timer over attack rate, clamped to 0.0..=1.0. 1.0 means ready to fire.
    pub cooldown_progress: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulletView {
    pub position: Position,
    pub target_index: usize,
}

/// Scalar counters for the HUD.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountersView {
    pub monsters: u32,
    pub waypoints: u32,
    pub towers: u32,
    pub bullets: u32,
    pub kills: u32,
    pub breaches: u32,
    pub shots_fired: u32,
    /// Bullets that reached their target.
    pub hits: u32,
    pub player_health: u32,
}

/// Presentation radii so the renderer needs no copy of the constants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SizesView {
    pub monster_size: f32,
    pub waypoint_radius: f32,
    pub tower_radius: f32,
    pub bullet_radius: f32,
}
