//! Events emitted by the simulation for UI and audio feedback.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Something noteworthy that happened during a tick.
///
/// Events are drained into the snapshot of the tick that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    MonsterSpawned { position: Position },
    WaypointAdded { index: usize, position: Position },
    TowerPlaced { index: usize, position: Position },
    BulletFired { tower_index: usize, target_index: usize },
    BulletImpact { target_index: usize, damage: u32 },
    /// A monster with depleted health was removed.
    MonsterKilled { position: Position },
    /// A monster reached the final waypoint and damaged the player.
    MonsterBreached { damage: u32, player_health: u32 },
    /// A monster was removed because the path is too short to walk.
    MonsterStranded { position: Position },
    CommandRejected { reason: String },
    GameOver { tick: u64, kills: u32 },
}
