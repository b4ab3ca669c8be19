//! Requests sent from the host to the simulation.
//!
//! Commands are queued and applied in FIFO order at the start of the next tick.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Entity requests ---
    /// Spawn a monster at the first waypoint with default health and damage.
    SpawnMonster,
    /// Append a waypoint to the end of the path.
    AddWaypoint { x: f32, y: f32 },
    /// Place a tower with default range, rate and timer.
    PlaceTower { x: f32, y: f32 },

    // --- Simulation control ---
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Set time scale (1.0 = normal, 2.0 = double, 0.0 = frozen).
    SetTimeScale { scale: f32 },
    /// Discard the session and start over from the configured scenario.
    Reset,
}
