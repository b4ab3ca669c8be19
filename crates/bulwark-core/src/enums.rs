//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level session phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Update systems run every tick.
    #[default]
    Active,
    /// Requests are still applied, but no entity is updated and time stands still.
    Paused,
    /// Player health reached zero. Terminal until the session is reset.
    GameOver,
}

/// Named starting layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioId {
    /// A single seed waypoint, no towers, no waves. Everything is player-driven.
    #[default]
    Sandbox,
    /// Fixed zig-zag path with a tower line and three scheduled waves.
    Serpentine,
    /// Path and towers generated from the session seed.
    Skirmish,
}
