//! Entity components and the entity records built from them.
//!
//! Components are plain data structs. Entities carry no identity beyond their
//! slot in a dense store; game logic lives in systems, not here.

use serde::{Deserialize, Serialize};

use crate::types::{Position, Velocity};

/// Remaining hit points. Never negative: damage saturates at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub value: u32,
}

/// Hit points removed from a [`Health`] on impact or breach.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Damage {
    pub value: u32,
}

/// Radius within which a tower may select targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AttackRange {
    pub value: f32,
}

/// Seconds between two shots of the same tower.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AttackRate {
    pub value: f32,
}

/// Seconds accumulated since the tower last fired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Timer {
    pub value: f32,
}

impl Health {
    pub const fn new(value: u32) -> Self {
        Self { value }
    }

    /// Subtract `damage`, clamping at zero.
    pub fn apply(&mut self, damage: Damage) {
        self.value = self.value.saturating_sub(damage.value);
    }

    pub fn is_depleted(&self) -> bool {
        self.value == 0
    }
}

impl Damage {
    pub const fn new(value: u32) -> Self {
        Self { value }
    }
}

/// An enemy agent walking the waypoint chain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub health: Health,
    pub position: Position,
    pub velocity: Velocity,
    /// Index of the next waypoint to reach.
    pub waypoint_index: usize,
    /// Damage dealt to the player on reaching the final waypoint.
    pub damage: Damage,
}

/// A fixed path node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub position: Position,
}

/// A stationary player-placed shooter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tower {
    pub position: Position,
    pub range: AttackRange,
    pub attack_rate: AttackRate,
    pub timer: Timer,
}

/// A homing projectile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub position: Position,
    pub velocity: Velocity,
    pub damage: Damage,
    /// Slot in the monster store this bullet is chasing. Re-clamped when the
    /// store shrinks below it.
    pub target_index: usize,
}
