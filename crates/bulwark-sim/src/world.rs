//! The simulation context: the four entity stores of one session.

use bulwark_core::components::{Bullet, Monster, Tower, Waypoint};

use crate::store::Store;

/// All entities of a session.
///
/// Owned by `SimulationEngine`; created at session start and replaced on
/// reset. Stores are independent, so systems borrow them field by field.
#[derive(Debug, Clone, Default)]
pub struct World {
    pub monsters: Store<Monster>,
    pub waypoints: Store<Waypoint>,
    pub towers: Store<Tower>,
    pub bullets: Store<Bullet>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty every store, keeping their allocations for the next session.
    pub fn clear(&mut self) {
        self.monsters.clear();
        self.waypoints.clear();
        self.towers.clear();
        self.bullets.clear();
    }
}
