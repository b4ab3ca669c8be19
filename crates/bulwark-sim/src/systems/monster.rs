//! Monster update system: waypoint chasing, breach damage and death.

use tracing::debug;

use bulwark_core::components::{Health, Monster, Waypoint};
use bulwark_core::events::GameEvent;
use bulwark_core::geometry;
use bulwark_core::types::Velocity;

use crate::config::Tuning;
use crate::world::World;

/// Result of updating one monster for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonsterOutcome {
    /// Still walking.
    Alive,
    /// Health is depleted.
    Killed,
    /// Reached the final waypoint and damaged the player.
    Breached { damage: u32 },
    /// The path is too short to walk (fewer than two waypoints) or the
    /// monster points past its end.
    Stranded,
}

impl MonsterOutcome {
    pub fn is_alive(self) -> bool {
        matches!(self, MonsterOutcome::Alive)
    }
}

/// Per-tick removal counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonsterTally {
    pub killed: u32,
    pub breached: u32,
    pub stranded: u32,
}

impl MonsterTally {
    pub fn removed(&self) -> u32 {
        self.killed + self.breached + self.stranded
    }
}

/// Advance a single monster toward its targeted waypoint.
pub fn update_monster(
    monster: &mut Monster,
    dt: f32,
    waypoints: &[Waypoint],
    player_health: &mut Health,
    tuning: &Tuning,
) -> MonsterOutcome {
    if monster.health.is_depleted() {
        return MonsterOutcome::Killed;
    }

    if waypoints.len() < 2 || monster.waypoint_index >= waypoints.len() {
        return MonsterOutcome::Stranded;
    }

    let target = waypoints[monster.waypoint_index].position;
    if monster.position.distance_to(&target) <= tuning.waypoint_arrival_radius {
        if monster.waypoint_index == waypoints.len() - 1 {
            player_health.apply(monster.damage);
            return MonsterOutcome::Breached {
                damage: monster.damage.value,
            };
        }
        monster.waypoint_index += 1;
    }

    let target = waypoints[monster.waypoint_index].position;
    let velocity = geometry::direction(monster.position, target) * tuning.monster_speed;
    monster.velocity = Velocity::from(velocity);
    monster.position = (monster.position.to_vec2() + velocity * dt).into();

    MonsterOutcome::Alive
}

/// Update every monster, compacting removed ones out of the store.
pub fn run(
    world: &mut World,
    dt: f32,
    player_health: &mut Health,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) -> MonsterTally {
    let waypoints = world.waypoints.as_slice();
    let mut tally = MonsterTally::default();

    world.monsters.swap_retain(|monster| {
        let outcome = update_monster(monster, dt, waypoints, player_health, tuning);
        match outcome {
            MonsterOutcome::Alive => {}
            MonsterOutcome::Killed => {
                tally.killed += 1;
                debug!(x = monster.position.x, y = monster.position.y, "monster killed");
                events.push(GameEvent::MonsterKilled {
                    position: monster.position,
                });
            }
            MonsterOutcome::Breached { damage } => {
                tally.breached += 1;
                debug!(damage, player_health = player_health.value, "monster breached");
                events.push(GameEvent::MonsterBreached {
                    damage,
                    player_health: player_health.value,
                });
            }
            MonsterOutcome::Stranded => {
                tally.stranded += 1;
                debug!(waypoints = waypoints.len(), "monster stranded");
                events.push(GameEvent::MonsterStranded {
                    position: monster.position,
                });
            }
        }
        outcome.is_alive()
    });

    tally
}
