//! Entity spawn factories.
//!
//! Every entity enters the world through one of these functions so default
//! stats live in a single place.

use bulwark_core::components::*;
use bulwark_core::error::CommandError;
use bulwark_core::types::{Position, Velocity};

use crate::config::Tuning;
use crate::scenario::Layout;
use crate::world::World;

/// Clear the world and populate it from a scenario layout.
pub fn setup_session(world: &mut World, layout: &Layout, tuning: &Tuning) {
    world.clear();
    for &position in &layout.waypoints {
        world.waypoints.push(Waypoint { position });
    }
    for &position in &layout.towers {
        world.towers.push(new_tower(position, tuning));
    }
}

/// Spawn a monster on the first waypoint. Returns its store index.
pub fn spawn_monster(world: &mut World, tuning: &Tuning) -> Result<usize, CommandError> {
    let start = world
        .waypoints
        .first()
        .ok_or(CommandError::NoWaypoints)?
        .position;

    Ok(world.monsters.push(Monster {
        health: Health::new(tuning.monster_max_health),
        position: start,
        velocity: Velocity::default(),
        waypoint_index: 0,
        damage: Damage::new(tuning.monster_damage),
    }))
}

/// Append a waypoint to the end of the path. Returns its index.
pub fn add_waypoint(world: &mut World, position: Position) -> Result<usize, CommandError> {
    ensure_finite(position)?;
    Ok(world.waypoints.push(Waypoint { position }))
}

/// Place a tower with default range, rate and an empty timer. Returns its index.
pub fn place_tower(
    world: &mut World,
    position: Position,
    tuning: &Tuning,
) -> Result<usize, CommandError> {
    ensure_finite(position)?;
    Ok(world.towers.push(new_tower(position, tuning)))
}

fn new_tower(position: Position, tuning: &Tuning) -> Tower {
    Tower {
        position,
        range: AttackRange {
            value: tuning.tower_range,
        },
        attack_rate: AttackRate {
            value: tuning.tower_attack_rate,
        },
        timer: Timer::default(),
    }
}

fn ensure_finite(position: Position) -> Result<(), CommandError> {
    if position.is_finite() {
        Ok(())
    } else {
        Err(CommandError::NonFinitePosition {
            x: position.x,
            y: position.y,
        })
    }
}
