//! Snapshot system: projects the world into a `GameStateSnapshot`.
//!
//! Read-only. It never modifies the world.

use bulwark_core::constants::*;
use bulwark_core::enums::GamePhase;
use bulwark_core::events::GameEvent;
use bulwark_core::state::*;
use bulwark_core::types::SimTime;

use crate::config::Tuning;
use crate::score::ScoreState;
use crate::world::World;

/// Build a complete snapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    score: &ScoreState,
    player_health: u32,
    tuning: &Tuning,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        monsters: build_monsters(world, tuning.monster_max_health),
        waypoints: world
            .waypoints
            .iter()
            .map(|w| WaypointView {
                position: w.position,
            })
            .collect(),
        towers: build_towers(world),
        bullets: world
            .bullets
            .iter()
            .map(|b| BulletView {
                position: b.position,
                target_index: b.target_index,
            })
            .collect(),
        counters: CountersView {
            monsters: count(world.monsters.len()),
            waypoints: count(world.waypoints.len()),
            towers: count(world.towers.len()),
            bullets: count(world.bullets.len()),
            kills: score.kills,
            breaches: score.breaches,
            shots_fired: score.shots_fired,
            hits: score.hits,
            player_health,
        },
        sizes: SizesView {
            monster_size: MONSTER_SIZE,
            waypoint_radius: WAYPOINT_RADIUS,
            tower_radius: TOWER_RADIUS,
            bullet_radius: tuning.bullet_radius,
        },
        events,
    }
}

fn build_monsters(world: &World, max_health: u32) -> Vec<MonsterView> {
    world
        .monsters
        .iter()
        .map(|m| MonsterView {
            position: m.position,
            velocity: m.velocity,
            health: m.health.value,
            health_ratio: ratio(m.health.value as f32, max_health as f32),
            waypoint_index: m.waypoint_index,
        })
        .collect()
}

fn build_towers(world: &World) -> Vec<TowerView> {
    world
        .towers
        .iter()
        .map(|t| TowerView {
            position: t.position,
            range: t.range.value,
            cooldown_progress: ratio(t.timer.value, t.attack_rate.value),
        })
        .collect()
}

/// `part / whole` clamped to 0.0..=1.0. A zero `whole` counts as full.
fn ratio(part: f32, whole: f32) -> f32 {
    if whole <= 0.0 {
        return 1.0;
    }
    (part / whole).clamp(0.0, 1.0)
}

fn count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
