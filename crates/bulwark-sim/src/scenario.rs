//! Scenario definitions: starting layouts and wave schedules.
//!
//! A scenario decides where the path runs, which towers are pre-placed and
//! when monsters arrive on their own. Player commands can extend any of them.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use bulwark_core::constants::{INITIAL_WAYPOINT, WORLD_HEIGHT, WORLD_WIDTH};
use bulwark_core::enums::ScenarioId;
use bulwark_core::types::Position;

use crate::systems::wave_spawner::{WaveEntry, WaveSchedule};

/// Horizontal margin kept free at both ends of a generated path.
const SKIRMISH_MARGIN: f32 = 100.0;
/// Perpendicular distance from a path segment's midpoint to its tower.
const SKIRMISH_TOWER_OFFSET: f32 = 60.0;
const SKIRMISH_WAVES: u32 = 4;
const SKIRMISH_WAVE_SPACING_SECS: f64 = 15.0;

/// Everything a scenario puts into a fresh world.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub waypoints: Vec<Position>,
    pub towers: Vec<Position>,
    pub schedule: WaveSchedule,
}

/// Build the layout for a scenario. `seed` only matters for generated ones.
pub fn build_layout(scenario: ScenarioId, seed: u64) -> Layout {
    let layout = match scenario {
        ScenarioId::Sandbox => build_sandbox(),
        ScenarioId::Serpentine => build_serpentine(),
        ScenarioId::Skirmish => build_skirmish(seed),
    };
    debug!(
        ?scenario,
        seed,
        waypoints = layout.waypoints.len(),
        towers = layout.towers.len(),
        monsters = layout.schedule.total_monsters(),
        "layout built"
    );
    layout
}

/// Sandbox: a lone starting waypoint. The player builds everything else.
fn build_sandbox() -> Layout {
    Layout {
        waypoints: vec![Position::new(INITIAL_WAYPOINT.0, INITIAL_WAYPOINT.1)],
        ..Default::default()
    }
}

/// Serpentine: three horizontal passes across the field, a tower row above
/// each of the lower two passes, three waves of growing density.
fn build_serpentine() -> Layout {
    let waypoints = [
        (150.0, 150.0),
        (1450.0, 150.0),
        (1450.0, 450.0),
        (150.0, 450.0),
        (150.0, 750.0),
        (1450.0, 750.0),
    ];
    let towers = [
        (400.0, 240.0),
        (800.0, 240.0),
        (1200.0, 240.0),
        (400.0, 540.0),
        (800.0, 540.0),
        (1200.0, 540.0),
    ];

    Layout {
        waypoints: to_positions(&waypoints),
        towers: to_positions(&towers),
        schedule: WaveSchedule {
            waves: vec![
                // Wave 1 (t=0): 5 monsters, one per second
                WaveEntry::new(0.0, 5, 1.0),
                // Wave 2 (t=20s): 8 monsters
                WaveEntry::new(20.0, 8, 0.75),
                // Wave 3 (t=40s): 12 monsters, tightly packed
                WaveEntry::new(40.0, 12, 0.5),
            ],
        },
    }
}

/// Skirmish: a left-to-right path with random heights, one tower beside each
/// segment, and four waves of random size. Same seed, same layout.
fn build_skirmish(seed: u64) -> Layout {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let count: usize = rng.gen_range(5..=8);
    let span = WORLD_WIDTH - 2.0 * SKIRMISH_MARGIN;
    let step = span / (count - 1) as f32;
    let waypoints: Vec<Position> = (0..count)
        .map(|i| {
            let x = SKIRMISH_MARGIN + step * i as f32;
            let y = rng.gen_range(SKIRMISH_MARGIN..WORLD_HEIGHT - SKIRMISH_MARGIN);
            Position::new(x, y)
        })
        .collect();

    let towers = waypoints
        .windows(2)
        .map(|pair| {
            let (a, b) = (pair[0].to_vec2(), pair[1].to_vec2());
            let midpoint = (a + b) * 0.5;
            let normal = (b - a).perp().normalize_or_zero();
            let side = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            Position::from(midpoint + normal * SKIRMISH_TOWER_OFFSET * side)
        })
        .collect();

    let waves = (0..SKIRMISH_WAVES)
        .map(|i| {
            let start = f64::from(i) * SKIRMISH_WAVE_SPACING_SECS;
            let count = rng.gen_range(4..=10);
            let interval = rng.gen_range(0.5..1.2);
            WaveEntry::new(start, count, interval)
        })
        .collect();

    Layout {
        waypoints,
        towers,
        schedule: WaveSchedule { waves },
    }
}

fn to_positions(points: &[(f32, f32)]) -> Vec<Position> {
    points.iter().map(|&(x, y)| Position::new(x, y)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_field(p: &Position) -> bool {
        (0.0..=WORLD_WIDTH).contains(&p.x) && (0.0..=WORLD_HEIGHT).contains(&p.y)
    }

    #[test]
    fn test_sandbox_is_single_waypoint() {
        let layout = build_layout(ScenarioId::Sandbox, 0);
        assert_eq!(layout.waypoints, vec![Position::new(150.0, 150.0)]);
        assert!(layout.towers.is_empty());
        assert!(layout.schedule.waves.is_empty());
    }

    #[test]
    fn test_serpentine_layout() {
        let layout = build_layout(ScenarioId::Serpentine, 0);
        assert_eq!(layout.waypoints.len(), 6);
        assert_eq!(layout.towers.len(), 6);
        assert_eq!(layout.schedule.total_monsters(), 25);
        assert!(layout.waypoints.iter().all(in_field));
    }

    #[test]
    fn test_skirmish_is_deterministic_per_seed() {
        let a = build_layout(ScenarioId::Skirmish, 7);
        let b = build_layout(ScenarioId::Skirmish, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn test_skirmish_varies_with_seed() {
        let layouts: Vec<Layout> = (0..8)
            .map(|seed| build_layout(ScenarioId::Skirmish, seed))
            .collect();
        assert!(layouts.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn test_skirmish_shape() {
        for seed in 0..16 {
            let layout = build_layout(ScenarioId::Skirmish, seed);
            let n = layout.waypoints.len();
            assert!((5..=8).contains(&n), "seed {seed}: {n} waypoints");
            assert_eq!(layout.towers.len(), n - 1);
            assert!(layout.waypoints.iter().all(in_field));
            assert!(layout.waypoints.windows(2).all(|w| w[0].x < w[1].x));
            assert_eq!(layout.schedule.waves.len(), 4);
            for wave in &layout.schedule.waves {
                assert!((4..=10).contains(&wave.count));
                assert!(wave.interval_secs >= 0.5 && wave.interval_secs < 1.2);
            }
        }
    }

    #[test]
    fn test_skirmish_towers_sit_beside_segments() {
        let layout = build_layout(ScenarioId::Skirmish, 3);
        for (pair, tower) in layout.waypoints.windows(2).zip(&layout.towers) {
            let mid = Position::new((pair[0].x + pair[1].x) / 2.0, (pair[0].y + pair[1].y) / 2.0);
            assert!((mid.distance_to(tower) - SKIRMISH_TOWER_OFFSET).abs() < 1e-2);
        }
    }
}
