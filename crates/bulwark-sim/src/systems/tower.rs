//! Tower update system: cooldown timer, target scan, firing.

use tracing::debug;

use bulwark_core::components::{Bullet, Damage, Monster, Tower};
use bulwark_core::events::GameEvent;
use bulwark_core::types::Velocity;

use crate::config::Tuning;
use crate::world::World;

/// Advance a tower's timer and fire at most one bullet.
///
/// Targets the first monster in store order that is within range, not the
/// nearest. Towers keep no lock on a target; the scan is repeated every tick.
pub fn update_tower(
    tower: &mut Tower,
    dt: f32,
    monsters: &[Monster],
    bullet_damage: u32,
) -> Option<Bullet> {
    tower.timer.value += dt;

    if tower.timer.value < tower.attack_rate.value {
        return None;
    }

    let target_index = monsters
        .iter()
        .position(|m| tower.position.distance_to(&m.position) <= tower.range.value)?;

    tower.timer.value = 0.0;
    Some(Bullet {
        position: tower.position,
        velocity: Velocity::default(),
        damage: Damage::new(bullet_damage),
        target_index,
    })
}

/// Update every tower, appending fired bullets. Returns the number of shots.
pub fn run(world: &mut World, dt: f32, tuning: &Tuning, events: &mut Vec<GameEvent>) -> u32 {
    let monsters = world.monsters.as_slice();
    let mut shots = 0;

    for (tower_index, tower) in world.towers.iter_mut().enumerate() {
        if let Some(bullet) = update_tower(tower, dt, monsters, tuning.bullet_damage) {
            debug!(tower = tower_index, target = bullet.target_index, "tower fired");
            events.push(GameEvent::BulletFired {
                tower_index,
                target_index: bullet.target_index,
            });
            world.bullets.push(bullet);
            shots += 1;
        }
    }

    shots
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulwark_core::components::{AttackRange, AttackRate, Health, Timer};
    use bulwark_core::types::Position;

    fn tower_at(x: f32, y: f32) -> Tower {
        Tower {
            position: Position::new(x, y),
            range: AttackRange { value: 100.0 },
            attack_rate: AttackRate { value: 1.5 },
            timer: Timer::default(),
        }
    }

    fn monster_at(x: f32, y: f32) -> Monster {
        Monster {
            health: Health::new(100),
            position: Position::new(x, y),
            velocity: Velocity::default(),
            waypoint_index: 0,
            damage: Damage::new(5),
        }
    }

    #[test]
    fn test_cooldown_holds_fire_until_rate_elapsed() {
        let mut tower = tower_at(0.0, 0.0);
        let monsters = [monster_at(50.0, 0.0)];

        // 149 ticks of 10ms = 1.49s.
        for _ in 0..149 {
            assert!(update_tower(&mut tower, 0.01, &monsters, 50).is_none());
        }
        assert!((tower.timer.value - 1.49).abs() < 1e-3);

        let mut fired = 0;
        for _ in 0..2 {
            if update_tower(&mut tower, 0.01, &monsters, 50).is_some() {
                fired += 1;
                assert_eq!(tower.timer.value, 0.0);
            }
        }
        assert_eq!(fired, 1, "fires exactly once at/after 1.5s");
    }

    #[test]
    fn test_fires_at_first_in_range_not_nearest() {
        let mut tower = tower_at(0.0, 0.0);
        tower.timer.value = 2.0;
        let monsters = [
            monster_at(500.0, 0.0), // out of range
            monster_at(90.0, 0.0),  // first in range
            monster_at(10.0, 0.0),  // nearer, but later in store order
        ];

        let bullet = update_tower(&mut tower, 0.0, &monsters, 50).unwrap();
        assert_eq!(bullet.target_index, 1);
        assert_eq!(bullet.position, tower.position);
        assert_eq!(bullet.damage.value, 50);
    }

    #[test]
    fn test_no_target_keeps_timer_running() {
        let mut tower = tower_at(0.0, 0.0);
        let monsters = [monster_at(300.0, 0.0)];

        for _ in 0..3 {
            assert!(update_tower(&mut tower, 1.0, &monsters, 50).is_none());
        }
        assert!((tower.timer.value - 3.0).abs() < 1e-6);

        let monsters = [monster_at(100.0, 0.0)];
        assert!(update_tower(&mut tower, 0.0, &monsters, 50).is_some());
    }

    #[test]
    fn test_run_appends_one_bullet_per_ready_tower() {
        let mut world = World::new();
        world.monsters.push(monster_at(0.0, 0.0));
        let mut ready = tower_at(50.0, 0.0);
        ready.timer.value = 1.5;
        world.towers.push(ready);
        world.towers.push(tower_at(-50.0, 0.0));
        let mut events = Vec::new();

        let shots = run(&mut world, 0.0, &Tuning::default(), &mut events);

        assert_eq!(shots, 1);
        assert_eq!(world.bullets.len(), 1);
        assert_eq!(world.bullets[0].target_index, 0);
        assert_eq!(
            events,
            vec![GameEvent::BulletFired {
                tower_index: 0,
                target_index: 0
            }]
        );
    }
}
