//! Bullet update system: homing movement, impact and damage.

use tracing::debug;

use bulwark_core::components::{Bullet, Monster};
use bulwark_core::events::GameEvent;
use bulwark_core::geometry;
use bulwark_core::types::Velocity;

use crate::config::Tuning;
use crate::world::World;

/// Result of updating one bullet for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletOutcome {
    InFlight,
    /// Hit the monster in slot `target_index` for `damage`.
    Impacted { target_index: usize, damage: u32 },
    /// No monsters are left to chase.
    Spent,
}

impl BulletOutcome {
    pub fn in_flight(self) -> bool {
        matches!(self, BulletOutcome::InFlight)
    }
}

/// Per-tick removal counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulletTally {
    pub impacted: u32,
    pub spent: u32,
}

/// Move a bullet toward its target and apply damage on contact.
///
/// When the monster store has shrunk below `target_index`, the bullet is
/// retargeted to the last slot, whichever monster now occupies it. This is a
/// deterministic substitution, not a re-acquisition of the intended target.
pub fn update_bullet(
    bullet: &mut Bullet,
    dt: f32,
    monsters: &mut [Monster],
    tuning: &Tuning,
) -> BulletOutcome {
    if monsters.is_empty() {
        return BulletOutcome::Spent;
    }

    if bullet.target_index >= monsters.len() {
        bullet.target_index = monsters.len() - 1;
    }

    let target = &mut monsters[bullet.target_index];
    let velocity = geometry::direction(bullet.position, target.position) * tuning.bullet_speed;
    bullet.velocity = Velocity::from(velocity);
    bullet.position = (bullet.position.to_vec2() + velocity * dt).into();

    if bullet.position.distance_to(&target.position) <= tuning.bullet_radius {
        target.health.apply(bullet.damage);
        return BulletOutcome::Impacted {
            target_index: bullet.target_index,
            damage: bullet.damage.value,
        };
    }

    BulletOutcome::InFlight
}

/// Update every bullet, compacting impacted and spent ones out of the store.
pub fn run(
    world: &mut World,
    dt: f32,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) -> BulletTally {
    let monsters = world.monsters.as_mut_slice();
    let mut tally = BulletTally::default();

    world.bullets.swap_retain(|bullet| {
        let outcome = update_bullet(bullet, dt, monsters, tuning);
        match outcome {
            BulletOutcome::InFlight => {}
            BulletOutcome::Impacted {
                target_index,
                damage,
            } => {
                tally.impacted += 1;
                debug!(
                    target = target_index,
                    damage,
                    remaining = monsters[target_index].health.value,
                    "bullet impact"
                );
                events.push(GameEvent::BulletImpact {
                    target_index,
                    damage,
                });
            }
            BulletOutcome::Spent => tally.spent += 1,
        }
        outcome.in_flight()
    });

    tally
}
