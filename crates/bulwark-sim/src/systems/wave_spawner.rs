//! Wave spawning system: turns a timed schedule into spawn requests.

use tracing::{debug, warn};

use bulwark_core::events::GameEvent;

use crate::config::Tuning;
use crate::world::World;
use crate::world_setup;

/// A group of monsters released one at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveEntry {
    /// Simulated second at which the first monster spawns.
    pub start_secs: f64,
    /// Monsters in this wave.
    pub count: u32,
    /// Seconds between consecutive spawns.
    pub interval_secs: f64,
    /// Monsters already released.
    pub spawned: u32,
}

impl WaveEntry {
    pub fn new(start_secs: f64, count: u32, interval_secs: f64) -> Self {
        Self {
            start_secs,
            count,
            interval_secs,
            spawned: 0,
        }
    }

    fn next_due_secs(&self) -> f64 {
        self.start_secs + f64::from(self.spawned) * self.interval_secs
    }

    pub fn is_done(&self) -> bool {
        self.spawned >= self.count
    }
}

/// The complete wave schedule for a session. Empty for player-driven play.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaveSchedule {
    pub waves: Vec<WaveEntry>,
}

impl WaveSchedule {
    /// Total number of monsters across all waves.
    pub fn total_monsters(&self) -> u32 {
        self.waves.iter().map(|w| w.count).sum()
    }

    /// Whether every wave has released all of its monsters.
    pub fn is_exhausted(&self) -> bool {
        self.waves.iter().all(WaveEntry::is_done)
    }
}

/// Release every monster whose spawn time has come. Returns the number spawned.
pub fn run(
    world: &mut World,
    schedule: &mut WaveSchedule,
    elapsed_secs: f64,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) -> u32 {
    let mut spawned = 0;
    for (wave_index, wave) in schedule.waves.iter_mut().enumerate() {
        while !wave.is_done() && elapsed_secs >= wave.next_due_secs() {
            wave.spawned += 1;
            match world_setup::spawn_monster(world, tuning) {
                Ok(index) => {
                    let position = world.monsters[index].position;
                    debug!(wave = wave_index, index, "wave monster spawned");
                    events.push(GameEvent::MonsterSpawned { position });
                    spawned += 1;
                }
                Err(err) => warn!(wave = wave_index, %err, "wave spawn skipped"),
            }
        }
    }
    spawned
}
