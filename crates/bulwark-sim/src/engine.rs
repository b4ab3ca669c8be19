//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the world, processes player commands, runs all
//! systems in a fixed order, and produces `GameStateSnapshot`s. Completely
//! headless, enabling deterministic testing.

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use bulwark_core::commands::PlayerCommand;
use bulwark_core::components::Health;
use bulwark_core::constants::MAX_TIME_SCALE;
use bulwark_core::enums::GamePhase;
use bulwark_core::error::CommandError;
use bulwark_core::events::GameEvent;
use bulwark_core::state::GameStateSnapshot;
use bulwark_core::types::{Position, SimTime};

use crate::config::SimConfig;
use crate::scenario;
use crate::score::ScoreState;
use crate::systems;
use crate::systems::wave_spawner::WaveSchedule;
use crate::world::World;
use crate::world_setup;

/// The simulation engine. Owns the world and all session state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    time: SimTime,
    phase: GamePhase,
    time_scale: f32,
    player_health: Health,
    score: ScoreState,
    wave_schedule: WaveSchedule,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new engine and lay out the configured scenario.
    ///
    /// The config is expected to have passed [`SimConfig::validate`]; an
    /// out-of-range time scale is clamped rather than rejected.
    pub fn new(config: SimConfig) -> Self {
        let mut engine = Self {
            time_scale: clamp_time_scale(config.time_scale),
            player_health: Health::new(config.player_health),
            config,
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            score: ScoreState::default(),
            wave_schedule: WaveSchedule::default(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        };
        engine.start_session();
        engine
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt` seconds and return the resulting snapshot.
    ///
    /// Queued commands are applied first, in arrival order. Systems only run
    /// while the phase is `Active` and the scaled `dt` is positive; a finished
    /// session stays frozen until a `Reset` command arrives. Negative or
    /// non-finite `dt` counts as zero, and a zero-`dt` tick only applies commands.
    pub fn tick(&mut self, dt: f32) -> GameStateSnapshot {
        self.process_commands();

        let dt = sanitize_dt(dt) * self.time_scale;
        if self.phase == GamePhase::Active && dt > 0.0 {
            self.run_systems(dt);
            self.time.advance(dt);
            self.check_game_over();
        }

        let events = std::mem::take(&mut self.events);
        self.build_snapshot(events)
    }

    /// Snapshot of the current state without advancing or draining events.
    pub fn snapshot(&self) -> GameStateSnapshot {
        self.build_snapshot(Vec::new())
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Get a read-only reference to the world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player_health(&self) -> u32 {
        self.player_health.value
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Direct world access for tests that need hand-built layouts.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// (Re)build the world, schedule and counters from the configured scenario.
    fn start_session(&mut self) {
        let layout = scenario::build_layout(self.config.scenario, self.config.seed);
        world_setup::setup_session(&mut self.world, &layout, &self.config.tuning);
        self.wave_schedule = layout.schedule;
        self.time = SimTime::default();
        self.phase = GamePhase::Active;
        self.time_scale = clamp_time_scale(self.config.time_scale);
        self.player_health = Health::new(self.config.player_health);
        self.score = ScoreState::default();

        info!(
            scenario = ?self.config.scenario,
            seed = self.config.seed,
            waypoints = self.world.waypoints.len(),
            towers = self.world.towers.len(),
            scheduled_monsters = self.wave_schedule.total_monsters(),
            "session started"
        );
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(err) = self.handle_command(command) {
                warn!(%err, "command rejected");
                self.events.push(GameEvent::CommandRejected {
                    reason: err.to_string(),
                });
            }
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) -> Result<(), CommandError> {
        match command {
            PlayerCommand::SpawnMonster => {
                self.ensure_running("SpawnMonster")?;
                let index = world_setup::spawn_monster(&mut self.world, &self.config.tuning)?;
                let position = self.world.monsters[index].position;
                debug!(index, "monster spawned");
                self.events.push(GameEvent::MonsterSpawned { position });
            }
            PlayerCommand::AddWaypoint { x, y } => {
                self.ensure_running("AddWaypoint")?;
                let position = Position::new(x, y);
                let index = world_setup::add_waypoint(&mut self.world, position)?;
                debug!(index, x, y, "waypoint added");
                self.events.push(GameEvent::WaypointAdded { index, position });
            }
            PlayerCommand::PlaceTower { x, y } => {
                self.ensure_running("PlaceTower")?;
                let position = Position::new(x, y);
                let index =
                    world_setup::place_tower(&mut self.world, position, &self.config.tuning)?;
                debug!(index, x, y, "tower placed");
                self.events.push(GameEvent::TowerPlaced { index, position });
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                    info!(tick = self.time.tick, "paused");
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                    info!(tick = self.time.tick, "resumed");
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                if !scale.is_finite() {
                    return Err(CommandError::InvalidTimeScale(scale));
                }
                self.time_scale = clamp_time_scale(scale);
                debug!(time_scale = self.time_scale, "time scale set");
            }
            PlayerCommand::Reset => {
                info!(tick = self.time.tick, kills = self.score.kills, "session reset");
                self.start_session();
            }
        }
        Ok(())
    }

    fn ensure_running(&self, command: &'static str) -> Result<(), CommandError> {
        if self.phase == GamePhase::GameOver {
            Err(CommandError::GameOver(command))
        } else {
            Ok(())
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        let tuning = self.config.tuning;

        // 1. Scheduled spawns
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.wave_schedule,
            self.time.elapsed_secs,
            &tuning,
            &mut self.events,
        );
        // 2. Monsters: movement, breaches, removal
        let removed = systems::monster::run(
            &mut self.world,
            dt,
            &mut self.player_health,
            &tuning,
            &mut self.events,
        );
        self.score.kills += removed.removed();
        self.score.breaches += removed.breached;
        // 3. Towers: cooldown and firing
        let shots = systems::tower::run(&mut self.world, dt, &tuning, &mut self.events);
        self.score.shots_fired += shots;
        // 4. Bullets: homing, impact, removal
        let bullets = systems::bullet::run(&mut self.world, dt, &tuning, &mut self.events);
        self.score.hits += bullets.impacted;
    }

    /// Enter `GameOver` once player health is gone. Emits the event exactly once.
    fn check_game_over(&mut self) {
        if !self.player_health.is_depleted() {
            return;
        }
        self.phase = GamePhase::GameOver;
        info!(
            tick = self.time.tick,
            kills = self.score.kills,
            breaches = self.score.breaches,
            "game over"
        );
        self.events.push(GameEvent::GameOver {
            tick: self.time.tick,
            kills: self.score.kills,
        });
    }

    fn build_snapshot(&self, events: Vec<GameEvent>) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.score,
            self.player_health.value,
            &self.config.tuning,
            events,
        )
    }
}

fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt
    } else {
        0.0
    }
}

fn clamp_time_scale(scale: f32) -> f32 {
    if scale.is_finite() {
        scale.clamp(0.0, MAX_TIME_SCALE)
    } else {
        1.0
    }
}
