//! Game loop thread: runs the simulation engine and publishes snapshots.
//!
//! The engine is created inside this thread and never leaves it. Commands
//! arrive via `mpsc` channel. Snapshots are stored in shared state for
//! synchronous polling and optionally written to stdout as JSON lines.

use std::io::{self, Write};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info, warn};

use bulwark_core::enums::GamePhase;
use bulwark_core::state::GameStateSnapshot;
use bulwark_sim::SimulationEngine;

use crate::config::AppConfig;
use crate::state::GameLoopCommand;

/// Why the loop returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StopReason {
    Shutdown,
    Disconnected,
    TickLimit,
    GameOver,
}

/// Final tallies handed back when the loop thread is joined.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoopSummary {
    pub reason: StopReason,
    /// Loop iterations, including ones where the engine was paused.
    pub ticks_run: u64,
    pub sim_tick: u64,
    pub elapsed_secs: f64,
    pub phase: GamePhase,
    pub kills: u32,
    pub breaches: u32,
    pub shots_fired: u32,
    pub hits: u32,
    /// Hits over shots fired; 0.0 if nothing was fired.
    pub accuracy: f32,
    pub player_health: u32,
}

impl LoopSummary {
    fn new(reason: StopReason, ticks_run: u64, engine: &SimulationEngine) -> Self {
        let score = engine.score();
        Self {
            reason,
            ticks_run,
            sim_tick: engine.time().tick,
            elapsed_secs: engine.time().elapsed_secs,
            phase: engine.phase(),
            kills: score.kills,
            breaches: score.breaches,
            shots_fired: score.shots_fired,
            hits: score.hits,
            accuracy: score.accuracy(),
            player_health: engine.player_health(),
        }
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the session layer and the thread handle.
pub fn spawn_game_loop(
    config: AppConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<LoopSummary>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("bulwark-game-loop".into())
        .spawn(move || {
            let mut stdout = io::stdout();
            run_game_loop(&config, cmd_rx, &latest_snapshot, &mut stdout)
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown, channel disconnect, the tick limit or
/// (if configured) game over.
pub fn run_game_loop(
    config: &AppConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    out: &mut dyn Write,
) -> LoopSummary {
    let mut engine = SimulationEngine::new(config.sim.clone());
    engine.queue_commands(config.commands.iter().cloned());
    publish(latest_snapshot, engine.snapshot());

    let dt = config.dt();
    let tick_duration = config.tick_duration();
    let mut emit = config.emit_snapshots;
    let mut ticks_run = 0u64;
    let mut next_tick_time = Instant::now();

    let reason = loop {
        // 1. Drain all pending commands
        if let Some(reason) = drain_commands(&cmd_rx, &mut engine) {
            break reason;
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick(dt);
        ticks_run += 1;

        // 3. Emit snapshot as a JSON line
        if emit {
            if let Err(err) = write_snapshot(out, &snapshot) {
                warn!(%err, "snapshot output failed; disabling emission");
                emit = false;
            }
        }

        // 4. Store latest snapshot for synchronous polling
        publish(latest_snapshot, snapshot);

        // 5. Stop conditions
        if config.max_ticks.is_some_and(|max| ticks_run >= max) {
            break StopReason::TickLimit;
        }
        if config.stop_on_game_over && engine.phase() == GamePhase::GameOver {
            break StopReason::GameOver;
        }

        // 6. Sleep until next tick
        if config.realtime {
            next_tick_time += tick_duration;
            next_tick_time = pace(next_tick_time, tick_duration);
        }
    };

    let summary = LoopSummary::new(reason, ticks_run, &engine);
    info!(
        reason = ?summary.reason,
        ticks = summary.ticks_run,
        kills = summary.kills,
        breaches = summary.breaches,
        player_health = summary.player_health,
        "game loop stopped"
    );
    summary
}

/// Forward every pending command. Returns a stop reason if the loop should end.
fn drain_commands(
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    engine: &mut SimulationEngine,
) -> Option<StopReason> {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                debug!(?cmd, "command received");
                engine.queue_command(cmd);
            }
            Ok(GameLoopCommand::Shutdown) => return Some(StopReason::Shutdown),
            Err(mpsc::TryRecvError::Empty) => return None,
            Err(mpsc::TryRecvError::Disconnected) => return Some(StopReason::Disconnected),
        }
    }
}

fn write_snapshot(out: &mut dyn Write, snapshot: &GameStateSnapshot) -> io::Result<()> {
    serde_json::to_writer(&mut *out, snapshot)?;
    out.write_all(b"\n")
}

fn publish(latest_snapshot: &Mutex<Option<GameStateSnapshot>>, snapshot: GameStateSnapshot) {
    if let Ok(mut lock) = latest_snapshot.lock() {
        *lock = Some(snapshot);
    }
}

/// Sleep until `next_tick_time`. Returns the deadline to continue from,
/// which is reset to now when the loop has fallen far behind.
fn pace(next_tick_time: Instant, tick_duration: Duration) -> Instant {
    let now = Instant::now();
    if next_tick_time > now {
        std::thread::sleep(next_tick_time - now);
        next_tick_time
    } else if now - next_tick_time > tick_duration * 2 {
        // Too far behind: reset to avoid a catch-up spiral
        now
    } else {
        next_tick_time
    }
}
