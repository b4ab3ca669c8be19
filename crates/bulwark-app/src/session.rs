//! Session API over the shared `AppState`.
//!
//! These functions bridge callers (the CLI, embedding hosts) to the game loop
//! thread via its command channel and the shared latest snapshot.

use bulwark_core::commands::PlayerCommand;
use bulwark_core::state::GameStateSnapshot;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::game_loop::{self, LoopSummary};
use crate::state::{AppState, GameLoopCommand};

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation(state: &AppState, config: AppConfig) -> Result<(), AppError> {
    let mut running = state.running.lock()?;

    if *running {
        return Err(AppError::AlreadyRunning);
    }

    let (cmd_tx, handle) = game_loop::spawn_game_loop(config, state.latest_snapshot.clone())?;

    *state.command_tx.lock()? = Some(cmd_tx);
    *state.loop_handle.lock()? = Some(handle);
    *running = true;

    Ok(())
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), AppError> {
    let tx_lock = state.command_tx.lock()?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|_| AppError::ChannelClosed),
        None => Err(AppError::NotStarted),
    }
}

/// Get the latest snapshot synchronously (for polling / initial state).
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, AppError> {
    let lock = state.latest_snapshot.lock()?;
    Ok(lock.clone())
}

/// Ask the loop to shut down and wait for it.
pub fn stop_simulation(state: &AppState) -> Result<LoopSummary, AppError> {
    if let Some(tx) = state.command_tx.lock()?.as_ref() {
        // The loop may already have stopped on its own; joining still works.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    wait_for_simulation(state)
}

/// Block until the loop stops on its own (tick limit, game over) and collect its summary.
pub fn wait_for_simulation(state: &AppState) -> Result<LoopSummary, AppError> {
    let handle = state.loop_handle.lock()?.take().ok_or(AppError::NotStarted)?;
    let summary = handle.join().map_err(|_| AppError::LoopPanicked)?;

    *state.command_tx.lock()? = None;
    *state.running.lock()? = false;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_loop::StopReason;

    #[test]
    fn test_commands_require_running_loop() {
        let state = AppState::new();
        assert!(matches!(
            send_command(&state, PlayerCommand::SpawnMonster),
            Err(AppError::NotStarted)
        ));
        assert!(matches!(wait_for_simulation(&state), Err(AppError::NotStarted)));
        assert!(get_snapshot(&state).unwrap().is_none());
    }

    #[test]
    fn test_start_twice_is_rejected() {
        let state = AppState::new();
        let config = AppConfig {
            realtime: true,
            ..Default::default()
        };

        start_simulation(&state, config.clone()).unwrap();
        assert!(matches!(
            start_simulation(&state, config),
            Err(AppError::AlreadyRunning)
        ));

        let summary = stop_simulation(&state).unwrap();
        assert_eq!(summary.reason, StopReason::Shutdown);
        assert!(!*state.running.lock().unwrap());
    }

    #[test]
    fn test_run_to_tick_limit_then_restart() {
        let state = AppState::new();
        let config = AppConfig {
            max_ticks: Some(30),
            ..Default::default()
        };

        start_simulation(&state, config.clone()).unwrap();
        let summary = wait_for_simulation(&state).unwrap();
        assert_eq!(summary.reason, StopReason::TickLimit);
        assert_eq!(summary.sim_tick, 30);

        let snapshot = get_snapshot(&state).unwrap().unwrap();
        assert_eq!(snapshot.time.tick, 30);

        // A finished session can be started again.
        start_simulation(&state, config).unwrap();
        assert_eq!(wait_for_simulation(&state).unwrap().ticks_run, 30);
    }

    #[test]
    fn test_send_after_loop_exit_reports_closed_channel() {
        let state = AppState::new();
        start_simulation(
            &state,
            AppConfig {
                max_ticks: Some(1),
                ..Default::default()
            },
        )
        .unwrap();

        // Wait for the loop to finish without clearing the sender.
        let handle = state.loop_handle.lock().unwrap().take().unwrap();
        handle.join().unwrap();

        assert!(matches!(
            send_command(&state, PlayerCommand::Pause),
            Err(AppError::ChannelClosed)
        ));
    }
}
