use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bulwark_app::config::AppConfig;
use bulwark_app::session;
use bulwark_app::state::AppState;
use bulwark_core::enums::ScenarioId;

/// Headless tower-defense simulation.
#[derive(Debug, Parser)]
#[command(name = "bulwark", version)]
struct Args {
    /// JSON config file. Missing fields take their defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// RNG seed for generated scenarios.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum)]
    scenario: Option<ScenarioArg>,
    /// Stop after this many ticks.
    #[arg(long)]
    ticks: Option<u64>,
    /// Pace ticks against the wall clock.
    #[arg(long)]
    realtime: bool,
    /// Print every snapshot to stdout as a JSON line.
    #[arg(long)]
    emit_snapshots: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScenarioArg {
    Sandbox,
    Serpentine,
    Skirmish,
}

impl From<ScenarioArg> for ScenarioId {
    fn from(arg: ScenarioArg) -> Self {
        match arg {
            ScenarioArg::Sandbox => ScenarioId::Sandbox,
            ScenarioArg::Serpentine => ScenarioId::Serpentine,
            ScenarioArg::Skirmish => ScenarioId::Skirmish,
        }
    }
}

impl Args {
    fn into_config(self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.sim.seed = seed;
        }
        if let Some(scenario) = self.scenario {
            config.sim.scenario = scenario.into();
        }
        if let Some(ticks) = self.ticks {
            config.max_ticks = Some(ticks);
        }
        config.realtime |= self.realtime;
        config.emit_snapshots |= self.emit_snapshots;
        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only snapshots.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Args::parse().into_config()?;
    if config.max_ticks.is_none() && !config.realtime {
        warn!("no tick limit and not realtime; running until game over");
    }
    info!(
        scenario = ?config.sim.scenario,
        seed = config.sim.seed,
        tick_rate = config.tick_rate,
        max_ticks = ?config.max_ticks,
        "starting simulation"
    );

    let state = AppState::new();
    session::start_simulation(&state, config).context("failed to start simulation")?;
    let summary = session::wait_for_simulation(&state).context("game loop failed")?;

    info!(
        reason = ?summary.reason,
        sim_tick = summary.sim_tick,
        elapsed_secs = summary.elapsed_secs,
        kills = summary.kills,
        breaches = summary.breaches,
        shots_fired = summary.shots_fired,
        accuracy = summary.accuracy,
        player_health = summary.player_health,
        "simulation finished"
    );
    Ok(())
}
