//! Host configuration: JSON file plus CLI overrides.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use bulwark_core::commands::PlayerCommand;
use bulwark_core::constants::TICK_RATE;
use bulwark_sim::SimConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Invalid(#[from] bulwark_sim::ConfigError),
}

/// Everything the headless host needs to run a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sim: SimConfig,
    /// Ticks per second of simulated time. Each tick advances `1 / tick_rate` seconds.
    pub tick_rate: u32,
    /// Stop after this many ticks. `None` runs until stopped.
    pub max_ticks: Option<u64>,
    /// Pace ticks against the wall clock instead of running flat out.
    pub realtime: bool,
    pub stop_on_game_over: bool,
    /// Write every snapshot to stdout as one JSON line.
    pub emit_snapshots: bool,
    /// Commands queued before the first tick, e.g. a path and towers for the sandbox.
    pub commands: Vec<PlayerCommand>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            tick_rate: TICK_RATE,
            max_ticks: None,
            realtime: false,
            stop_on_game_over: true,
            emit_snapshots: false,
            commands: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Read and validate a config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig =
            serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate == 0 {
            return Err(bulwark_sim::ConfigError {
                field: "tick_rate",
                reason: "must be at least 1",
            }
            .into());
        }
        self.sim.validate()?;
        Ok(())
    }

    /// Simulated seconds per tick.
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_rate.max(1) as f32
    }

    /// Wall-clock duration of one tick when running in realtime.
    pub fn tick_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.tick_rate.max(1)))
    }
}
