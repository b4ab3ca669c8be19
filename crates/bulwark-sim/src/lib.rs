//! Simulation engine for BULWARK.
//!
//! Owns the entity stores, runs the update systems in a fixed order each tick,
//! and produces `GameStateSnapshot`s for whatever host drives it.

pub mod config;
pub mod engine;
pub mod scenario;
pub mod score;
pub mod store;
pub mod systems;
pub mod world;
pub mod world_setup;

pub use bulwark_core as core;
pub use config::{ConfigError, SimConfig, Tuning};
pub use engine::SimulationEngine;
