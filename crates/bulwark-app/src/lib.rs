//! BULWARK headless host.
//!
//! Wires the simulation engine to a game-loop thread, a command channel and
//! a shared latest-snapshot slot, and loads host configuration.

pub mod config;
pub mod error;
pub mod game_loop;
pub mod session;
pub mod state;

pub use bulwark_core as core;
pub use error::AppError;
