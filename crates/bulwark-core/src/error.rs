//! Errors raised while applying player commands.
//!
//! None of these halt the simulation; the engine logs them and reports a
//! `CommandRejected` event.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("cannot spawn a monster: no waypoints exist")]
    NoWaypoints,
    #[error("position ({x}, {y}) is not finite")]
    NonFinitePosition { x: f32, y: f32 },
    #[error("the session is over; reset before issuing {0}")]
    GameOver(&'static str),
    #[error("time scale {0} is not a finite number")]
    InvalidTimeScale(f32),
}
