//! Systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! They keep no state of their own; the engine calls them in a fixed order.

pub mod bullet;
pub mod monster;
pub mod snapshot;
pub mod tower;
pub mod wave_spawner;
