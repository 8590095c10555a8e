//! Game simulation.
//!
//! Pure, single-threaded session state: entities, interaction rules, timers and
//! snapshots. Nothing in here knows about actors or sockets.

pub mod types;
pub mod state;
pub mod session;
pub mod snapshot;

pub mod entities;
pub mod grid;
pub mod systems;

#[cfg(test)]
mod tests;
