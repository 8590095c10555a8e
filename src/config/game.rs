/// Game configuration constants.
/// 
/// This module defines the main gameplay parameters such as grid dimension,
/// session length, tick cadences, entity counts and scoring.
use std::time::Duration;

/// Width and height of the square grid.
pub const GRID_SIZE: usize = 8;

/// Seconds on the countdown when a session starts.
pub const SESSION_SECONDS: u32 = 60;

/// Period of the countdown tick.
pub const COUNTDOWN_INTERVAL: Duration = Duration::from_secs(1);

/// Period of the hazard motion / policy respawn tick.
pub const HAZARD_INTERVAL: Duration = Duration::from_millis(800);

/// Policies placed on the board at setup.
pub const INITIAL_POLICY_COUNT: usize = 6;

/// Respawn only happens while fewer than this many policies are on the board.
pub const MAX_POLICY_COUNT: usize = 6;

/// Misinformation clouds placed at setup. They are never removed.
pub const HAZARD_COUNT: usize = 2;

/// Chance per hazard tick that a missing policy is respawned.
pub const POLICY_RESPAWN_CHANCE: f64 = 0.25;

/// Upper bound on samples taken when looking for an empty cell.
pub const PLACEMENT_MAX_TRIES: usize = 5000;

pub const PICKUP_REWARD: u32 = 5;
pub const DELIVERY_REWARD: u32 = 20;
pub const WRONG_DELIVERY_PENALTY: u32 = 3;
pub const HAZARD_PENALTY: u32 = 8;
