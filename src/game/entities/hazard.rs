//! Misinformation cloud logic.
//!
//! Clouds are placed once at setup and then wander one cell per tick.

use rand::Rng;

use crate::game::grid::{random_empty_cell, step};
use crate::game::types::{CommunityMarker, Direction, Hazard, Position};

pub fn spawn_hazards<R: Rng>(
    rng: &mut R,
    player: Position,
    occupied: &[Position],
    count: usize,
) -> Vec<Hazard> {
    (0..count)
        .map(|_| Hazard { pos: random_empty_cell(rng, player, occupied) })
        .collect()
}

/// Move every hazard one step in a random cardinal direction.
///
/// A single attempt per hazard: if the target is off the grid or holds a community
/// marker the hazard stays put this tick. Hazards may overlap the player, policies
/// and each other.
pub fn move_hazards<R: Rng>(
    rng: &mut R,
    hazards: &mut [Hazard],
    markers: &[CommunityMarker],
) {
    for hazard in hazards.iter_mut() {
        let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        if let Some(next) = step(hazard.pos, direction) {
            if !markers.iter().any(|m| m.pos == next) {
                hazard.pos = next;
            }
        }
    }
}
