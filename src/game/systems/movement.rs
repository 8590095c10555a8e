//! Player movement system.
//!
//! This module handles moving the player on the grid.

use crate::game::grid::offset;
use crate::game::state::GameState;
use crate::game::types::Position;

/// Move the player by (dx, dy).
/// Returns the new position, or `None` when the target is off the grid and nothing moved.
pub fn move_player(game_state: &mut GameState, dx: isize, dy: isize) -> Option<Position> {
    let new_pos = offset(game_state.player.pos, dx, dy)?;
    game_state.player.pos = new_pos;
    Some(new_pos)
}
