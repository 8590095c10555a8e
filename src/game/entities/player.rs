use crate::game::grid::center;
use crate::game::types::Player;

/// New player standing on the center cell.
pub fn spawn_player() -> Player {
    Player::new(center())
}
