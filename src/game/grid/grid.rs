use log::warn;
use rand::Rng;

use crate::config::game::{GRID_SIZE, PLACEMENT_MAX_TRIES};
use crate::game::types::{Direction, Position};

pub fn in_bounds(x: isize, y: isize) -> bool {
    x >= 0 && y >= 0 && (x as usize) < GRID_SIZE && (y as usize) < GRID_SIZE
}

/// Center cell of the grid, where the player starts.
pub fn center() -> Position {
    Position::new(GRID_SIZE / 2, GRID_SIZE / 2)
}

/// Neighbour of `pos` offset by (dx, dy), or `None` if it falls off the grid.
pub fn offset(pos: Position, dx: isize, dy: isize) -> Option<Position> {
    let x = pos.x as isize + dx;
    let y = pos.y as isize + dy;
    if in_bounds(x, y) {
        Some(Position::new(x as usize, y as usize))
    } else {
        None
    }
}

/// Neighbour of `pos` one step in `direction`.
pub fn step(pos: Position, direction: Direction) -> Option<Position> {
    let (dx, dy) = direction.delta();
    offset(pos, dx, dy)
}

/// Sample cells uniformly until one differs from `player` and every `excluded` position.
///
/// Gives up after `PLACEMENT_MAX_TRIES` samples and returns the last one, which may
/// collide. Callers must tolerate that rare overlap.
pub fn random_empty_cell<R: Rng>(
    rng: &mut R,
    player: Position,
    excluded: &[Position],
) -> Position {
    let mut pos = Position::new(0, 0);
    for _ in 0..PLACEMENT_MAX_TRIES {
        pos = Position::new(rng.random_range(0..GRID_SIZE), rng.random_range(0..GRID_SIZE));
        if pos != player && !excluded.contains(&pos) {
            return pos;
        }
    }
    warn!("[Grid] No empty cell found after {} tries, using ({}, {})", PLACEMENT_MAX_TRIES, pos.x, pos.y);
    pos
}
