//! Policy item logic.
//!
//! Placement of policies on the board, periodic respawn and pickup.

use rand::Rng;

use crate::config::game::{MAX_POLICY_COUNT, POLICY_RESPAWN_CHANCE};
use crate::game::grid::random_empty_cell;
use crate::game::types::{PolicyItem, PolicyKind, Position};

pub fn random_kind<R: Rng>(rng: &mut R) -> PolicyKind {
    PolicyKind::ALL[rng.random_range(0..PolicyKind::ALL.len())]
}

/// Place `count` policies of random kinds, each on a cell not used by the player,
/// `occupied`, or a policy placed earlier in the same call.
pub fn spawn_random_policies<R: Rng>(
    rng: &mut R,
    player: Position,
    occupied: &[Position],
    count: usize,
) -> Vec<PolicyItem> {
    let mut taken: Vec<Position> = occupied.to_vec();
    let mut policies = Vec::with_capacity(count);
    for _ in 0..count {
        let kind = random_kind(rng);
        let pos = random_empty_cell(rng, player, &taken);
        taken.push(pos);
        policies.push(PolicyItem { pos, kind });
    }
    policies
}

/// Roll for a respawn. Only rolls while the board holds fewer than `MAX_POLICY_COUNT`
/// policies; `occupied` must list every other entity on the board.
pub fn maybe_respawn_policy<R: Rng>(
    rng: &mut R,
    policies: &[PolicyItem],
    player: Position,
    occupied: &[Position],
) -> Option<PolicyItem> {
    if policies.len() >= MAX_POLICY_COUNT || !rng.random_bool(POLICY_RESPAWN_CHANCE) {
        return None;
    }
    let kind = random_kind(rng);
    let mut taken: Vec<Position> = occupied.to_vec();
    taken.extend(policies.iter().map(|p| p.pos));
    let pos = random_empty_cell(rng, player, &taken);
    Some(PolicyItem { pos, kind })
}

/// Remove the policy lying on `pos` and return its kind.
pub fn take_policy_at(policies: &mut Vec<PolicyItem>, pos: Position) -> Option<PolicyKind> {
    let index = policies.iter().position(|p| p.pos == pos)?;
    Some(policies.remove(index).kind)
}
