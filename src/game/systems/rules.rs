//! Interaction rules applied after every player move.
//!
//! Checks run in a fixed order (pickup, delivery, hazard) and are independent of
//! each other: all three may fire on the same cell.

use log::debug;

use crate::config::game::{DELIVERY_REWARD, HAZARD_PENALTY, PICKUP_REWARD, WRONG_DELIVERY_PENALTY};
use crate::game::entities::{marker_at, take_policy_at};
use crate::game::state::GameState;
use crate::game::types::EventMessage;

pub fn apply_player_rules(game_state: &mut GameState) {
    try_pickup(game_state);
    try_deliver(game_state);
    check_hazard_collision(game_state);
}

fn try_pickup(game_state: &mut GameState) {
    let pos = game_state.player.pos;
    if let Some(kind) = take_policy_at(&mut game_state.policies, pos) {
        game_state.bag.push(kind);
        game_state.score += PICKUP_REWARD;
        game_state.message = Some(EventMessage::info(format!("Picked up {}.", kind)));
        debug!("[Rules] Picked up {} at ({}, {})", kind, pos.x, pos.y);
    }
}

fn try_deliver(game_state: &mut GameState) {
    let Some(community) = marker_at(&game_state.communities, game_state.player.pos).map(|m| m.community) else {
        return;
    };
    // Satisfied needs are left alone: no score change, no message.
    let Some(need) = game_state.needs.iter_mut().find(|n| n.community == community && !n.satisfied) else {
        return;
    };

    match game_state.bag.iter().position(|kind| *kind == need.required) {
        Some(index) => {
            game_state.bag.remove(index);
            need.satisfied = true;
            game_state.score += DELIVERY_REWARD;
            game_state.message = Some(EventMessage::success(format!("Delivered to {}.", community.label())));
            debug!("[Rules] Need of community {:?} satisfied with {}", community, need.required);
        }
        None => {
            game_state.score = game_state.score.saturating_sub(WRONG_DELIVERY_PENALTY);
            game_state.message = Some(EventMessage::warning("No matching policy for this community yet."));
        }
    }
}

fn check_hazard_collision(game_state: &mut GameState) {
    let pos = game_state.player.pos;
    if game_state.hazards.iter().any(|h| h.pos == pos) {
        game_state.score = game_state.score.saturating_sub(HAZARD_PENALTY);
        game_state.message = Some(EventMessage::warning("Hit by misinformation! Score reduced."));
    }
}
