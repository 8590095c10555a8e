//! HTTP and WebSocket routing configuration.
//!
//! `/ws/game` starts a new game for the connecting player, `/ws/game/{game_id}`
//! watches an existing one, and `/games/{game_id}` returns its snapshot as JSON.

use actix_web::web;
use crate::server::game_session::session::{game_snapshot, ws_game, ws_new_game};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/ws/game")
            .to(ws_new_game)
    )
    .service(
        web::resource("/ws/game/{game_id}")
            .to(ws_game)
    )
    .service(
        web::resource("/games/{game_id}")
            .route(web::get().to(game_snapshot))
    );
}
