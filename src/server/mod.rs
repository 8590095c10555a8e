// src/server/mod.rs

//! Server layer root module.
//!
//! Actix adapters around the game simulation:
//! - Application state management
//! - HTTP/WebSocket routing
//! - Game session orchestration (session actor, tick timers, player input)

pub mod state;
pub mod router;
pub mod game_session;
pub mod ws_error;
