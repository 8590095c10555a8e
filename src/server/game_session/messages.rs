use actix::prelude::*;
use serde::{Serialize, Deserialize};
use uuid::Uuid;

use super::session::GameSessionActor;
use crate::game::snapshot::{EndSummary, GameSnapshot};
use crate::game::types::Direction;

/// Commands a player can send over the WebSocket.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientAction {
    Move(Direction),
    Restart,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct ProcessClientMessage {
    pub msg: ClientAction,
    pub connection_id: Uuid,
}

/// Frames sent to clients.
#[derive(Message, Serialize, Clone, Debug)]
#[rtype(result = "()")]
#[serde(tag = "action", content = "data")]
pub enum ServerWsMessage {
    Joined {
        game_id: Uuid,
        is_player: bool,
    },
    State(GameSnapshot),
    Ended(EndSummary),
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct RegisterSession {
    pub connection_id: Uuid,
    pub addr: Addr<GameSessionActor>,
    pub is_player: bool,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct UnregisterSession {
    pub connection_id: Uuid,
}

#[derive(Message)]
#[rtype(result = "GameSnapshot")]
pub struct GetSnapshot;
