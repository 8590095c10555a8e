use actix::{Actor, ActorContext, Addr, AsyncContext, Handler, StreamHandler};
use actix_web::{HttpRequest, HttpResponse, web, Error, error};
use actix_web::http::StatusCode;
use actix_web_actors::ws;
use log::{debug, warn};
use uuid::Uuid;

use crate::server::game_session::server::{CreateGame, GameSession, GetGameSession};
use crate::server::game_session::messages::{
    ClientAction, GetSnapshot, ProcessClientMessage, RegisterSession, ServerWsMessage, UnregisterSession,
};
use crate::server::state::AppState;
use crate::server::ws_error::{http_error_response, ws_error_message};

/// One WebSocket connection to a game. Players drive the game, spectators only watch.
pub struct GameSessionActor {
    pub game_id: Uuid,
    pub connection_id: Uuid,
    pub is_player: bool,
    pub session_addr: Addr<GameSession>,
}

impl Actor for GameSessionActor {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        self.session_addr.do_send(RegisterSession {
            connection_id: self.connection_id,
            addr: ctx.address(),
            is_player: self.is_player,
        });
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        debug!("[Ws] Connection {} left game {}", self.connection_id, self.game_id);
        self.session_addr.do_send(UnregisterSession { connection_id: self.connection_id });
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for GameSessionActor {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => {
                if !self.is_player {
                    ctx.text(ws_error_message(
                        "SPECTATOR_READ_ONLY",
                        "Spectators cannot send commands",
                        Some(&self.game_id.to_string()),
                    ));
                    return;
                }
                let action: ClientAction = match serde_json::from_str(&text) {
                    Ok(action) => action,
                    Err(e) => {
                        warn!("[Ws] Invalid command from {}: {}", self.connection_id, e);
                        ctx.text(ws_error_message("INVALID_ACTION", "Invalid command", Some(&*text)));
                        return;
                    }
                };
                self.session_addr.do_send(ProcessClientMessage {
                    msg: action,
                    connection_id: self.connection_id,
                });
            }
            Ok(ws::Message::Ping(payload)) => ctx.pong(&payload),
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Err(e) => {
                warn!("[Ws] Protocol error on {}: {}", self.connection_id, e);
                ctx.stop();
            }
            _ => (),
        }
    }
}

impl Handler<ServerWsMessage> for GameSessionActor {
    type Result = ();

    fn handle(&mut self, msg: ServerWsMessage, ctx: &mut Self::Context) -> Self::Result {
        match serde_json::to_string(&msg) {
            Ok(text) => ctx.text(text),
            Err(_) => ctx.text(ws_error_message("SERIALIZATION", "Failed to serialize game state", None)),
        }
    }
}

fn parse_game_id(req: &HttpRequest) -> Result<Uuid, Error> {
    let game_id = req.match_info().get("game_id").unwrap_or_default();
    Uuid::parse_str(game_id).map_err(error::ErrorBadRequest)
}

/// Start a fresh game and connect to it as its player.
pub async fn ws_new_game(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let (game_id, session_addr) = data.game_session_manager
        .send(CreateGame)
        .await
        .map_err(error::ErrorInternalServerError)?;

    ws::start(
        GameSessionActor {
            game_id,
            connection_id: Uuid::new_v4(),
            is_player: true,
            session_addr,
        },
        &req,
        stream,
    )
}

/// Watch an existing game.
pub async fn ws_game(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let game_id = parse_game_id(&req)?;
    let session_addr = data.game_session_manager
        .send(GetGameSession { game_id })
        .await
        .map_err(error::ErrorInternalServerError)?
        .map_err(error::ErrorNotFound)?;

    ws::start(
        GameSessionActor {
            game_id,
            connection_id: Uuid::new_v4(),
            is_player: false,
            session_addr,
        },
        &req,
        stream,
    )
}

/// Current snapshot of a game as JSON.
pub async fn game_snapshot(
    req: HttpRequest,
    data: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let game_id = parse_game_id(&req)?;
    let session_addr = match data.game_session_manager
        .send(GetGameSession { game_id })
        .await
        .map_err(error::ErrorInternalServerError)?
    {
        Ok(addr) => addr,
        Err(message) => {
            return Ok(http_error_response(
                "GAME_NOT_FOUND",
                &message,
                Some(&game_id.to_string()),
                StatusCode::NOT_FOUND,
            ));
        }
    };

    let snapshot = session_addr
        .send(GetSnapshot)
        .await
        .map_err(error::ErrorInternalServerError)?;
    Ok(HttpResponse::Ok().json(snapshot))
}
