use actix::prelude::*;
use std::collections::HashMap;
use actix::MessageResult;
use uuid::Uuid;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

use crate::config::server::ORPHAN_SESSION_TIMEOUT;
use crate::game::session::{Scheduler, Session, Tick, Transition};
use crate::game::systems::{render_board, render_hud};
use crate::server::game_session::session::GameSessionActor;
use crate::server::game_session::messages::{
    ClientAction, GetSnapshot, ProcessClientMessage, RegisterSession, ServerWsMessage, UnregisterSession,
};

/// One running game: the simulation plus every connection watching it.
pub struct GameSession {
    pub game_id: Uuid,
    session: Session<SpawnHandle>,
    players: HashMap<Uuid, Addr<GameSessionActor>>,
    spectators: HashMap<Uuid, Addr<GameSessionActor>>,
    manager: Addr<GameSessionManager>,
}

/// Periodic ticks run on the actor's own context, so they are serialized with
/// player input and dropped together with the actor.
impl Scheduler for Context<GameSession> {
    type Handle = SpawnHandle;

    fn schedule(&mut self, tick: Tick, every: Duration) -> SpawnHandle {
        self.run_interval(every, move |act, ctx| act.on_tick(tick, ctx))
    }

    fn cancel(&mut self, handle: SpawnHandle) {
        self.cancel_future(handle);
    }
}

impl Actor for GameSession {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        self.session.setup(ctx);
        info!("[GameSession] Game {} started", self.game_id);

        // Nobody connected in time (failed handshake): free the session.
        ctx.run_later(ORPHAN_SESSION_TIMEOUT, |act, ctx| {
            if act.players.is_empty() && act.spectators.is_empty() {
                warn!("[GameSession] Game {} has no connections, stopping", act.game_id);
                ctx.stop();
            }
        });
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        info!("[GameSession] Game {} closed", self.game_id);
        self.manager.do_send(GameClosed { game_id: self.game_id });
    }
}

impl GameSession {
    pub fn new(game_id: Uuid, manager: Addr<GameSessionManager>) -> Self {
        Self {
            game_id,
            session: Session::new(StdRng::from_os_rng()),
            players: HashMap::new(),
            spectators: HashMap::new(),
            manager,
        }
    }

    fn broadcast(&self, msg: ServerWsMessage) {
        for addr in self.players.values().chain(self.spectators.values()) {
            addr.do_send(msg.clone());
        }
    }

    fn send_state(&self) {
        let snapshot = self.session.snapshot();
        debug!(
            "[GameSession] Broadcast state: game_id={} {}\n{}",
            self.game_id,
            render_hud(&snapshot),
            render_board(&snapshot)
        );
        self.broadcast(ServerWsMessage::State(snapshot));
    }

    fn publish(&self, transition: Transition) {
        match transition {
            Transition::Idle => {}
            Transition::Changed => self.send_state(),
            Transition::Ended(summary) => {
                self.send_state();
                self.broadcast(ServerWsMessage::Ended(summary));
            }
        }
    }

    fn on_tick(&mut self, tick: Tick, ctx: &mut Context<Self>) {
        let transition = self.session.tick(tick, ctx);
        self.publish(transition);
    }
}

impl Handler<ProcessClientMessage> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: ProcessClientMessage, ctx: &mut Context<Self>) -> Self::Result {
        if !self.players.contains_key(&msg.connection_id) {
            warn!("[GameSession] Command from non-player connection {} ignored", msg.connection_id);
            return;
        }

        match msg.msg {
            ClientAction::Move(direction) => {
                let transition = self.session.move_player(direction, ctx);
                self.publish(transition);
            }
            ClientAction::Restart => {
                self.session.restart(ctx);
                self.send_state();
            }
        }
    }
}

impl Handler<RegisterSession> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: RegisterSession, _: &mut Context<Self>) -> Self::Result {
        if msg.is_player {
            self.players.insert(msg.connection_id, msg.addr.clone());
        } else {
            self.spectators.insert(msg.connection_id, msg.addr.clone());
        }
        debug!(
            "[GameSession] Connection {} joined game {} (player={}, status={:?})",
            msg.connection_id, self.game_id, msg.is_player, self.session.status()
        );

        msg.addr.do_send(ServerWsMessage::Joined { game_id: self.game_id, is_player: msg.is_player });
        msg.addr.do_send(ServerWsMessage::State(self.session.snapshot()));
        if let Some(summary) = self.session.summary() {
            msg.addr.do_send(ServerWsMessage::Ended(summary.clone()));
        }
    }
}

impl Handler<UnregisterSession> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: UnregisterSession, ctx: &mut Context<Self>) -> Self::Result {
        self.players.remove(&msg.connection_id);
        self.spectators.remove(&msg.connection_id);
        if self.players.is_empty() && self.spectators.is_empty() {
            ctx.stop();
        }
    }
}

impl Handler<GetSnapshot> for GameSession {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, _: GetSnapshot, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.session.snapshot())
    }
}

/// Registry of live games.
pub struct GameSessionManager {
    sessions: HashMap<Uuid, Addr<GameSession>>,
}

impl GameSessionManager {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    pub fn create_game(&mut self, manager: Addr<GameSessionManager>) -> (Uuid, Addr<GameSession>) {
        let game_id = Uuid::new_v4();
        let session = GameSession::new(game_id, manager).start();
        self.sessions.insert(game_id, session.clone());
        info!("[GameSessionManager] Game created, game_id={} ({} live)", game_id, self.sessions.len());
        (game_id, session)
    }
}

impl Actor for GameSessionManager {
    type Context = Context<Self>;
}

#[derive(Message)]
#[rtype(result = "(Uuid, Addr<GameSession>)")]
pub struct CreateGame;

impl Handler<CreateGame> for GameSessionManager {
    type Result = MessageResult<CreateGame>;

    fn handle(&mut self, _: CreateGame, ctx: &mut Context<Self>) -> Self::Result {
        MessageResult(self.create_game(ctx.address()))
    }
}

#[derive(Message)]
#[rtype(result = "Result<Addr<GameSession>, String>")]
pub struct GetGameSession {
    pub game_id: Uuid,
}

impl Handler<GetGameSession> for GameSessionManager {
    type Result = Result<Addr<GameSession>, String>;

    fn handle(&mut self, msg: GetGameSession, _: &mut Context<Self>) -> Self::Result {
        self.sessions.get(&msg.game_id)
            .cloned()
            .ok_or_else(|| "Game session not found".to_string())
    }
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct GameClosed {
    pub game_id: Uuid,
}

impl Handler<GameClosed> for GameSessionManager {
    type Result = ();

    fn handle(&mut self, msg: GameClosed, _: &mut Context<Self>) -> Self::Result {
        if self.sessions.remove(&msg.game_id).is_some() {
            info!("[GameSessionManager] Game {} removed ({} live)", msg.game_id, self.sessions.len());
        }
    }
}
