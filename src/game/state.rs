use log::debug;
use rand::rngs::StdRng;

use crate::config::game::{HAZARD_COUNT, INITIAL_POLICY_COUNT, SESSION_SECONDS};
use crate::game::entities::{
    maybe_respawn_policy, move_hazards, spawn_communities, spawn_hazards, spawn_player, spawn_random_policies,
};
use crate::game::snapshot::{EndSummary, GameSnapshot};
use crate::game::systems::{apply_player_rules, movement};
use crate::game::types::{
    CommunityMarker, CommunityNeed, Direction, EventMessage, Hazard, Outcome, Player, PolicyItem, PolicyKind,
    Position, SessionStatus,
};

/// Every entity of one session, plus score, countdown and status.
///
/// All mutation goes through the methods below; each one runs to completion and is
/// a no-op unless the session is running.
pub struct GameState {
    pub player: Player,
    pub policies: Vec<PolicyItem>,
    pub communities: Vec<CommunityMarker>,
    pub needs: Vec<CommunityNeed>,
    pub hazards: Vec<Hazard>,
    pub bag: Vec<PolicyKind>,
    pub score: u32,
    pub seconds_remaining: u32,
    pub status: SessionStatus,
    pub message: Option<EventMessage>,
    rng: StdRng,
}

impl GameState {
    /// Empty state waiting for `setup`.
    pub fn new(rng: StdRng) -> Self {
        Self {
            player: spawn_player(),
            policies: Vec::new(),
            communities: Vec::new(),
            needs: Vec::new(),
            hazards: Vec::new(),
            bag: Vec::new(),
            score: 0,
            seconds_remaining: SESSION_SECONDS,
            status: SessionStatus::Setup,
            message: None,
            rng,
        }
    }

    /// Rebuild the whole board from scratch and start running.
    pub fn setup(&mut self) {
        self.player = spawn_player();
        self.bag.clear();
        self.score = 0;
        self.seconds_remaining = SESSION_SECONDS;

        let player = self.player.pos;
        let (communities, needs) = spawn_communities(&mut self.rng, player);
        self.communities = communities;
        self.needs = needs;

        let community_cells: Vec<Position> = self.communities.iter().map(|c| c.pos).collect();
        self.policies = spawn_random_policies(&mut self.rng, player, &community_cells, INITIAL_POLICY_COUNT);

        let mut occupied = community_cells;
        occupied.extend(self.policies.iter().map(|p| p.pos));
        self.hazards = spawn_hazards(&mut self.rng, player, &occupied, HAZARD_COUNT);

        self.message = Some(EventMessage::info("Collect policies and deliver them to the matching needs!"));
        self.status = SessionStatus::Running;
        debug!(
            "[GameState] Setup: needs={:?}",
            self.needs.iter().map(|n| (n.community, n.required)).collect::<Vec<_>>()
        );
    }

    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    /// Move the player one cell and resolve interactions on the new cell.
    /// Returns false when nothing happened (session not running, or off-grid target).
    pub fn move_player(&mut self, direction: Direction) -> bool {
        let (dx, dy) = direction.delta();
        self.move_by(dx, dy)
    }

    /// Same as `move_player`, for an arbitrary (dx, dy) offset.
    pub fn move_by(&mut self, dx: isize, dy: isize) -> bool {
        if !self.is_running() {
            return false;
        }
        if movement::move_player(self, dx, dy).is_none() {
            return false;
        }
        apply_player_rules(self);
        true
    }

    /// Hazard tick: wander every cloud, then maybe respawn one policy.
    pub fn advance_hazards(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        move_hazards(&mut self.rng, &mut self.hazards, &self.communities);

        let mut occupied: Vec<Position> = self.communities.iter().map(|c| c.pos).collect();
        occupied.extend(self.hazards.iter().map(|h| h.pos));
        if let Some(policy) = maybe_respawn_policy(&mut self.rng, &self.policies, self.player.pos, &occupied) {
            debug!("[GameState] Respawned {} at ({}, {})", policy.kind, policy.pos.x, policy.pos.y);
            self.policies.push(policy);
        }
        true
    }

    /// Countdown tick: one second off the clock.
    pub fn countdown(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        true
    }

    pub fn time_is_up(&self) -> bool {
        self.seconds_remaining == 0
    }

    pub fn all_needs_satisfied(&self) -> bool {
        self.needs.iter().all(|n| n.satisfied)
    }

    pub fn satisfied_count(&self) -> usize {
        self.needs.iter().filter(|n| n.satisfied).count()
    }

    /// Move to `Ended(outcome)`. Only the first call on a running session does anything;
    /// it returns the summary, later calls return `None`.
    pub fn finish(&mut self, outcome: Outcome) -> Option<EndSummary> {
        if !self.is_running() {
            return None;
        }
        self.status = SessionStatus::Ended(outcome);
        Some(EndSummary {
            outcome,
            score: self.score,
            satisfied: self.satisfied_count(),
            total: self.needs.len(),
        })
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }
}
