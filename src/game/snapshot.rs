//! Read-only views handed to renderers and end-of-session screens.

use serde::Serialize;

use crate::config::game::GRID_SIZE;
use crate::game::state::GameState;
use crate::game::types::{
    CommunityId, CommunityMarker, CommunityNeed, EventMessage, Outcome, PolicyItem, PolicyKind, Position,
    SessionStatus,
};

#[derive(Debug, Clone, Serialize)]
pub struct CommunityView {
    pub pos: Position,
    pub id: CommunityId,
    pub label: &'static str,
    pub icon: &'static str,
}

impl From<&CommunityMarker> for CommunityView {
    fn from(marker: &CommunityMarker) -> Self {
        Self {
            pos: marker.pos,
            id: marker.community,
            label: marker.community.label(),
            icon: marker.community.icon(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NeedView {
    pub community: CommunityId,
    pub label: &'static str,
    pub required: PolicyKind,
    pub satisfied: bool,
}

impl From<&CommunityNeed> for NeedView {
    fn from(need: &CommunityNeed) -> Self {
        Self {
            community: need.community,
            label: need.community.label(),
            required: need.required,
            satisfied: need.satisfied,
        }
    }
}

/// Everything a renderer or HUD needs after a mutation.
#[derive(Debug, Clone, Serialize)]
pub struct GameSnapshot {
    pub grid_size: usize,
    pub player: Position,
    pub policies: Vec<PolicyItem>,
    pub communities: Vec<CommunityView>,
    pub needs: Vec<NeedView>,
    pub hazards: Vec<Position>,
    pub bag: Vec<PolicyKind>,
    pub score: u32,
    /// Score clamped to 0..=100 for the progress bar.
    pub unity_percent: u32,
    pub seconds_remaining: u32,
    pub status: SessionStatus,
    pub message: Option<EventMessage>,
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        Self {
            grid_size: GRID_SIZE,
            player: state.player.pos,
            policies: state.policies.clone(),
            communities: state.communities.iter().map(CommunityView::from).collect(),
            needs: state.needs.iter().map(NeedView::from).collect(),
            hazards: state.hazards.iter().map(|h| h.pos).collect(),
            bag: state.bag.clone(),
            score: state.score,
            unity_percent: state.score.min(100),
            seconds_remaining: state.seconds_remaining,
            status: state.status,
            message: state.message.clone(),
        }
    }
}

/// Result of a finished session, for the summary modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndSummary {
    pub outcome: Outcome,
    pub score: u32,
    pub satisfied: usize,
    pub total: usize,
}
