//! Community logic.
//!
//! Each community gets one static marker on the board and one need, paired by id.

use rand::Rng;

use crate::game::entities::policy::random_kind;
use crate::game::grid::random_empty_cell;
use crate::game::types::{CommunityId, CommunityMarker, CommunityNeed, Position};

/// Place one marker per community and roll a required policy kind for each.
pub fn spawn_communities<R: Rng>(
    rng: &mut R,
    player: Position,
) -> (Vec<CommunityMarker>, Vec<CommunityNeed>) {
    let mut markers: Vec<CommunityMarker> = Vec::with_capacity(CommunityId::ALL.len());
    let mut needs = Vec::with_capacity(CommunityId::ALL.len());

    for community in CommunityId::ALL {
        let taken: Vec<Position> = markers.iter().map(|m| m.pos).collect();
        let pos = random_empty_cell(rng, player, &taken);
        markers.push(CommunityMarker { pos, community });
        needs.push(CommunityNeed {
            community,
            required: random_kind(rng),
            satisfied: false,
        });
    }

    (markers, needs)
}

pub fn marker_at(markers: &[CommunityMarker], pos: Position) -> Option<&CommunityMarker> {
    markers.iter().find(|m| m.pos == pos)
}
