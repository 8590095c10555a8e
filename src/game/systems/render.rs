//! Board rendering (terminal / logs).
//!
//! Builds a plain-text picture of a snapshot. Used for debug logging; real clients
//! render from the JSON snapshot themselves.

use crate::game::snapshot::GameSnapshot;
use crate::game::types::PolicyKind;

fn policy_symbol(kind: PolicyKind) -> &'static str {
    match kind {
        PolicyKind::Edu => "Ed",
        PolicyKind::Health => "He",
        PolicyKind::Welfare => "We",
        PolicyKind::Dialog => "Di",
    }
}

/// Draw the grid, one row per line.
/// Later layers win a shared cell: policies, then communities, then hazards, then the player.
pub fn render_board(snapshot: &GameSnapshot) -> String {
    let size = snapshot.grid_size;
    let mut cells = vec![vec![String::from(".."); size]; size];

    for policy in &snapshot.policies {
        cells[policy.pos.y][policy.pos.x] = policy_symbol(policy.kind).to_string();
    }
    for community in &snapshot.communities {
        cells[community.pos.y][community.pos.x] = format!("C{:?}", community.id);
    }
    for hazard in &snapshot.hazards {
        cells[hazard.y][hazard.x] = "~~".to_string();
    }
    cells[snapshot.player.y][snapshot.player.x] = "P1".to_string();

    let mut out = String::new();
    for row in cells {
        for symbol in row {
            out.push_str(&format!("{:<3}", symbol));
        }
        out.push('\n');
    }
    out
}

/// One-line HUD summary: score, time and bag contents.
pub fn render_hud(snapshot: &GameSnapshot) -> String {
    let bag = if snapshot.bag.is_empty() {
        "empty".to_string()
    } else {
        snapshot.bag.iter().map(|k| k.to_string()).collect::<Vec<_>>().join(", ")
    };
    let done = snapshot.needs.iter().filter(|n| n.satisfied).count();
    format!(
        "score={} ({}%) time={}s needs={}/{} bag=[{}]",
        snapshot.score,
        snapshot.unity_percent,
        snapshot.seconds_remaining,
        done,
        snapshot.needs.len(),
        bag
    )
}
