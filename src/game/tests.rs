use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::game::{GRID_SIZE, HAZARD_COUNT, INITIAL_POLICY_COUNT, MAX_POLICY_COUNT, SESSION_SECONDS};
use crate::game::grid::in_bounds;
use crate::game::session::{Scheduler, Session, Tick, Transition};
use crate::game::systems::{render_board, render_hud};
use crate::game::types::*;

/// Scheduler that only records what the session asked for.
#[derive(Default)]
struct ManualScheduler {
    next_handle: u64,
    active: Vec<(u64, Tick, Duration)>,
    cancelled: Vec<u64>,
}

impl Scheduler for ManualScheduler {
    type Handle = u64;

    fn schedule(&mut self, tick: Tick, every: Duration) -> u64 {
        self.next_handle += 1;
        self.active.push((self.next_handle, tick, every));
        self.next_handle
    }

    fn cancel(&mut self, handle: u64) {
        let index = self
            .active
            .iter()
            .position(|(h, _, _)| *h == handle)
            .expect("cancelled a timer that is not running");
        self.active.remove(index);
        self.cancelled.push(handle);
    }
}

fn marker(community: CommunityId, x: usize, y: usize) -> CommunityMarker {
    CommunityMarker { pos: Position::new(x, y), community }
}

fn need(community: CommunityId, required: PolicyKind) -> CommunityNeed {
    CommunityNeed { community, required, satisfied: false }
}

fn started_session(seed: u64) -> (Session<u64>, ManualScheduler) {
    let mut scheduler = ManualScheduler::default();
    let mut session = Session::new(StdRng::seed_from_u64(seed));
    session.setup(&mut scheduler);
    (session, scheduler)
}

/// Running session with no policies or hazards and communities at known cells.
/// Player stands on (4, 4); A is at (5, 4) and needs Edu.
fn arranged_session() -> (Session<u64>, ManualScheduler) {
    let (mut session, scheduler) = started_session(42);
    let state = session.state_mut();
    state.policies.clear();
    state.hazards.clear();
    state.communities = vec![
        marker(CommunityId::A, 5, 4),
        marker(CommunityId::B, 0, 0),
        marker(CommunityId::X, 7, 7),
    ];
    state.needs = vec![
        need(CommunityId::A, PolicyKind::Edu),
        need(CommunityId::B, PolicyKind::Health),
        need(CommunityId::X, PolicyKind::Dialog),
    ];
    (session, scheduler)
}

#[test]
fn setup_places_every_entity() {
    let (session, scheduler) = started_session(1);
    let state = session.state();

    assert_eq!(session.status(), SessionStatus::Running);
    assert_eq!(state.score, 0);
    assert_eq!(state.seconds_remaining, SESSION_SECONDS);
    assert!(state.bag.is_empty());
    assert_eq!(state.player.pos, Position::new(GRID_SIZE / 2, GRID_SIZE / 2));
    assert_eq!(state.policies.len(), INITIAL_POLICY_COUNT);
    assert_eq!(state.hazards.len(), HAZARD_COUNT);

    let ids: Vec<CommunityId> = state.communities.iter().map(|c| c.community).collect();
    assert_eq!(ids, CommunityId::ALL.to_vec());
    let need_ids: Vec<CommunityId> = state.needs.iter().map(|n| n.community).collect();
    assert_eq!(need_ids, CommunityId::ALL.to_vec());
    assert!(state.needs.iter().all(|n| !n.satisfied));

    let positions = state
        .policies
        .iter()
        .map(|p| p.pos)
        .chain(state.communities.iter().map(|c| c.pos))
        .chain(state.hazards.iter().map(|h| h.pos));
    for pos in positions {
        assert!(in_bounds(pos.x as isize, pos.y as isize));
        assert_ne!(pos, state.player.pos);
    }

    let ticks: Vec<(Tick, Duration)> = scheduler.active.iter().map(|(_, t, d)| (*t, *d)).collect();
    assert_eq!(
        ticks,
        vec![
            (Tick::Countdown, Duration::from_secs(1)),
            (Tick::Hazards, Duration::from_millis(800)),
        ]
    );
}

#[test]
fn pickup_then_delivery_satisfies_the_need() {
    let (mut session, mut scheduler) = arranged_session();
    session.state_mut().policies.push(PolicyItem { pos: Position::new(4, 3), kind: PolicyKind::Edu });
    session.state_mut().communities[0].pos = Position::new(5, 3);

    assert_eq!(session.move_player(Direction::Up, &mut scheduler), Transition::Changed);
    assert_eq!(session.state().bag, vec![PolicyKind::Edu]);
    assert_eq!(session.state().score, 5);
    assert!(session.state().policies.is_empty());

    assert_eq!(session.move_player(Direction::Right, &mut scheduler), Transition::Changed);
    let state = session.state();
    assert!(state.needs[0].satisfied);
    assert_eq!(state.score, 25);
    assert!(state.bag.is_empty());
    assert_eq!(state.message.as_ref().map(|m| m.category), Some(MessageCategory::Success));
}

#[test]
fn delivery_without_matching_policy_costs_three() {
    let (mut session, mut scheduler) = arranged_session();
    session.state_mut().bag = vec![PolicyKind::Welfare];

    session.move_player(Direction::Right, &mut scheduler);
    let state = session.state();
    assert!(!state.needs[0].satisfied);
    assert_eq!(state.score, 0);
    assert_eq!(state.bag, vec![PolicyKind::Welfare]);
    assert_eq!(state.message.as_ref().map(|m| m.category), Some(MessageCategory::Warning));

    session.state_mut().score = 10;
    session.move_player(Direction::Left, &mut scheduler);
    session.move_player(Direction::Right, &mut scheduler);
    assert_eq!(session.state().score, 7);
}

#[test]
fn revisiting_a_satisfied_community_is_silent() {
    let (mut session, mut scheduler) = arranged_session();
    session.state_mut().bag = vec![PolicyKind::Edu, PolicyKind::Edu];

    session.move_player(Direction::Right, &mut scheduler);
    assert!(session.state().needs[0].satisfied);
    let score = session.state().score;
    let message = session.state().message.clone();

    session.move_player(Direction::Left, &mut scheduler);
    session.move_player(Direction::Right, &mut scheduler);
    assert_eq!(session.state().score, score);
    assert_eq!(session.state().message, message);
    assert_eq!(session.state().bag, vec![PolicyKind::Edu]);
}

#[test]
fn hazard_collision_costs_eight_floored_at_zero() {
    let (mut session, mut scheduler) = arranged_session();
    session.state_mut().hazards.push(Hazard { pos: Position::new(3, 4) });

    session.state_mut().score = 3;
    session.move_player(Direction::Left, &mut scheduler);
    assert_eq!(session.state().score, 0);
    assert_eq!(session.state().message.as_ref().map(|m| m.category), Some(MessageCategory::Warning));

    session.state_mut().score = 20;
    session.move_player(Direction::Right, &mut scheduler);
    session.move_player(Direction::Left, &mut scheduler);
    assert_eq!(session.state().score, 12);
}

#[test]
fn pickup_and_hazard_both_apply_on_the_same_cell() {
    let (mut session, mut scheduler) = arranged_session();
    let cell = Position::new(4, 5);
    session.state_mut().policies.push(PolicyItem { pos: cell, kind: PolicyKind::Dialog });
    session.state_mut().hazards.push(Hazard { pos: cell });

    session.move_player(Direction::Down, &mut scheduler);
    let state = session.state();
    assert_eq!(state.bag, vec![PolicyKind::Dialog]);
    // +5 then -8, floored.
    assert_eq!(state.score, 0);
    assert_eq!(state.message.as_ref().map(|m| m.category), Some(MessageCategory::Warning));
}

#[test]
fn moves_off_the_grid_are_ignored() {
    let (mut session, mut scheduler) = arranged_session();
    session.state_mut().player.pos = Position::new(1, 0);
    session.state_mut().score = 4;

    assert_eq!(session.move_player(Direction::Up, &mut scheduler), Transition::Idle);
    assert_eq!(session.state().player.pos, Position::new(1, 0));
    assert_eq!(session.state().score, 4);
    assert_eq!(session.move_by(-2, 0, &mut scheduler), Transition::Idle);
    assert_eq!(session.state().player.pos, Position::new(1, 0));
}

#[test]
fn random_play_stays_in_bounds() {
    let (mut session, mut scheduler) = started_session(9);
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..2_000 {
        let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        let bag_before = session.state().bag.len();
        session.move_player(direction, &mut scheduler);
        if rng.random_bool(0.3) {
            session.tick(Tick::Hazards, &mut scheduler);
        }

        let state = session.state();
        let pos = state.player.pos;
        assert!(pos.x < GRID_SIZE && pos.y < GRID_SIZE);
        assert!(state.bag.len().abs_diff(bag_before) <= 1);
        assert!(state.policies.len() <= MAX_POLICY_COUNT);
        for hazard in &state.hazards {
            assert!(!state.communities.iter().any(|c| c.pos == hazard.pos));
        }
        if session.status() != SessionStatus::Running {
            break;
        }
    }
}

#[test]
fn timeout_reports_partial_progress() {
    let (mut session, mut scheduler) = arranged_session();
    session.state_mut().needs[0].satisfied = true;
    session.state_mut().needs[1].satisfied = true;
    session.state_mut().score = 40;
    session.state_mut().seconds_remaining = 2;

    assert_eq!(session.tick(Tick::Countdown, &mut scheduler), Transition::Changed);
    assert_eq!(session.state().seconds_remaining, 1);

    let expected = crate::game::snapshot::EndSummary {
        outcome: Outcome::TimedOut,
        score: 40,
        satisfied: 2,
        total: 3,
    };
    assert_eq!(session.tick(Tick::Countdown, &mut scheduler), Transition::Ended(expected.clone()));
    assert_eq!(session.status(), SessionStatus::Ended(Outcome::TimedOut));
    assert_eq!(session.summary(), Some(&expected));
    assert!(scheduler.active.is_empty());
    assert!(!session.has_timers());
}

#[test]
fn last_delivery_wins_immediately() {
    let (mut session, mut scheduler) = arranged_session();
    session.state_mut().needs[1].satisfied = true;
    session.state_mut().needs[2].satisfied = true;
    session.state_mut().bag = vec![PolicyKind::Edu];
    session.state_mut().seconds_remaining = 42;

    match session.move_player(Direction::Right, &mut scheduler) {
        Transition::Ended(summary) => {
            assert_eq!(summary.outcome, Outcome::Won);
            assert_eq!(summary.satisfied, 3);
            assert_eq!(summary.total, 3);
            assert_eq!(summary.score, 20);
        }
        other => panic!("expected the session to end, got {:?}", other),
    }
    assert_eq!(session.status(), SessionStatus::Ended(Outcome::Won));
    assert_eq!(session.state().seconds_remaining, 42);
    assert!(scheduler.active.is_empty());
}

#[test]
fn ending_twice_is_a_no_op() {
    let (mut session, mut scheduler) = arranged_session();
    session.state_mut().score = 11;

    assert!(session.end_game(Outcome::TimedOut, &mut scheduler).is_some());
    assert_eq!(scheduler.cancelled.len(), 2);

    assert!(session.end_game(Outcome::Won, &mut scheduler).is_none());
    assert_eq!(scheduler.cancelled.len(), 2);
    assert_eq!(session.status(), SessionStatus::Ended(Outcome::TimedOut));
    assert_eq!(session.state().score, 11);
}

#[test]
fn events_after_the_end_are_ignored() {
    let (mut session, mut scheduler) = arranged_session();
    session.end_game(Outcome::TimedOut, &mut scheduler);
    let before = session.snapshot();

    assert_eq!(session.move_player(Direction::Right, &mut scheduler), Transition::Idle);
    assert_eq!(session.tick(Tick::Countdown, &mut scheduler), Transition::Idle);
    assert_eq!(session.tick(Tick::Hazards, &mut scheduler), Transition::Idle);

    let after = session.snapshot();
    assert_eq!(after.player, before.player);
    assert_eq!(after.hazards, before.hazards);
    assert_eq!(after.seconds_remaining, before.seconds_remaining);
}

#[test]
fn restart_reseeds_and_replaces_timers() {
    let (mut session, mut scheduler) = arranged_session();
    session.state_mut().score = 30;
    session.state_mut().bag = vec![PolicyKind::Health];
    let first_handles: Vec<u64> = scheduler.active.iter().map(|(h, _, _)| *h).collect();

    // Restart while running cancels the old timers before starting new ones.
    session.restart(&mut scheduler);
    assert_eq!(scheduler.cancelled, first_handles);
    assert_eq!(scheduler.active.len(), 2);
    assert_eq!(session.state().score, 0);
    assert!(session.state().bag.is_empty());
    assert_eq!(session.state().policies.len(), INITIAL_POLICY_COUNT);

    // Restart after the end never cancels a timer twice.
    session.end_game(Outcome::TimedOut, &mut scheduler);
    session.restart(&mut scheduler);
    assert_eq!(scheduler.cancelled.len(), 4);
    assert_eq!(scheduler.active.len(), 2);
    assert_eq!(session.status(), SessionStatus::Running);
    assert!(session.summary().is_none());
    assert_eq!(session.state().seconds_remaining, SESSION_SECONDS);
}

#[test]
fn hazard_ticks_respawn_policies_up_to_the_cap() {
    let (mut session, mut scheduler) = arranged_session();
    session.state_mut().hazards.push(Hazard { pos: Position::new(2, 2) });

    let mut respawned = 0;
    for _ in 0..400 {
        let before = session.state().policies.len();
        assert_eq!(session.tick(Tick::Hazards, &mut scheduler), Transition::Changed);
        let state = session.state();
        assert!(state.policies.len() <= MAX_POLICY_COUNT);
        if state.policies.len() > before {
            respawned += 1;
            let fresh = state.policies.last().map(|p| p.pos).expect("respawned policy");
            assert_ne!(fresh, state.player.pos);
            assert!(!state.communities.iter().any(|c| c.pos == fresh));
            assert!(!state.hazards.iter().any(|h| h.pos == fresh));
        }
    }
    assert_eq!(respawned, MAX_POLICY_COUNT);
    assert_eq!(session.state().policies.len(), MAX_POLICY_COUNT);
}

#[test]
fn snapshot_reflects_state_and_clamps_percent() {
    let (mut session, _scheduler) = arranged_session();
    session.state_mut().score = 130;
    session.state_mut().bag = vec![PolicyKind::Edu, PolicyKind::Welfare];
    session.state_mut().hazards.push(Hazard { pos: Position::new(1, 1) });

    let snapshot = session.snapshot();
    assert_eq!(snapshot.grid_size, GRID_SIZE);
    assert_eq!(snapshot.unity_percent, 100);
    assert_eq!(snapshot.score, 130);
    assert_eq!(snapshot.bag, vec![PolicyKind::Edu, PolicyKind::Welfare]);
    assert_eq!(snapshot.hazards, vec![Position::new(1, 1)]);
    assert_eq!(snapshot.communities[0].label, CommunityId::A.label());
    assert_eq!(snapshot.needs[0].required, PolicyKind::Edu);
    assert_eq!(snapshot.status, SessionStatus::Running);

    let json = serde_json::to_value(&snapshot).expect("snapshot serializes");
    assert_eq!(json["status"]["state"], "Running");
    assert_eq!(json["message"]["category"], "info");
}

#[test]
fn board_render_marks_each_layer() {
    let (mut session, _scheduler) = arranged_session();
    session.state_mut().hazards.push(Hazard { pos: Position::new(1, 1) });
    let snapshot = session.snapshot();

    let board = render_board(&snapshot);
    let rows: Vec<&str> = board.lines().collect();
    assert_eq!(rows.len(), GRID_SIZE);
    assert!(rows[0].starts_with("CB"));
    assert!(rows[1].contains("~~"));
    assert!(rows[4].contains("P1"));
    assert!(rows[4].contains("CA"));

    let hud = render_hud(&snapshot);
    assert!(hud.contains("needs=0/3"));
    assert!(hud.contains("bag=[empty]"));
}
