//! Session lifecycle: setup, restart and end, plus ownership of the two periodic timers.
//!
//! The timers themselves come from a [`Scheduler`], so the same lifecycle drives an
//! actor context in production and a manual scheduler in tests.

use std::time::Duration;

use log::info;
use rand::rngs::StdRng;

use crate::config::game::{COUNTDOWN_INTERVAL, HAZARD_INTERVAL};
use crate::game::snapshot::{EndSummary, GameSnapshot};
use crate::game::state::GameState;
use crate::game::types::{Direction, Outcome, SessionStatus};

/// The two periodic drivers of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Countdown,
    Hazards,
}

impl Tick {
    pub fn interval(self) -> Duration {
        match self {
            Tick::Countdown => COUNTDOWN_INTERVAL,
            Tick::Hazards => HAZARD_INTERVAL,
        }
    }
}

/// Source of cancellable periodic timers.
pub trait Scheduler {
    type Handle;

    /// Start delivering `tick` every `every` until cancelled.
    fn schedule(&mut self, tick: Tick, every: Duration) -> Self::Handle;

    fn cancel(&mut self, handle: Self::Handle);
}

/// What a single event did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Event was absorbed as a no-op.
    Idle,
    /// State changed; a fresh snapshot should be published.
    Changed,
    /// State changed and the session just ended.
    Ended(EndSummary),
}

pub struct Session<H> {
    state: GameState,
    countdown_timer: Option<H>,
    hazard_timer: Option<H>,
    summary: Option<EndSummary>,
}

impl<H> Session<H> {
    pub fn new(rng: StdRng) -> Self {
        Self {
            state: GameState::new(rng),
            countdown_timer: None,
            hazard_timer: None,
            summary: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> SessionStatus {
        self.state.status
    }

    /// Summary of the last finished session, if the current one has ended.
    pub fn summary(&self) -> Option<&EndSummary> {
        self.summary.as_ref()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    /// Re-seed every entity and start both timers, replacing any previous handles.
    pub fn setup<S: Scheduler<Handle = H>>(&mut self, scheduler: &mut S) {
        self.stop_timers(scheduler);
        self.state.setup();
        self.summary = None;
        self.countdown_timer = Some(scheduler.schedule(Tick::Countdown, Tick::Countdown.interval()));
        self.hazard_timer = Some(scheduler.schedule(Tick::Hazards, Tick::Hazards.interval()));
        info!("[Session] Setup complete, {}s on the clock", self.state.seconds_remaining);
    }

    pub fn restart<S: Scheduler<Handle = H>>(&mut self, scheduler: &mut S) {
        info!("[Session] Restart requested (status={:?})", self.state.status);
        self.stop_timers(scheduler);
        self.setup(scheduler);
    }

    /// End the session. The first call on a running session stops both timers and
    /// returns the summary; any later call returns `None` and touches nothing.
    pub fn end_game<S: Scheduler<Handle = H>>(&mut self, outcome: Outcome, scheduler: &mut S) -> Option<EndSummary> {
        let summary = self.state.finish(outcome)?;
        self.stop_timers(scheduler);
        info!(
            "[Session] Ended: {:?}, score={}, needs {}/{}",
            summary.outcome, summary.score, summary.satisfied, summary.total
        );
        self.summary = Some(summary.clone());
        Some(summary)
    }

    pub fn move_player<S: Scheduler<Handle = H>>(&mut self, direction: Direction, scheduler: &mut S) -> Transition {
        let moved = self.state.move_player(direction);
        self.after_move(moved, scheduler)
    }

    /// Move the player by an arbitrary offset, resolve interactions and end the session on a win.
    pub fn move_by<S: Scheduler<Handle = H>>(&mut self, dx: isize, dy: isize, scheduler: &mut S) -> Transition {
        let moved = self.state.move_by(dx, dy);
        self.after_move(moved, scheduler)
    }

    fn after_move<S: Scheduler<Handle = H>>(&mut self, moved: bool, scheduler: &mut S) -> Transition {
        if !moved {
            return Transition::Idle;
        }
        if self.state.all_needs_satisfied() {
            if let Some(summary) = self.end_game(Outcome::Won, scheduler) {
                return Transition::Ended(summary);
            }
        }
        Transition::Changed
    }

    pub fn tick<S: Scheduler<Handle = H>>(&mut self, tick: Tick, scheduler: &mut S) -> Transition {
        match tick {
            Tick::Countdown => {
                if !self.state.countdown() {
                    return Transition::Idle;
                }
                if self.state.time_is_up() {
                    if let Some(summary) = self.end_game(Outcome::TimedOut, scheduler) {
                        return Transition::Ended(summary);
                    }
                }
                Transition::Changed
            }
            Tick::Hazards => {
                if self.state.advance_hazards() {
                    Transition::Changed
                } else {
                    Transition::Idle
                }
            }
        }
    }

    fn stop_timers<S: Scheduler<Handle = H>>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.countdown_timer.take() {
            scheduler.cancel(handle);
        }
        if let Some(handle) = self.hazard_timer.take() {
            scheduler.cancel(handle);
        }
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[cfg(test)]
    pub(crate) fn has_timers(&self) -> bool {
        self.countdown_timer.is_some() || self.hazard_timer.is_some()
    }
}
