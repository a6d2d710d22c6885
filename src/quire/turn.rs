//! # Page Turns
//!
//! A page turn is an animation on the page being left. While one is in flight every
//! navigation control is locked: a second request is refused, not queued.
//!
//! Turns commit in one of two ways:
//!
//! - **Cosmetic** (overflow-driven): the page list and current index have already
//!   changed by the time the turn starts. The turn is an overlay that clears itself
//!   after the animation duration ([`Timer::TurnSettled`]).
//! - **Deferred** (button, keyboard, drag, go-to-page): nothing changes yet. When the
//!   animation duration elapses, [`Timer::TurnCommit`] carries the [`Commit`] that the
//!   view then applies, so the content swap happens after the animation.

use crate::model::Direction;
use crate::schedule::{Scheduler, TaskHandle};
use crate::view::Timer;
use std::time::Duration;

/// The navigation a deferred turn applies when it completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    Step(Direction),
    GoTo(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TurnState {
    #[default]
    Idle,
    Turning { page_id: String, direction: Direction },
}

#[derive(Debug)]
pub struct PageTurn {
    state: TurnState,
    pending: Option<TaskHandle>,
    duration: Duration,
}

impl PageTurn {
    pub fn new(duration: Duration) -> Self {
        Self {
            state: TurnState::Idle,
            pending: None,
            duration,
        }
    }

    pub fn state(&self) -> &TurnState {
        &self.state
    }

    pub fn is_turning(&self) -> bool {
        matches!(self.state, TurnState::Turning { .. })
    }

    /// The direction `page_id` is animating in, if it is the page being turned.
    pub fn animation_for(&self, page_id: &str) -> Option<Direction> {
        match &self.state {
            TurnState::Turning {
                page_id: turning,
                direction,
            } if turning == page_id => Some(*direction),
            _ => None,
        }
    }

    pub fn begin_cosmetic(
        &mut self,
        page_id: &str,
        direction: Direction,
        timers: &mut Scheduler<Timer>,
    ) -> bool {
        self.begin(page_id, direction, Timer::TurnSettled, timers)
    }

    pub fn begin_deferred(
        &mut self,
        page_id: &str,
        direction: Direction,
        commit: Commit,
        timers: &mut Scheduler<Timer>,
    ) -> bool {
        self.begin(page_id, direction, Timer::TurnCommit(commit), timers)
    }

    fn begin(
        &mut self,
        page_id: &str,
        direction: Direction,
        timer: Timer,
        timers: &mut Scheduler<Timer>,
    ) -> bool {
        if self.is_turning() {
            return false;
        }
        self.state = TurnState::Turning {
            page_id: page_id.to_string(),
            direction,
        };
        self.pending = Some(timers.schedule(self.duration, timer));
        true
    }

    /// Back to idle once the animation timer has fired.
    pub fn settle(&mut self) {
        self.state = TurnState::Idle;
        self.pending = None;
    }

    /// Abandons any turn in flight.
    pub fn reset(&mut self, timers: &mut Scheduler<Timer>) {
        if let Some(handle) = self.pending.take() {
            timers.cancel(handle);
        }
        self.state = TurnState::Idle;
    }
}
