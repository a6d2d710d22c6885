//! # Diary View
//!
//! [`DiaryView`] is what a front-end talks to. It owns the collection, the session
//! of the open diary, both animation state machines, the clock, the measurer and
//! the live render box, and routes input events between them:
//!
//! - text input goes to [`Pagination::apply_edit`]; an overflow moves the writer
//!   onto the next page right away and starts a cosmetic page turn,
//! - buttons, arrow keys, finished drags and go-to-page start a deferred turn whose
//!   navigation is applied when [`Timer::TurnCommit`] fires,
//! - pointer events drive the [`DragGesture`].
//!
//! All delayed work is a [`Timer`] on one [`Scheduler`]; [`DiaryView::tick`] moves
//! the clock and dispatches whatever came due. Opening another diary flushes the
//! pending save of the current one and then drops every pending timer.

use crate::commands::CmdMessage;
use crate::drag::{DragGesture, DragSettings, DragVisual, PageRect, Release};
use crate::error::{QuireError, Result};
use crate::measure::{Capacity, Measure, MonospaceMeasurer, RenderBox};
use crate::model::{Diary, Direction, Page};
use crate::pagination::{EditOutcome, Limits, Pagination};
use crate::schedule::Scheduler;
use crate::store::{DiaryStore, Library};
use crate::turn::{Commit, PageTurn, TurnState};
use log::{debug, warn};
use std::time::Duration;

/// Delayed work owned by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Debounced typing save.
    Save,
    /// A cosmetic (overflow) turn finished animating.
    TurnSettled,
    /// A deferred turn finished animating; apply its navigation.
    TurnCommit(Commit),
    /// A committed drag finished its exit animation.
    DragCommitted(Direction),
    SpringBackSettled,
}

/// Keys the page surface reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Backspace,
    ArrowLeft,
    ArrowRight,
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewSettings {
    pub limits: Limits,
    pub turn: Duration,
    pub drag: DragSettings,
    pub render_box: RenderBox,
    pub page_rect: PageRect,
}

impl Default for ViewSettings {
    fn default() -> Self {
        let render_box = RenderBox::default();
        Self {
            limits: Limits::default(),
            turn: Duration::from_millis(500),
            drag: DragSettings::default(),
            page_rect: PageRect::new(0.0, render_box.width),
            render_box,
        }
    }
}

fn not_open() -> QuireError {
    QuireError::Api("No diary is open".to_string())
}

pub struct DiaryView<S: DiaryStore> {
    library: Library<S>,
    session: Option<Pagination>,
    turn: PageTurn,
    drag: DragGesture,
    timers: Scheduler<Timer>,
    measurer: Box<dyn Measure>,
    render_box: RenderBox,
    page_rect: PageRect,
    limits: Limits,
    messages: Vec<CmdMessage>,
}

impl<S: DiaryStore> DiaryView<S> {
    pub fn new(library: Library<S>, settings: ViewSettings) -> Self {
        Self {
            library,
            session: None,
            turn: PageTurn::new(settings.turn),
            drag: DragGesture::new(settings.drag),
            timers: Scheduler::new(),
            measurer: Box::new(MonospaceMeasurer::default()),
            render_box: settings.render_box,
            page_rect: settings.page_rect,
            limits: settings.limits,
            messages: Vec::new(),
        }
    }

    pub fn with_measurer(mut self, measurer: Box<dyn Measure>) -> Self {
        self.measurer = measurer;
        self
    }

    pub fn library(&self) -> &Library<S> {
        &self.library
    }

    /// Direct access to the collection. Close the view first when changing it, or
    /// the open session will publish over the change.
    pub fn library_mut(&mut self) -> &mut Library<S> {
        &mut self.library
    }

    pub fn into_library(self) -> Library<S> {
        self.library
    }

    /// Switches to another diary.
    pub fn open(&mut self, diary_id: &str) -> Result<()> {
        let diary = self
            .library
            .find(diary_id)
            .cloned()
            .ok_or_else(|| QuireError::DiaryNotFound(diary_id.to_string()))?;
        self.leave();
        debug!("opening diary {} ({})", diary.id, diary.name);
        self.session = Some(Pagination::open(diary, self.limits, &mut self.library));
        self.collect_session_messages();
        Ok(())
    }

    /// Navigation away from the open diary.
    pub fn close(&mut self) {
        self.leave();
    }

    fn leave(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.close(&mut self.timers, &mut self.library);
            self.messages.extend(session.take_messages());
        }
        self.turn.reset(&mut self.timers);
        self.drag.reset(&mut self.timers);
        self.timers.clear();
    }

    fn session_mut(&mut self) -> Result<&mut Pagination> {
        self.session.as_mut().ok_or_else(not_open)
    }

    fn collect_session_messages(&mut self) {
        if let Some(session) = self.session.as_mut() {
            self.messages.extend(session.take_messages());
        }
    }

    /// The page surface's text changed.
    pub fn input(&mut self, text: &str, caret: Option<usize>) -> Result<EditOutcome> {
        let turning = self.turn.is_turning();
        let session = self.session.as_mut().ok_or_else(not_open)?;
        let page_id = session.current_page().id.clone();

        // A turn in flight means the live box belongs to the outgoing page.
        let capacity = Capacity::new(self.measurer.as_ref(), &self.render_box);
        let capacity = if turning { None } else { Some(&capacity) };

        let outcome = session.apply_edit(
            &page_id,
            text,
            caret,
            capacity,
            &mut self.timers,
            &mut self.library,
        )?;
        if let EditOutcome::Overflowed { from_page, .. } = &outcome {
            self.turn
                .begin_cosmetic(from_page, Direction::Forward, &mut self.timers);
        }
        self.collect_session_messages();
        Ok(outcome)
    }

    /// A key press on the page surface with the caret at `caret`. Returns whether
    /// the key caused navigation.
    pub fn key(&mut self, key: Key, caret: usize) -> Result<bool> {
        let turning = self.turn.is_turning();
        let session = self.session.as_mut().ok_or_else(not_open)?;
        session.note_caret(caret);
        let at_end = caret >= session.current_page().content.chars().count();

        match key {
            Key::Backspace if !turning => {
                let leaving = session.current_page().id.clone();
                let moved = session.retreat_from_empty(&mut self.timers, &mut self.library);
                if moved {
                    self.turn
                        .begin_cosmetic(&leaving, Direction::Backward, &mut self.timers);
                }
                self.collect_session_messages();
                Ok(moved)
            }
            Key::ArrowRight if at_end => Ok(self.next()),
            Key::ArrowLeft if caret == 0 => Ok(self.prev()),
            _ => Ok(false),
        }
    }

    pub fn next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.begin_turn(Direction::Forward, Commit::Step(Direction::Forward))
    }

    pub fn prev(&mut self) -> bool {
        if !self.can_go_prev() {
            return false;
        }
        self.begin_turn(Direction::Backward, Commit::Step(Direction::Backward))
    }

    /// Turns to a 1-based page number.
    pub fn go_to_page(&mut self, number: usize) -> Result<bool> {
        let session = self.session_mut()?;
        let count = session.page_count();
        if number == 0 || number > count {
            return Err(QuireError::InvalidPage { max: count });
        }
        let index = number - 1;
        let current = session.current_index();
        if index == current {
            return Ok(false);
        }
        let direction = if index > current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        Ok(self.begin_turn(direction, Commit::GoTo(index)))
    }

    fn begin_turn(&mut self, direction: Direction, commit: Commit) -> bool {
        let Some(session) = self.session.as_ref() else {
            return false;
        };
        let page_id = session.current_page().id.clone();
        self.turn
            .begin_deferred(&page_id, direction, commit, &mut self.timers)
    }

    /// Explicit save action.
    pub fn save(&mut self) -> Result<()> {
        let session = self.session.as_mut().ok_or_else(not_open)?;
        session.save_now(&mut self.timers, &mut self.library);
        self.collect_session_messages();
        Ok(())
    }

    pub fn pointer_down(&mut self, x: f32) -> bool {
        self.session.is_some()
            && self
                .drag
                .press(x, &self.page_rect, self.turn.is_turning(), &mut self.timers)
    }

    pub fn pointer_move(&mut self, x: f32) {
        self.drag.drag_to(x, &self.page_rect, self.turn.is_turning());
    }

    pub fn pointer_up(&mut self) -> Release {
        self.drag
            .release(&self.page_rect, self.turn.is_turning(), &mut self.timers)
    }

    pub fn hover(&mut self, x: f32) {
        self.drag.hover(x, &self.page_rect, self.turn.is_turning());
    }

    /// Advances the clock by `elapsed`, running every timer that comes due.
    pub fn tick(&mut self, elapsed: Duration) {
        let until = self.timers.now() + elapsed;
        while let Some(timer) = self.timers.poll(until) {
            self.dispatch(timer);
        }
        self.timers.advance_to(until);
    }

    fn dispatch(&mut self, timer: Timer) {
        match timer {
            Timer::Save => {
                if let Some(session) = self.session.as_mut() {
                    session.flush_debounced(&mut self.library);
                }
            }
            Timer::TurnSettled => self.turn.settle(),
            Timer::TurnCommit(commit) => {
                self.turn.settle();
                self.apply_commit(commit);
            }
            Timer::DragCommitted(_) => {
                if let Some(direction) = self.drag.finish_commit() {
                    let moved = match direction {
                        Direction::Forward => self.next(),
                        Direction::Backward => self.prev(),
                    };
                    if !moved {
                        debug!("drag towards {:?} dropped, page cannot turn now", direction);
                    }
                }
            }
            Timer::SpringBackSettled => self.drag.finish_spring_back(),
        }
        self.collect_session_messages();
    }

    fn apply_commit(&mut self, commit: Commit) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let result = match commit {
            Commit::Step(Direction::Forward) => {
                session.step_forward(&mut self.timers, &mut self.library)
            }
            Commit::Step(Direction::Backward) => {
                session.step_backward(&mut self.timers, &mut self.library);
                Ok(())
            }
            Commit::GoTo(index) => session.jump_to(index),
        };
        if let Err(e) = result {
            warn!("page turn could not be applied: {}", e);
            self.messages.push(CmdMessage::warning(e.to_string()));
        }
    }

    pub fn set_render_box(&mut self, render_box: RenderBox) {
        self.render_box = render_box;
    }

    pub fn set_page_rect(&mut self, rect: PageRect) {
        self.page_rect = rect;
    }

    pub fn take_messages(&mut self) -> Vec<CmdMessage> {
        self.collect_session_messages();
        std::mem::take(&mut self.messages)
    }

    pub fn diary(&self) -> Option<&Diary> {
        self.session.as_ref().map(Pagination::diary)
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.session.as_ref().map(Pagination::current_page)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.session.as_ref().map(Pagination::current_index)
    }

    pub fn caret(&self) -> Option<usize> {
        self.session.as_ref().map(Pagination::caret)
    }

    pub fn has_pending_save(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(Pagination::has_pending_save)
    }

    pub fn turn_state(&self) -> &TurnState {
        self.turn.state()
    }

    pub fn drag_visual(&self) -> Option<&DragVisual> {
        self.drag.visual()
    }

    pub fn grabbable(&self) -> bool {
        self.drag.grabbable()
    }

    pub fn can_go_next(&self) -> bool {
        !self.turn.is_turning() && self.session.as_ref().is_some_and(Pagination::can_go_next)
    }

    pub fn can_go_prev(&self) -> bool {
        !self.turn.is_turning() && self.session.as_ref().is_some_and(Pagination::can_go_prev)
    }

    pub fn page_indicator(&self) -> Option<String> {
        self.session.as_ref().map(|s| {
            format!("Page {} of {}", s.current_index() + 1, s.page_count())
        })
    }

    /// Time on the view's clock.
    pub fn now(&self) -> Duration {
        self.timers.now()
    }
}
