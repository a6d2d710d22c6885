//! # Edge Drag Gestures
//!
//! A page can be dragged like paper, but only by its edges: a press that starts in
//! the left or right drag zone begins a drag, a press anywhere else belongs to the
//! text editor.
//!
//! While dragging, [`drag_visual_state`] turns the horizontal distance into a
//! transform (translation, perspective rotation, shrink, shadow). On release:
//!
//! - past a quarter of the page width, the page plays an exit animation and then
//!   [`Timer::DragCommitted`] asks the view to navigate (dragging left turns
//!   forward, dragging right turns backward);
//! - otherwise it springs back to rest and [`Timer::SpringBackSettled`] clears the
//!   transform.
//!
//! No new drag can start while an exit animation or a page turn is running.

use crate::model::Direction;
use crate::schedule::{Scheduler, TaskHandle};
use crate::view::Timer;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const MAX_ROTATION: f32 = 80.0;
const MIN_SCALE: f32 = 0.7;
const MAX_SHADOW: f32 = 0.3;
const REST_SHADOW: f32 = 0.1;

/// Width in pixels of the grabbable strip at each edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragZones {
    pub left: f32,
    pub right: f32,
}

impl Default for DragZones {
    fn default() -> Self {
        Self {
            left: 40.0,
            right: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
}

impl DragZones {
    pub fn edge_at(&self, x: f32, rect: &PageRect) -> Option<Edge> {
        if x >= rect.left && x < rect.left + self.left {
            Some(Edge::Left)
        } else if x > rect.right() - self.right && x <= rect.right() {
            Some(Edge::Right)
        } else {
            None
        }
    }
}

/// Horizontal extent of the page on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRect {
    pub left: f32,
    pub width: f32,
}

impl PageRect {
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }
}

/// Point the rotation pivots around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    LeftEdge,
    Center,
    RightEdge,
}

/// Transform to render the page with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragVisual {
    pub translate_x: f32,
    /// Degrees around the vertical axis.
    pub rotate_y: f32,
    pub scale: f32,
    /// Shadow opacity.
    pub shadow: f32,
    pub opacity: f32,
    pub origin: Origin,
    /// How long the renderer should take to reach this state; zero follows the pointer.
    pub transition: Duration,
}

impl DragVisual {
    pub fn at_rest(transition: Duration) -> Self {
        Self {
            translate_x: 0.0,
            rotate_y: 0.0,
            scale: 1.0,
            shadow: REST_SHADOW,
            opacity: 1.0,
            origin: Origin::Center,
            transition,
        }
    }

    /// The page flying off the surface after a committed drag.
    pub fn exit(direction: Direction, page_width: f32, transition: Duration) -> Self {
        let (sign, origin) = match direction {
            Direction::Forward => (-1.0, Origin::LeftEdge),
            Direction::Backward => (1.0, Origin::RightEdge),
        };
        Self {
            translate_x: sign * 1.1 * page_width,
            rotate_y: sign * 150.0,
            scale: 0.5,
            shadow: MAX_SHADOW,
            opacity: 0.0,
            origin,
            transition,
        }
    }
}

/// Follow-the-pointer transform for a drag `delta` pixels from where it started.
pub fn drag_visual_state(delta: f32, page_width: f32) -> DragVisual {
    let width = page_width.max(1.0);
    let rotate_factor = 90.0 / (width / 1.5);
    let rotate_y = (delta * rotate_factor * 0.3).clamp(-MAX_ROTATION, MAX_ROTATION);
    let origin = if delta < 0.0 {
        Origin::LeftEdge
    } else if delta > 0.0 {
        Origin::RightEdge
    } else {
        Origin::Center
    };
    DragVisual {
        translate_x: delta * 0.7,
        rotate_y,
        scale: (1.0 - delta.abs() / (width * 2.0)).max(MIN_SCALE),
        shadow: (delta.abs() / width).min(MAX_SHADOW),
        opacity: 1.0,
        origin,
        transition: Duration::ZERO,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragPhase {
    Idle,
    Dragging { start_x: f32, current_x: f32 },
    Committing(Direction),
    SpringingBack,
}

/// What a release decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    Commit(Direction),
    SpringBack,
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSettings {
    pub zones: DragZones,
    /// Fraction of the page width a drag must cover to turn the page.
    pub threshold: f32,
    pub exit: Duration,
    pub spring_back: Duration,
}

impl Default for DragSettings {
    fn default() -> Self {
        Self {
            zones: DragZones::default(),
            threshold: 0.25,
            exit: Duration::from_millis(500),
            spring_back: Duration::from_millis(300),
        }
    }
}

#[derive(Debug)]
pub struct DragGesture {
    settings: DragSettings,
    phase: DragPhase,
    visual: Option<DragVisual>,
    grabbable: bool,
    pending: Option<TaskHandle>,
}

impl DragGesture {
    pub fn new(settings: DragSettings) -> Self {
        Self {
            settings,
            phase: DragPhase::Idle,
            visual: None,
            grabbable: false,
            pending: None,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    pub fn visual(&self) -> Option<&DragVisual> {
        self.visual.as_ref()
    }

    pub fn grabbable(&self) -> bool {
        self.grabbable
    }

    /// Pointer down. Returns whether a drag started.
    pub fn press(
        &mut self,
        x: f32,
        rect: &PageRect,
        turning: bool,
        timers: &mut Scheduler<Timer>,
    ) -> bool {
        if turning || matches!(self.phase, DragPhase::Committing(_)) {
            return false;
        }
        if self.settings.zones.edge_at(x, rect).is_none() {
            return false;
        }
        self.cancel_pending(timers);
        self.phase = DragPhase::Dragging {
            start_x: x,
            current_x: x,
        };
        self.visual = Some(drag_visual_state(0.0, rect.width));
        self.grabbable = false;
        true
    }

    pub fn drag_to(&mut self, x: f32, rect: &PageRect, turning: bool) {
        if turning {
            return;
        }
        if let DragPhase::Dragging { start_x, .. } = self.phase {
            self.phase = DragPhase::Dragging {
                start_x,
                current_x: x,
            };
            self.visual = Some(drag_visual_state(x - start_x, rect.width));
        }
    }

    /// Pointer up: commit, spring back, or nothing if no drag was running.
    pub fn release(
        &mut self,
        rect: &PageRect,
        turning: bool,
        timers: &mut Scheduler<Timer>,
    ) -> Release {
        let DragPhase::Dragging { start_x, current_x } = self.phase else {
            return Release::Ignored;
        };
        if turning {
            self.phase = DragPhase::Idle;
            self.visual = None;
            return Release::Ignored;
        }

        let delta = current_x - start_x;
        let threshold = rect.width * self.settings.threshold;
        let direction = if delta < -threshold {
            Some(Direction::Forward)
        } else if delta > threshold {
            Some(Direction::Backward)
        } else {
            None
        };

        match direction {
            Some(direction) => {
                self.phase = DragPhase::Committing(direction);
                self.visual = Some(DragVisual::exit(direction, rect.width, self.settings.exit));
                self.pending =
                    Some(timers.schedule(self.settings.exit, Timer::DragCommitted(direction)));
                Release::Commit(direction)
            }
            None => {
                self.phase = DragPhase::SpringingBack;
                self.visual = Some(DragVisual::at_rest(self.settings.spring_back));
                self.pending =
                    Some(timers.schedule(self.settings.spring_back, Timer::SpringBackSettled));
                Release::SpringBack
            }
        }
    }

    /// Exit animation finished; returns the direction to navigate.
    pub fn finish_commit(&mut self) -> Option<Direction> {
        let DragPhase::Committing(direction) = self.phase else {
            return None;
        };
        self.phase = DragPhase::Idle;
        self.visual = None;
        self.pending = None;
        Some(direction)
    }

    pub fn finish_spring_back(&mut self) {
        if self.phase == DragPhase::SpringingBack {
            self.phase = DragPhase::Idle;
            self.visual = None;
            self.pending = None;
        }
    }

    /// Pointer movement whether or not a drag is running; only toggles the
    /// grabbable affordance.
    pub fn hover(&mut self, x: f32, rect: &PageRect, turning: bool) {
        let busy = turning
            || matches!(
                self.phase,
                DragPhase::Dragging { .. } | DragPhase::Committing(_)
            );
        self.grabbable = !busy && self.settings.zones.edge_at(x, rect).is_some();
    }

    pub fn reset(&mut self, timers: &mut Scheduler<Timer>) {
        self.cancel_pending(timers);
        self.phase = DragPhase::Idle;
        self.visual = None;
        self.grabbable = false;
    }

    fn cancel_pending(&mut self, timers: &mut Scheduler<Timer>) {
        if let Some(handle) = self.pending.take() {
            timers.cancel(handle);
        }
    }
}
