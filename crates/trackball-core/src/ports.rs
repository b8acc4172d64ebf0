// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Port traits separating the trackball core from platform plumbing.
//!
//! The host supplies an input source, a layout provider, a frame scheduler,
//! and an observer at construction; the core never touches a window system
//! directly.

use std::collections::VecDeque;

use crate::area::ElementId;
use crate::geometry::Rect;
use crate::math::Quat;

/// Single-pointer input, in the same coordinate space as [`Rect`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary pointer pressed.
    Down {
        /// Pointer x.
        x: f32,
        /// Pointer y.
        y: f32,
    },
    /// Pointer moved (pressed or not).
    Move {
        /// Pointer x.
        x: f32,
        /// Pointer y.
        y: f32,
    },
    /// Primary pointer released.
    Up {
        /// Pointer x.
        x: f32,
        /// Pointer y.
        y: f32,
    },
    /// The platform aborted the gesture.
    Cancel,
}

/// Source of pointer events registered on behalf of one trackball.
pub trait InputSource {
    /// Next buffered event, if any.
    fn next_event(&mut self) -> Option<PointerEvent>;
    /// Unregister from the platform; called once on dispose.
    fn detach(&mut self);
}

/// Layout collaborator: measures the rectangles an active area can refer to.
pub trait LayoutPort {
    /// Rectangle of the element the trackball is attached to.
    fn scene_rect(&self) -> Rect;
    /// Rectangle of the first element matching `selector`, if any.
    fn query_selector(&self, selector: &str) -> Option<Rect>;
    /// Rectangle of a host-registered element, if it still exists.
    fn element_rect(&self, element: ElementId) -> Option<Rect>;
}

/// Handle for one requested frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(pub u64);

/// Frame cadence and clock.
///
/// `request_frame` schedules exactly one callback; the host answers by calling
/// [`crate::Trackball::on_frame`] with the returned token. `cancel_frame` must
/// be safe to call with a token that already fired.
pub trait FrameScheduler {
    /// Schedule a callback for the next display refresh.
    fn request_frame(&mut self) -> FrameToken;
    /// Drop a scheduled callback.
    fn cancel_frame(&mut self, token: FrameToken);
    /// Monotonic time in milliseconds.
    fn now_ms(&self) -> f64;
}

/// Rendering collaborator notified of orientation changes.
pub trait TrackballObserver {
    /// The live orientation changed and should be redrawn.
    fn on_draw(&mut self, orientation: Quat);
    /// A drag started.
    fn on_gesture_start(&mut self, orientation: Quat) {
        let _ = orientation;
    }
    /// A gesture (including any inertial spin) came to rest.
    fn on_gesture_end(&mut self, orientation: Quat) {
        let _ = orientation;
    }
}

/// [`FrameScheduler`] for hosts that run their own render loop.
///
/// Holds at most one pending token. The host advances the clock with
/// [`FrameLoop::set_now`] and polls [`FrameLoop::take_due`] once per frame.
#[derive(Debug, Default)]
pub struct FrameLoop {
    next_id: u64,
    pending: Option<FrameToken>,
    now_ms: f64,
    requested: u64,
}

impl FrameLoop {
    /// Creates a loop with the clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the current time.
    pub fn set_now(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
    }

    /// Moves the clock forward.
    pub fn advance(&mut self, delta_ms: f64) {
        self.now_ms += delta_ms;
    }

    /// Takes the pending token, if a frame was requested and not cancelled.
    pub fn take_due(&mut self) -> Option<FrameToken> {
        self.pending.take()
    }

    /// Whether a frame is currently requested.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Total number of frames ever requested.
    pub fn requested(&self) -> u64 {
        self.requested
    }
}

impl FrameScheduler for FrameLoop {
    fn request_frame(&mut self) -> FrameToken {
        self.next_id += 1;
        self.requested += 1;
        let token = FrameToken(self.next_id);
        self.pending = Some(token);
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        if self.pending == Some(token) {
            self.pending = None;
        }
    }

    fn now_ms(&self) -> f64 {
        self.now_ms
    }
}

/// Queue-backed [`InputSource`] for hosts that buffer platform events.
#[derive(Debug, Default)]
pub struct VecInput {
    queue: VecDeque<PointerEvent>,
    detached: bool,
}

impl VecInput {
    /// Creates an empty, attached source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffers an event; ignored once detached.
    pub fn push(&mut self, event: PointerEvent) {
        if !self.detached {
            self.queue.push_back(event);
        }
    }

    /// Whether [`InputSource::detach`] has been called.
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Number of buffered events.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether no events are buffered.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl InputSource for VecInput {
    fn next_event(&mut self) -> Option<PointerEvent> {
        self.queue.pop_front()
    }

    fn detach(&mut self) {
        self.detached = true;
        self.queue.clear();
    }
}
