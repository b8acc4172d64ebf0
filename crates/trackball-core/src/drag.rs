// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Drag session data and the interaction state machine's states.
//!
//! [`Interaction`] makes the three states mutually exclusive: a drag session
//! and a spin can never exist at the same time.

use crate::error::ProjectionError;
use crate::geometry::Rect;
use crate::inertia::InertiaState;
use crate::math::{Quat, Vec3};
use crate::projector::Projector;

/// Fieldless view of the interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No gesture in progress; the committed orientation is authoritative.
    Idle,
    /// A pointer is down and drives the live orientation.
    Dragging,
    /// The pointer was released and the orientation is coasting to rest.
    Spinning,
}

/// State of the interaction machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    /// No gesture in progress.
    Idle,
    /// Pointer down.
    Dragging(DragSession),
    /// Inertial spin after release.
    Spinning(InertiaState),
}

impl Interaction {
    /// Fieldless phase.
    pub fn phase(&self) -> Phase {
        match self {
            Self::Idle => Phase::Idle,
            Self::Dragging(_) => Phase::Dragging,
            Self::Spinning(_) => Phase::Spinning,
        }
    }
}

/// Everything a drag needs between pointer-down and pointer-up.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    start_vec: Vec3,
    last_vec: Vec3,
    start_pos: (f32, f32),
    rect: Rect,
    last_pointer: (f32, f32),
    started_ms: f64,
    last_delta: Option<Quat>,
}

impl DragSession {
    /// Opens a session at `(x, y)`, projecting the start point against `rect`.
    pub fn begin(
        projector: &Projector,
        x: f32,
        y: f32,
        rect: Rect,
        now_ms: f64,
    ) -> Result<Self, ProjectionError> {
        let start_vec = projector.project(x, y, &rect)?;
        Ok(Self {
            start_vec,
            last_vec: start_vec,
            start_pos: (x, y),
            rect,
            last_pointer: (x, y),
            started_ms: now_ms,
            last_delta: None,
        })
    }

    /// Hemisphere point under the pointer at drag start.
    pub fn start_vec(&self) -> Vec3 {
        self.start_vec
    }

    /// Hemisphere point of the most recent update.
    pub fn last_vec(&self) -> Vec3 {
        self.last_vec
    }

    /// Pointer position at drag start.
    pub fn start_pos(&self) -> (f32, f32) {
        self.start_pos
    }

    /// Rectangle the drag is currently projected against.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Latest pointer position reported by a move event.
    pub fn last_pointer(&self) -> (f32, f32) {
        self.last_pointer
    }

    /// Clock reading at pointer-down.
    pub fn started_ms(&self) -> f64 {
        self.started_ms
    }

    /// Rotation from the start point to the last update, if any update ran.
    pub fn last_delta(&self) -> Option<Quat> {
        self.last_delta
    }

    /// Records the latest pointer position without recomputing anything.
    pub fn record_pointer(&mut self, x: f32, y: f32) {
        self.last_pointer = (x, y);
    }

    /// Replaces the projection rectangle (dynamic areas).
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Recomputes the delta rotation for a pointer at `(x, y)`.
    ///
    /// Inversion mirrors the pointer about the drag start before projecting.
    /// The delta is always measured from the start point, not the previous
    /// update, so the result does not depend on how many frames ran.
    pub fn update(
        &mut self,
        projector: &Projector,
        x: f32,
        y: f32,
        invert: (bool, bool),
    ) -> Result<Quat, ProjectionError> {
        let px = if invert.0 { 2.0 * self.start_pos.0 - x } else { x };
        let py = if invert.1 { 2.0 * self.start_pos.1 - y } else { y };
        let current = projector.project(px, py, &self.rect)?;
        let delta = Quat::from_vectors(self.start_vec, current);
        self.last_vec = current;
        self.last_delta = Some(delta);
        Ok(delta)
    }
}
