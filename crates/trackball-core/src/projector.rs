// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Pointer → hemisphere projection.
//!
//! The surface has three radial zones, measured in units of the outer radius
//! `ra = 1 + border`:
//!
//! * inner dome (`dist < ri`): a true unit hemisphere, `z = sqrt(1 - dist²)`;
//! * rounded rim (`ri ≤ dist < ra`): a circular arc of radius
//!   `a = border·(1 + border/2)` that meets the dome with matching height and
//!   reaches `z = 0` at `ra`;
//! * flat outside (`dist ≥ ra`): `z = 0`, so dragging there spins the scene
//!   in the screen plane.
//!
//! `ri = 2 / (ra + 1/ra)` is where dome and rim meet; `z` is continuous and
//! non-increasing in `dist`, and never negative.

use crate::config::LimitAxis;
use crate::error::ProjectionError;
use crate::geometry::Rect;
use crate::math::Vec3;

/// Maps pointer positions inside a rectangle onto the bounded hemisphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    ball_size: f32,
    limit_axis: LimitAxis,
    outer_radius: f32,
    rim_radius: f32,
    inner_radius: f32,
}

impl Projector {
    /// Builds a projector; `ball_size` must be positive and `border`
    /// non-negative (see [`crate::TrackballConfig::validate`]).
    pub fn new(ball_size: f32, border: f32, limit_axis: LimitAxis) -> Self {
        let outer_radius = 1.0 + border;
        Self {
            ball_size,
            limit_axis,
            outer_radius,
            rim_radius: border * (1.0 + border / 2.0),
            inner_radius: 2.0 / (outer_radius + 1.0 / outer_radius),
        }
    }

    /// Radius (in outer-radius units) where the dome hands over to the rim.
    pub fn inner_radius(&self) -> f32 {
        self.inner_radius
    }

    /// Radius beyond which the surface is flat.
    pub fn outer_radius(&self) -> f32 {
        self.outer_radius
    }

    /// Verifies `rect` can frame a projection and returns its scale
    /// denominator `max(width, height) - 1`.
    pub fn check_rect(rect: &Rect) -> Result<f32, ProjectionError> {
        let scale = rect.width.max(rect.height) - 1.0;
        if rect.is_degenerate() || scale <= 0.0 {
            return Err(ProjectionError::DegenerateRect {
                width: rect.width,
                height: rect.height,
            });
        }
        Ok(scale)
    }

    /// Projects a pointer position onto the hemisphere.
    ///
    /// Coordinates are normalized against `max(width, height) - 1` so that
    /// the centre pixel maps to 0 and the far pixel of the longer side to ±1;
    /// non-square rects keep square pixels.
    pub fn project(&self, x: f32, y: f32, rect: &Rect) -> Result<Vec3, ProjectionError> {
        let scale = Self::check_rect(rect)?;
        if !(x.is_finite() && y.is_finite()) {
            return Err(ProjectionError::NonFinitePoint { x, y });
        }

        let mut nx = (2.0 * (x - rect.left) - (rect.width - 1.0)) / scale;
        let mut ny = (2.0 * (y - rect.top) - (rect.height - 1.0)) / scale;
        // huge but finite coordinates can still overflow here
        if !(nx.is_finite() && ny.is_finite()) {
            return Err(ProjectionError::NonFinitePoint { x, y });
        }

        if self.limit_axis == LimitAxis::X {
            nx = 0.0;
        } else {
            nx /= self.ball_size;
        }
        if self.limit_axis == LimitAxis::Y {
            ny = 0.0;
        } else {
            ny /= self.ball_size;
        }

        Ok(Vec3::new(nx, ny, self.height_at(nx.hypot(ny))))
    }

    /// Surface height for a normalized radial distance `r` (before scaling by
    /// the outer radius).
    pub fn height_at(&self, r: f32) -> f32 {
        let dist = r * self.outer_radius;
        if dist < self.inner_radius {
            return (1.0 - dist * dist).max(0.0).sqrt();
        }
        if dist < self.outer_radius {
            let a = self.rim_radius;
            let dr = self.outer_radius - dist;
            return (a - ((a + dr) * (a - dr)).max(0.0).sqrt()).max(0.0);
        }
        0.0
    }
}
