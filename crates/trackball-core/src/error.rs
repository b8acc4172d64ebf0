// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error types surfaced to trackball hosts.
//!
//! Numeric degeneracy (antiparallel vectors, vanishing axes) is never an
//! error; it is resolved inside [`crate::math`]. Spurious pointer events with
//! no active drag are silent no-ops.

use thiserror::Error;

/// Failure to map a pointer position onto the hemisphere.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ProjectionError {
    /// The interaction rectangle has no usable extent.
    #[error("degenerate interaction rect {width}x{height}")]
    DegenerateRect {
        /// Rectangle width as reported by the layout collaborator.
        width: f32,
        /// Rectangle height as reported by the layout collaborator.
        height: f32,
    },
    /// The pointer coordinates are NaN or infinite.
    #[error("non-finite pointer position ({x}, {y})")]
    NonFinitePoint {
        /// Pointer x.
        x: f32,
        /// Pointer y.
        y: f32,
    },
}

/// A configuration value outside its valid range.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid trackball config: {field} {reason}")]
pub struct ConfigValidationError {
    /// Offending field name (as spelled in serialized config).
    pub field: &'static str,
    /// Human-readable constraint that was violated.
    pub reason: &'static str,
}

/// Top-level error for [`crate::Trackball`] operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackballError {
    /// The pointer or rectangle could not be projected; the caller decides
    /// whether to skip the frame or re-measure.
    #[error(transparent)]
    Projection(#[from] ProjectionError),
    /// Configuration rejected at construction.
    #[error(transparent)]
    InvalidConfig(#[from] ConfigValidationError),
    /// The instance was disposed; no further state mutation is accepted.
    #[error("trackball used after dispose")]
    Disposed,
}
