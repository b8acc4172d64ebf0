// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-instance trackball settings.
//!
//! Every field has a default so partial JSON blobs deserialize cleanly.

use serde::{Deserialize, Serialize};

use crate::error::ConfigValidationError;

/// Restricts dragging to a single screen axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LimitAxis {
    /// Both screen axes contribute.
    #[default]
    None,
    /// Horizontal pointer motion is ignored.
    X,
    /// Vertical pointer motion is ignored.
    Y,
}

/// Rule deciding whether a gesture starts or keeps tracking based on where
/// the pointer is relative to the active area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AreaPolicy {
    /// Gestures must start inside; frames and the release outside the area
    /// are not applied.
    #[default]
    InsideOnly,
    /// Gestures must start inside; tracking continues anywhere afterwards.
    StartInside,
    /// Gestures start and track regardless of the area.
    Always,
}

impl AreaPolicy {
    /// Whether a pointer-down at a position with the given containment starts a drag.
    pub fn accepts_start(self, inside: bool) -> bool {
        inside || self == Self::Always
    }

    /// Whether a drag update at a position with the given containment is applied.
    pub fn tracks(self, inside: bool) -> bool {
        inside || self != Self::InsideOnly
    }
}

/// Post-release spin tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InertiaConfig {
    /// Spin after release at all.
    pub enabled: bool,
    /// Per-frame multiplicative decay of the spin step, strictly in `(0, 1)`.
    pub damping: f32,
    /// Spin stops once the per-frame step drops below this (radians/frame).
    pub min_velocity: f32,
    /// Upper bound on the initial per-frame step (radians/frame).
    pub max_step: f32,
    /// Milliseconds of drag time that count as one frame of elapsed time.
    pub time_divisor: f32,
}

impl Default for InertiaConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            damping: 0.93,
            min_velocity: 1e-3,
            max_step: 0.2,
            time_divisor: 50.0,
        }
    }
}

impl InertiaConfig {
    /// Default tuning with spin switched on.
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    /// Checks ranges; the decay only terminates for `damping < 1` and a
    /// positive `min_velocity`.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !(self.damping.is_finite() && self.damping > 0.0 && self.damping < 1.0) {
            return Err(invalid("inertia.damping", "must lie strictly between 0 and 1"));
        }
        if !(self.min_velocity.is_finite() && self.min_velocity > 0.0) {
            return Err(invalid("inertia.min_velocity", "must be positive"));
        }
        if !(self.max_step.is_finite() && self.max_step > 0.0) {
            return Err(invalid("inertia.max_step", "must be positive"));
        }
        if !(self.time_divisor.is_finite() && self.time_divisor > 0.0) {
            return Err(invalid("inertia.time_divisor", "must be positive"));
        }
        Ok(())
    }
}

/// Immutable per-instance trackball configuration.
///
/// `enabled` is the only field the facade mutates after construction (via
/// [`crate::Trackball::set_enabled`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackballConfig {
    /// Accept new gestures.
    pub enabled: bool,
    /// Sphere radius relative to the rect; values below 1 increase rotation per pixel.
    pub ball_size: f32,
    /// Width of the rounded rim between the dome and the flat outer zone.
    pub border: f32,
    /// Optional single-axis restriction.
    pub limit_axis: LimitAxis,
    /// Mirror horizontal motion about the drag start.
    pub invert_x: bool,
    /// Mirror vertical motion about the drag start.
    pub invert_y: bool,
    /// Containment rule for the active area.
    pub area_policy: AreaPolicy,
    /// Post-release spin.
    pub inertia: InertiaConfig,
}

impl Default for TrackballConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ball_size: 0.75,
            border: 0.5,
            limit_axis: LimitAxis::None,
            invert_x: false,
            invert_y: false,
            area_policy: AreaPolicy::InsideOnly,
            inertia: InertiaConfig::default(),
        }
    }
}

impl TrackballConfig {
    /// Sets the ball size factor.
    pub fn with_ball_size(mut self, ball_size: f32) -> Self {
        self.ball_size = ball_size;
        self
    }

    /// Sets the rim width.
    pub fn with_border(mut self, border: f32) -> Self {
        self.border = border;
        self
    }

    /// Sets the axis restriction.
    pub fn with_limit_axis(mut self, limit_axis: LimitAxis) -> Self {
        self.limit_axis = limit_axis;
        self
    }

    /// Sets both inversion flags.
    pub fn with_inversion(mut self, invert_x: bool, invert_y: bool) -> Self {
        self.invert_x = invert_x;
        self.invert_y = invert_y;
        self
    }

    /// Sets the area policy.
    pub fn with_area_policy(mut self, area_policy: AreaPolicy) -> Self {
        self.area_policy = area_policy;
        self
    }

    /// Sets the inertia tuning.
    pub fn with_inertia(mut self, inertia: InertiaConfig) -> Self {
        self.inertia = inertia;
        self
    }

    /// Checks every numeric field against its valid range.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !(self.ball_size.is_finite() && self.ball_size > 0.0) {
            return Err(invalid("ball_size", "must be positive"));
        }
        if !(self.border.is_finite() && self.border >= 0.0) {
            return Err(invalid("border", "must be non-negative"));
        }
        self.inertia.validate()
    }
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigValidationError {
    ConfigValidationError { field, reason }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(TrackballConfig::default().validate().is_ok());
        assert!(!TrackballConfig::default().inertia.enabled);
    }

    #[test]
    fn damping_of_one_is_rejected() {
        let cfg = TrackballConfig::default().with_inertia(InertiaConfig {
            damping: 1.0,
            ..InertiaConfig::enabled()
        });
        let err = cfg.validate().unwrap_err();
        assert_eq!(err.field, "inertia.damping");
    }

    #[test]
    fn zero_ball_size_is_rejected() {
        let err = TrackballConfig::default()
            .with_ball_size(0.0)
            .validate()
            .unwrap_err();
        assert_eq!(err.field, "ball_size");
    }

    #[test]
    fn policies_gate_start_and_tracking() {
        assert!(!AreaPolicy::InsideOnly.accepts_start(false));
        assert!(!AreaPolicy::StartInside.accepts_start(false));
        assert!(AreaPolicy::Always.accepts_start(false));
        assert!(!AreaPolicy::InsideOnly.tracks(false));
        assert!(AreaPolicy::StartInside.tracks(false));
        assert!(AreaPolicy::InsideOnly.tracks(true));
    }

    #[test]
    fn serialized_names_are_stable() {
        let json = serde_json::to_value(
            TrackballConfig::default()
                .with_limit_axis(LimitAxis::X)
                .with_area_policy(AreaPolicy::StartInside),
        )
        .unwrap();
        assert_eq!(json["limit_axis"], "x");
        assert_eq!(json["area_policy"], "start-inside");
        assert_eq!(json["inertia"]["time_divisor"], 50.0);
    }

    #[test]
    fn empty_object_deserializes_to_defaults() {
        let cfg: TrackballConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, TrackballConfig::default());
    }
}
