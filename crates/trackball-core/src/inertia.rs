// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Post-release inertial spin.
//!
//! The spin step decays geometrically (`step *= damping` per frame) from a
//! clamped initial value. With `damping ∈ (0, 1)` the total angle is bounded
//! by `step₀ / (1 - damping)` and the spin settles after
//! `ceil(ln(min_velocity / step₀) / ln(damping))` frames.

use crate::config::InertiaConfig;
use crate::math::{Quat, Vec3};

/// Initial per-frame spin step for a release.
///
/// `delta` is the rotation from drag start to release and `elapsed_ms` the
/// drag duration. Elapsed time is counted in units of `time_divisor` and
/// floored at one frame, then the speed is capped at `max_step`.
///
/// A non-finite angle counts as no motion.
pub fn release_step(delta: &Quat, elapsed_ms: f64, cfg: &InertiaConfig) -> f32 {
    let angle = delta.angle().abs();
    if !angle.is_finite() {
        return 0.0;
    }
    #[allow(clippy::cast_possible_truncation)]
    let frames = ((elapsed_ms / f64::from(cfg.time_divisor)) as f32).max(1.0);
    (angle / frames).min(cfg.max_step)
}

/// Result of one spin frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinStep {
    /// Still spinning; redraw with this orientation.
    Spinning(Quat),
    /// Spin decayed below the minimum velocity; this is the final orientation.
    Settled(Quat),
}

impl SpinStep {
    /// Orientation produced by the frame.
    pub fn orientation(&self) -> Quat {
        match *self {
            Self::Spinning(q) | Self::Settled(q) => q,
        }
    }
}

/// Spin in progress after a release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InertiaState {
    axis: Vec3,
    angle: f32,
    step: f32,
    base: Quat,
}

impl InertiaState {
    /// Seeds a spin about `delta`'s axis starting from `base`.
    ///
    /// Returns `None` when `step` is already below `min_velocity`: a release
    /// that slow would settle on its first frame.
    pub fn start(delta: &Quat, step: f32, base: Quat, min_velocity: f32) -> Option<Self> {
        if step.is_nan() || step <= 0.0 || step < min_velocity {
            return None;
        }
        Some(Self {
            axis: delta.axis(),
            angle: 0.0,
            step,
            base,
        })
    }

    /// Spin axis (unit).
    pub fn axis(&self) -> Vec3 {
        self.axis
    }

    /// Angle accumulated so far.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Angle the next frame will add.
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Orientation at release.
    pub fn base(&self) -> Quat {
        self.base
    }

    /// Advances one frame.
    pub fn advance(&mut self, damping: f32, min_velocity: f32) -> SpinStep {
        self.angle += self.step;
        self.step *= damping;
        let live = Quat::from_axis_angle(self.axis, self.angle)
            .multiply(&self.base)
            .normalize();
        if self.step < min_velocity {
            SpinStep::Settled(live)
        } else {
            SpinStep::Spinning(live)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn slow_drags_are_time_scaled() {
        let cfg = InertiaConfig::enabled();
        let delta = Quat::from_axis_angle(Vec3::UNIT_Y, 0.1);
        // 500 ms / 50 = 10 frames
        let step = release_step(&delta, 500.0, &cfg);
        assert!((step - 0.01).abs() < 1e-5, "step {step}");
    }

    #[test]
    fn fast_flicks_are_capped() {
        let cfg = InertiaConfig::enabled();
        let delta = Quat::from_axis_angle(Vec3::UNIT_Y, 1.5);
        assert_eq!(release_step(&delta, 0.0, &cfg), cfg.max_step);
    }

    #[test]
    fn zero_step_does_not_spin() {
        assert!(InertiaState::start(&Quat::identity(), 0.0, Quat::identity(), 1e-3).is_none());
    }

    #[test]
    fn negligible_step_does_not_spin() {
        let delta = Quat::from_axis_angle(Vec3::UNIT_Y, 1e-4);
        assert!(InertiaState::start(&delta, 5e-4, Quat::identity(), 1e-3).is_none());
        assert!(InertiaState::start(&delta, 1e-3, Quat::identity(), 1e-3).is_some());
    }

    #[test]
    fn non_finite_delta_has_no_release_speed() {
        let cfg = InertiaConfig::enabled();
        let delta = Quat::new(f32::NAN, f32::NAN, f32::NAN, f32::NAN);
        assert_eq!(release_step(&delta, 16.0, &cfg), 0.0);
    }

    #[test]
    fn advance_accumulates_and_decays() {
        let delta = Quat::from_axis_angle(Vec3::UNIT_X, 0.3);
        let mut spin = InertiaState::start(&delta, 0.2, Quat::identity(), 1e-3).unwrap();
        let step = spin.advance(0.5, 1e-3);
        assert!(matches!(step, SpinStep::Spinning(_)));
        assert!((spin.angle() - 0.2).abs() < 1e-6);
        assert!((spin.step() - 0.1).abs() < 1e-6);
        let q = step.orientation();
        assert!((q.angle() - 0.2).abs() < 1e-5);
    }
}
