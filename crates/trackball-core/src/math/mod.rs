// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Rotation math for the trackball: 3D vectors and unit quaternions.
//!
//! All operations use `f32`, matching the precision hosts hand to GPU
//! uniforms. Orientations drift under long composition chains, so callers
//! that accumulate rotations renormalize after every product.

mod quat;
mod vec3;

pub use quat::Quat;
pub use vec3::Vec3;

/// Global epsilon used by math routines when detecting degenerate values.
pub const EPSILON: f32 = 1e-6;

/// Clamps `value` to the inclusive `[min, max]` range.
///
/// NaN inputs pass through unchanged; callers feeding `acos` should only pass
/// finite values.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    debug_assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds_values() {
        assert_eq!(clamp(1.5, -1.0, 1.0), 1.0);
        assert_eq!(clamp(-1.000_001, -1.0, 1.0), -1.0);
        assert_eq!(clamp(0.25, -1.0, 1.0), 0.25);
    }
}
