// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use serde::{Deserialize, Serialize};

use crate::math::{clamp, Vec3, EPSILON};

/// Dot product below which two directions count as antiparallel.
const ANTIPARALLEL_DOT: f32 = -1.0 + EPSILON;

/// Quaternion stored as `(x, y, z, w)`.
///
/// * All angles are expressed in radians.
/// * Orientations are unit quaternions; [`Quat::normalize`] restores the unit
///   norm after composition.
/// * Composition convention: `delta.multiply(&base)` applies `delta` after
///   `base`, so `delta` is expressed in world axes. The trackball uses this
///   order everywhere (drag, inertia, programmatic rotation).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Quat {
    data: [f32; 4],
}

impl Quat {
    /// Creates a quaternion from components in `(x, y, z, w)` order.
    ///
    /// Callers should provide finite components; use
    /// [`Quat::from_axis_angle`] for axis/angle construction.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Creates a quaternion from components in scalar-first `(w, x, y, z)` order.
    pub const fn from_wxyz(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, w)
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Returns the quaternion as an `(x, y, z, w)` array.
    pub fn to_array(self) -> [f32; 4] {
        self.data
    }

    /// Scalar part.
    pub fn w(&self) -> f32 {
        self.data[3]
    }

    /// X component of the vector part.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component of the vector part.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component of the vector part.
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    fn vector_part(&self) -> Vec3 {
        Vec3::new(self.x(), self.y(), self.z())
    }

    /// Constructs a quaternion from a rotation axis and angle in radians.
    ///
    /// The axis does not need to be unit length. Returns the identity
    /// quaternion when the axis length is ≤ `EPSILON`.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let len_sq = axis.length_squared();
        if len_sq <= EPSILON * EPSILON {
            return Self::identity();
        }
        let norm_axis = axis.scale(1.0 / len_sq.sqrt());
        let (sin_half, cos_half) = (angle * 0.5).sin_cos();
        let scaled = norm_axis.scale(sin_half);
        Self::new(scaled.x(), scaled.y(), scaled.z(), cos_half)
    }

    /// Minimal-angle rotation taking direction `from` onto direction `to`.
    ///
    /// Inputs need not be unit length. Zero-length inputs yield the identity.
    /// Antiparallel inputs rotate by π about a perpendicular axis chosen
    /// deterministically: `X × from`, or `Y × from` when `from` lies along X.
    ///
    /// # Examples
    /// ```
    /// use trackball_core::math::{Quat, Vec3};
    /// let q = Quat::from_vectors(Vec3::UNIT_Z, Vec3::UNIT_X);
    /// let v = q.rotate_vector(Vec3::UNIT_Z);
    /// assert!((v.x() - 1.0).abs() < 1e-6);
    /// ```
    pub fn from_vectors(from: Vec3, to: Vec3) -> Self {
        let a = from.normalize();
        let b = to.normalize();
        if a == Vec3::ZERO || b == Vec3::ZERO {
            return Self::identity();
        }

        let dot = a.dot(&b);
        if dot < ANTIPARALLEL_DOT {
            let mut axis = Vec3::UNIT_X.cross(&a);
            if axis.length() <= EPSILON {
                axis = Vec3::UNIT_Y.cross(&a);
            }
            let axis = axis.normalize();
            return Self::new(axis.x(), axis.y(), axis.z(), 0.0);
        }

        let c = a.cross(&b);
        Self::new(c.x(), c.y(), c.z(), 1.0 + dot).normalize()
    }

    /// Hamilton product of two quaternions (`self * other`).
    ///
    /// For rotations, the result applies `other` first and `self` second.
    /// Quaternion multiplication is non‑commutative. Inputs need not be
    /// normalized; chains of products drift and should be renormalized.
    pub fn multiply(&self, other: &Self) -> Self {
        let (ax, ay, az, aw) = (self.x(), self.y(), self.z(), self.w());
        let (bx, by, bz, bw) = (other.x(), other.y(), other.z(), other.w());

        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Conjugate; the inverse rotation for unit quaternions.
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z(), self.w())
    }

    /// Four-component dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z() + self.w() * other.w()
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Normalises the quaternion; returns identity when norm is ~0.
    pub fn normalize(&self) -> Self {
        let len = self.norm();
        if len <= EPSILON {
            return Self::identity();
        }
        let inv = 1.0 / len;
        Self::new(
            self.x() * inv,
            self.y() * inv,
            self.z() * inv,
            self.w() * inv,
        )
    }

    /// Rotation angle in radians, `2·acos(w)` with `w` clamped to `[-1, 1]`.
    pub fn angle(&self) -> f32 {
        2.0 * clamp(self.w(), -1.0, 1.0).acos()
    }

    /// Unit rotation axis.
    ///
    /// Falls back to `+Z` when the vector part vanishes (angle near zero) and
    /// the axis is numerically undefined.
    pub fn axis(&self) -> Vec3 {
        let v = self.vector_part();
        let len = v.length();
        if len <= EPSILON {
            return Vec3::UNIT_Z;
        }
        v.scale(1.0 / len)
    }

    /// Rotates `v` by this (unit) quaternion.
    pub fn rotate_vector(&self, v: Vec3) -> Vec3 {
        let u = self.vector_part();
        let t = u.cross(&v).scale(2.0);
        v.add(&t.scale(self.w())).add(&u.cross(&t))
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}

/// Converts a 4‑element `[f32; 4]` array `(x, y, z, w)` into a `Quat`.
/// The components are taken verbatim; normalization is not enforced.
impl From<[f32; 4]> for Quat {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl From<Quat> for [f32; 4] {
    fn from(value: Quat) -> Self {
        value.data
    }
}
