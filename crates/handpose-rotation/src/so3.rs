//! # SO(3) helpers
//!
//! An axis-angle vector `v ∈ R³` encodes a rotation by `θ = ‖v‖` radians about
//! the unit axis `v / θ`. The zero vector is the identity.
//!
//! - [`exp`]: axis-angle → rotation matrix, via Rodrigues' formula
//!   `R = I + sin(θ)·K + (1 − cos(θ))·K²` where `K = hat(axis)`.
//! - [`log`]: rotation matrix → axis-angle, via `θ = acos((tr(R) − 1) / 2)` and the
//!   skew-symmetric part of `R` for the axis.
//!
//! Both maps switch to the identity / zero vector when `θ < SMALL_ANGLE_THRESHOLD`,
//! where the axis is numerically undefined.
//!
//! ## Restriction
//!
//! [`log`] recovers the axis from `R − Rᵀ`, which vanishes at `θ = π`. It is the
//! left inverse of [`exp`] only for `θ ∈ (SMALL_ANGLE_THRESHOLD, π)`; rotations of
//! `π` or more are not unwrapped and antipodal axes are not disambiguated.

use glam::{Mat3, Vec3};

/// Guards the axis normalization against division by zero.
pub const AXIS_EPSILON: f32 = 1.0e-8;

/// Below this angle (radians) a rotation is treated as the identity.
pub const SMALL_ANGLE_THRESHOLD: f32 = 1.0e-3;

/// Vector space -> Lie algebra.
///
/// Builds the cross-product matrix
/// `[[0, -z, y], [z, 0, -x], [-y, x, 0]]` so that `hat(a) * b == a.cross(b)`.
#[inline]
pub fn hat(v: Vec3) -> Mat3 {
    // glam matrices are column-major
    Mat3::from_cols(
        Vec3::new(0.0, v.z, -v.y),
        Vec3::new(-v.z, 0.0, v.x),
        Vec3::new(v.y, -v.x, 0.0),
    )
}

/// Lie algebra -> vector space. Inverse of [`hat`].
#[inline]
pub fn vee(omega: Mat3) -> Vec3 {
    Vec3::new(omega.y_axis.z, omega.z_axis.x, omega.x_axis.y)
}

/// Axis-angle vector to rotation matrix.
///
/// Returns exactly [`Mat3::IDENTITY`] for angles below [`SMALL_ANGLE_THRESHOLD`].
/// NaN input yields NaN output.
///
/// # Example
///
/// ```
/// use glam::Vec3;
/// use handpose_rotation::so3;
///
/// let r = so3::exp(Vec3::new(0.0, 0.0, std::f32::consts::FRAC_PI_2));
/// assert!((r * Vec3::X - Vec3::Y).length() < 1e-5);
/// ```
pub fn exp(v: Vec3) -> Mat3 {
    let angle = v.length();
    if angle < SMALL_ANGLE_THRESHOLD {
        return Mat3::IDENTITY;
    }
    let axis = v / (angle + AXIS_EPSILON);
    let k = hat(axis);
    Mat3::IDENTITY + k * angle.sin() + (k * k) * (1.0 - angle.cos())
}

/// Rotation matrix to axis-angle vector.
///
/// The input is assumed to be a proper rotation; it is not validated. The cosine
/// of the angle is clamped to `[-1, 1]` before `acos` to absorb numerical drift.
///
/// # Example
///
/// ```
/// use glam::{Mat3, Vec3};
/// use handpose_rotation::so3;
///
/// let v = so3::log(&Mat3::from_rotation_x(0.5));
/// assert!((v - Vec3::new(0.5, 0.0, 0.0)).length() < 1e-5);
/// ```
pub fn log(r: &Mat3) -> Vec3 {
    let trace = r.x_axis.x + r.y_axis.y + r.z_axis.z;
    let angle = ((trace - 1.0) / 2.0).clamp(-1.0, 1.0).acos();
    if angle < SMALL_ANGLE_THRESHOLD {
        return Vec3::ZERO;
    }
    // (R21 - R12, R02 - R20, R10 - R01)
    let axis = vee(*r - r.transpose());
    axis / (axis.length() + AXIS_EPSILON) * angle
}

/// Build a matrix from 9 row-major values.
///
/// # Panics
///
/// Panics if `data` holds fewer than 9 values.
#[inline]
pub fn mat3_from_row_major(data: &[f32]) -> Mat3 {
    Mat3::from_cols_slice(data).transpose()
}

/// Flatten a matrix to 9 row-major values.
#[inline]
pub fn mat3_to_row_major(m: &Mat3) -> [f32; 9] {
    m.transpose().to_cols_array()
}
