//! Pure 3D rotation and perspective projection helpers.
//!
//! Stateless points-in, points-out functions. The render path calls these
//! once per sampled ring point per frame, so the axis-aligned rotations stay
//! straight-line trigonometry rather than full matrix products.

use glam::{Vec2, Vec3};

use crate::constants::{CAMERA_DISTANCE, FOCAL_LENGTH, MIN_CAMERA_DEPTH};

/// Rotate `p` about the X axis by `angle` radians.
#[inline]
pub fn rotate_x(p: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(p.x, p.y * c - p.z * s, p.y * s + p.z * c)
}

/// Rotate `p` about the Y axis by `angle` radians.
#[inline]
pub fn rotate_y(p: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(p.x * c + p.z * s, p.y, -p.x * s + p.z * c)
}

/// Rotate `p` about the Z axis by `angle` radians.
#[inline]
pub fn rotate_z(p: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(p.x * c - p.y * s, p.x * s + p.y * c, p.z)
}

/// Rodrigues' rotation of `p` about `axis` by `angle` radians.
///
/// The axis is normalized internally; a degenerate axis falls back to +Z.
/// Preserves vector length, is the identity at `angle = 0`, and composes
/// additively about a fixed axis.
pub fn rotate_about_axis(p: Vec3, axis: Vec3, angle: f32) -> Vec3 {
    let ax = normalize_or_z(axis);
    let (s, c) = angle.sin_cos();
    p * c + ax.cross(p) * s + ax * (ax.dot(p) * (1.0 - c))
}

/// Normalize `v`, mapping near-zero vectors to +Z instead of NaN.
#[inline]
pub fn normalize_or_z(v: Vec3) -> Vec3 {
    let len_sq = v.length_squared();
    if len_sq < 1e-12 {
        Vec3::Z
    } else {
        v / len_sq.sqrt()
    }
}

/// Perspective camera for the normalized image plane.
///
/// `min_depth` is the lower clamp on the perspective denominator: points at
/// or behind the camera plane squash against it rather than dividing by a
/// vanishing (or sign-flipped) value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub distance: f32,
    pub focal_length: f32,
    pub min_depth: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            distance: CAMERA_DISTANCE,
            focal_length: FOCAL_LENGTH,
            min_depth: MIN_CAMERA_DEPTH,
        }
    }
}

/// Project a scene-space point onto the normalized image plane.
///
/// Total over all inputs: the clamped denominator keeps the result finite
/// for any `z`, including `z = -distance`.
#[inline]
pub fn project(p: Vec3, camera: &Camera) -> Vec2 {
    let denom = (p.z + camera.distance).max(camera.min_depth);
    Vec2::new(
        camera.focal_length * p.x / denom,
        camera.focal_length * p.y / denom,
    )
}
