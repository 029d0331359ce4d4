//! # Vector Helpers
//!
//! Thin additions on top of `glam` shared by every generator: guarded
//! normalization, face normals, cube-face interpolation and the circle
//! parametrization used by the round primitives.

use config::constants::NORMAL_EPSILON;
use glam::Vec3;

/// Normalizes `v`, or returns `fallback` when `v` is too short or not finite.
///
/// Every normalization of a computed vector goes through this guard so
/// degenerate input yields a usable unit normal instead of NaN.
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use primitive_mesh::math::normalize_or;
///
/// assert_eq!(normalize_or(Vec3::new(0.0, 3.0, 0.0), Vec3::X), Vec3::Y);
/// assert_eq!(normalize_or(Vec3::ZERO, Vec3::X), Vec3::X);
/// ```
#[inline]
pub fn normalize_or(v: Vec3, fallback: Vec3) -> Vec3 {
    normalize_or_with(v, fallback, NORMAL_EPSILON)
}

/// [`normalize_or`] with an explicit length threshold.
#[inline]
pub fn normalize_or_with(v: Vec3, fallback: Vec3, epsilon: f32) -> Vec3 {
    let length = v.length();
    if length.is_finite() && length > epsilon {
        v / length
    } else {
        fallback
    }
}

/// Unit normal of triangle `(a, b, c)` following its winding.
///
/// Counter-clockwise triangles (seen from the front) yield the front-facing
/// normal. Zero-area triangles yield `fallback`.
#[inline]
pub fn face_normal(a: Vec3, b: Vec3, c: Vec3, fallback: Vec3) -> Vec3 {
    normalize_or((b - a).cross(c - a), fallback)
}

/// Bilinear interpolation across a quad given as four corners.
///
/// `v` runs from `corners[0]` towards `corners[1]` (and from `corners[3]`
/// towards `corners[2]`), `u` runs across between those two edges.
///
/// ```text
/// (u,v)=(0,0) -> corners[0]    (1,0) -> corners[3]
/// (u,v)=(0,1) -> corners[1]    (1,1) -> corners[2]
/// ```
#[inline]
pub fn bilerp(corners: &[Vec3; 4], u: f32, v: f32) -> Vec3 {
    let near = corners[0].lerp(corners[1], v);
    let far = corners[3].lerp(corners[2], v);
    near.lerp(far, u)
}

/// Point on a horizontal circle of `radius` at height `y`.
///
/// Angle zero lies on +Z and angles increase towards +X.
#[inline]
pub fn ring_point(angle: f32, radius: f32, y: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(sin * radius, y, cos * radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_normalize_or_unit_result() {
        let n = normalize_or(Vec3::new(3.0, 4.0, 0.0), Vec3::Y);
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(n.x, 0.6, epsilon = 1e-6);
    }

    #[test]
    fn test_normalize_or_degenerate_uses_fallback() {
        assert_eq!(normalize_or(Vec3::splat(1e-9), Vec3::NEG_Y), Vec3::NEG_Y);
        assert_eq!(normalize_or(Vec3::splat(f32::NAN), Vec3::Z), Vec3::Z);
        assert_eq!(normalize_or(Vec3::splat(f32::INFINITY), Vec3::Z), Vec3::Z);
    }

    #[test]
    fn test_normalize_or_with_threshold() {
        assert_eq!(normalize_or_with(Vec3::X * 0.5, Vec3::Y, 1.0), Vec3::Y);
        assert_eq!(normalize_or_with(Vec3::X * 2.0, Vec3::Y, 1.0), Vec3::X);
    }

    #[test]
    fn test_face_normal_ccw_points_up() {
        // Counter-clockwise seen from +Y
        let n = face_normal(Vec3::ZERO, Vec3::Z, Vec3::X, Vec3::NEG_Y);
        assert_eq!(n, Vec3::Y);
    }

    #[test]
    fn test_face_normal_collinear() {
        let n = face_normal(Vec3::ZERO, Vec3::X, Vec3::X * 2.0, Vec3::NEG_Y);
        assert_eq!(n, Vec3::NEG_Y);
    }

    #[test]
    fn test_bilerp_corners() {
        let corners = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        ];
        assert_eq!(bilerp(&corners, 0.0, 0.0), corners[0]);
        assert_eq!(bilerp(&corners, 0.0, 1.0), corners[1]);
        assert_eq!(bilerp(&corners, 1.0, 1.0), corners[2]);
        assert_eq!(bilerp(&corners, 1.0, 0.0), corners[3]);
        assert_eq!(bilerp(&corners, 0.5, 0.5), Vec3::new(0.5, 0.5, 0.0));
    }

    #[test]
    fn test_ring_point() {
        let p = ring_point(0.0, 2.0, 1.0);
        assert_abs_diff_eq!(p.x, 0.0);
        assert_abs_diff_eq!(p.y, 1.0);
        assert_abs_diff_eq!(p.z, 2.0);

        let q = ring_point(FRAC_PI_2, 2.0, 0.0);
        assert_abs_diff_eq!(q.x, 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(q.z, 0.0, epsilon = 1e-6);
    }
}
