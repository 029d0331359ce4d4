//! # Primitives
//!
//! Mesh generators for parametric shapes.
//!
//! The two sphere builders refine a base solid and weld shared vertices;
//! they validate their input and return [`MeshResult`](crate::MeshResult).
//! The remaining generators evaluate a closed formula per segment, clamp
//! their counts and cannot fail.

use std::f32::consts::TAU;

use config::constants::MIN_SEGMENTS;

pub mod capsule;
pub mod cone;
pub mod cube;
pub mod cube_sphere;
pub mod cylinder;
pub mod diamond;
pub mod disc;
pub mod icosphere;
pub mod plane;
pub mod ring;

pub use capsule::Capsule;
pub use cone::Cone;
pub use cube::Cube;
pub use cube_sphere::CubeSphere;
pub use cylinder::Cylinder;
pub use diamond::Diamond;
pub use disc::Disc;
pub use icosphere::{HeightFn, Icosphere};
pub use plane::Plane;
pub use ring::Ring;

/// Raises a requested segment count to the smallest closed polygon.
pub(crate) fn clamp_segments(segments: u32) -> u32 {
    segments.max(MIN_SEGMENTS)
}

/// Angle of boundary `index` around a circle of `segments` steps.
///
/// `index == segments` maps back to zero so closing seams reuse the exact
/// coordinates of the first boundary.
pub(crate) fn segment_angle(index: u32, segments: u32) -> f32 {
    TAU * (index % segments) as f32 / segments as f32
}
