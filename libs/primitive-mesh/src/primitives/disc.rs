//! # Disc Primitive
//!
//! Filled circle on the XZ plane facing +Y, triangulated as a fan.

use config::constants::{DEFAULT_RADIUS, DEFAULT_SEGMENTS};
use glam::Vec3;

use super::{clamp_segments, segment_angle};
use crate::math::ring_point;
use crate::mesh::{Mesh, MeshBuilder, Vertex};

/// Disc made of `segments` fan triangles around a centre vertex.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::Disc;
///
/// let mesh = Disc { segments: 6, ..Disc::default() }.generate();
/// assert_eq!(mesh.vertex_count(), 7);
/// assert_eq!(mesh.triangle_count(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    /// Rim subdivisions, at least 3.
    pub segments: u32,
    pub radius: f32,
}

impl Default for Disc {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
            radius: DEFAULT_RADIUS,
        }
    }
}

impl Disc {
    /// Generates the mesh.
    pub fn generate(&self) -> Mesh {
        let segments = clamp_segments(self.segments);
        let mut builder = MeshBuilder::with_capacity(segments as usize + 1, segments as usize);

        let centre = builder.add_vertex(Vertex::new(Vec3::ZERO, Vec3::Y));
        for i in 0..segments {
            let rim = ring_point(segment_angle(i, segments), self.radius, 0.0);
            builder.add_vertex(Vertex::new(rim, Vec3::Y));
        }
        for i in 0..segments {
            let next = (i + 1) % segments;
            builder.add_triangle(centre, 1 + i, 1 + next);
        }

        builder.build()
    }
}
