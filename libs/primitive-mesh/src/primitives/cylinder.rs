//! # Cylinder Primitive
//!
//! Closed cylinder along the Y axis, centred on the origin.

use config::constants::{DEFAULT_HEIGHT, DEFAULT_RADIUS, DEFAULT_SEGMENTS};
use glam::Vec3;

use super::{clamp_segments, segment_angle};
use crate::math::{face_normal, normalize_or, ring_point};
use crate::mesh::{Mesh, MeshBuilder, Vertex};

/// Cylinder spanning `y = -height / 2` to `y = height / 2`.
///
/// With smooth normals the caps share their centre vertices and each rim
/// point appears twice, once with the cap normal and once with the radial
/// side normal. Without them every triangle gets its own vertices.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::Cylinder;
///
/// let mesh = Cylinder { segments: 8, ..Cylinder::default() }.generate();
/// assert_eq!(mesh.vertex_count(), 2 + 4 * 8);
/// assert_eq!(mesh.triangle_count(), 4 * 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    pub radius: f32,
    pub height: f32,
    pub segments: u32,
    pub smooth_normals: bool,
}

impl Default for Cylinder {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            height: DEFAULT_HEIGHT,
            segments: DEFAULT_SEGMENTS,
            smooth_normals: true,
        }
    }
}

impl Cylinder {
    /// Generates the mesh.
    pub fn generate(&self) -> Mesh {
        let segments = clamp_segments(self.segments);
        if self.smooth_normals {
            self.smooth(segments)
        } else {
            self.flat(segments)
        }
    }

    fn smooth(&self, segments: u32) -> Mesh {
        let mut builder = MeshBuilder::with_capacity(2 + 4 * segments as usize, 4 * segments as usize);
        let top_y = self.height * 0.5;

        let bottom = builder.add_vertex(Vertex::new(Vec3::new(0.0, -top_y, 0.0), Vec3::NEG_Y));
        let top = builder.add_vertex(Vertex::new(Vec3::new(0.0, top_y, 0.0), Vec3::Y));

        for i in 0..segments {
            let angle = segment_angle(i, segments);
            let lower = ring_point(angle, self.radius, -top_y);
            let upper = ring_point(angle, self.radius, top_y);
            let side = normalize_or(Vec3::new(lower.x, 0.0, lower.z), ring_point(angle, 1.0, 0.0));

            builder.add_vertex(Vertex::new(lower, Vec3::NEG_Y));
            builder.add_vertex(Vertex::new(upper, Vec3::Y));
            builder.add_vertex(Vertex::new(lower, side));
            builder.add_vertex(Vertex::new(upper, side));
        }

        // Per segment: bottom cap, top cap, side bottom, side top
        for i in 0..segments {
            let (current, next) = (2 + 4 * i, 2 + 4 * ((i + 1) % segments));
            builder.add_triangle(bottom, next, current);
            builder.add_triangle(top, current + 1, next + 1);
            builder.add_triangle(current + 2, next + 2, current + 3);
            builder.add_triangle(next + 3, current + 3, next + 2);
        }

        builder.build()
    }

    fn flat(&self, segments: u32) -> Mesh {
        let mut builder = MeshBuilder::with_capacity(12 * segments as usize, 4 * segments as usize);
        let top_y = self.height * 0.5;
        let bottom_centre = Vec3::new(0.0, -top_y, 0.0);
        let top_centre = Vec3::new(0.0, top_y, 0.0);

        for i in 0..segments {
            let (angle, next_angle) = (segment_angle(i, segments), segment_angle(i + 1, segments));
            let bottom1 = ring_point(angle, self.radius, -top_y);
            let bottom2 = ring_point(next_angle, self.radius, -top_y);
            let top1 = ring_point(angle, self.radius, top_y);
            let top2 = ring_point(next_angle, self.radius, top_y);

            builder.add_flat_triangle(
                Vertex::new(bottom_centre, Vec3::NEG_Y),
                Vertex::new(bottom2, Vec3::NEG_Y),
                Vertex::new(bottom1, Vec3::NEG_Y),
            );
            builder.add_flat_triangle(
                Vertex::new(top_centre, Vec3::Y),
                Vertex::new(top1, Vec3::Y),
                Vertex::new(top2, Vec3::Y),
            );

            let outward = ring_point((angle + next_angle) * 0.5, 1.0, 0.0);
            let side = face_normal(bottom1, bottom2, top1, outward);
            builder.add_flat_triangle(
                Vertex::new(bottom1, side),
                Vertex::new(bottom2, side),
                Vertex::new(top1, side),
            );
            builder.add_flat_triangle(
                Vertex::new(top1, side),
                Vertex::new(bottom2, side),
                Vertex::new(top2, side),
            );
        }

        builder.build()
    }
}
