//! # Ring Primitive
//!
//! Annulus on the XZ plane facing +Y.

use config::constants::{DEFAULT_RADIUS, DEFAULT_RING_INNER_RADIUS, DEFAULT_SEGMENTS};
use glam::Vec3;

use super::{clamp_segments, segment_angle};
use crate::math::ring_point;
use crate::mesh::{Mesh, MeshBuilder, Vertex};

/// Flat ring between `inner_radius` and `outer_radius`.
///
/// Vertices alternate inner, outer around the circle; each segment is one
/// quad split into two triangles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub segments: u32,
    pub outer_radius: f32,
    pub inner_radius: f32,
}

impl Default for Ring {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
            outer_radius: DEFAULT_RADIUS,
            inner_radius: DEFAULT_RING_INNER_RADIUS,
        }
    }
}

impl Ring {
    /// Generates the mesh.
    pub fn generate(&self) -> Mesh {
        let segments = clamp_segments(self.segments);
        let mut builder = MeshBuilder::with_capacity(2 * segments as usize, 2 * segments as usize);

        for i in 0..segments {
            let angle = segment_angle(i, segments);
            builder.add_vertex(Vertex::new(ring_point(angle, self.inner_radius, 0.0), Vec3::Y));
            builder.add_vertex(Vertex::new(ring_point(angle, self.outer_radius, 0.0), Vec3::Y));
        }
        for i in 0..segments {
            let base = 2 * i;
            let next = 2 * ((i + 1) % segments);
            builder.add_triangle(base, base + 1, next);
            builder.add_triangle(base + 1, next + 1, next);
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_ring_counts() {
        let mesh = Ring::default().generate();
        assert_eq!(mesh.vertex_count(), 32);
        assert_eq!(mesh.triangle_count(), 32);
        assert!(mesh.validate());
    }

    #[test]
    fn test_ring_radii_alternate() {
        let ring = Ring {
            segments: 8,
            outer_radius: 3.0,
            inner_radius: 1.0,
        };
        let mesh = ring.generate();
        for (i, p) in mesh.positions().enumerate() {
            let expected = if i % 2 == 0 { 1.0 } else { 3.0 };
            assert_abs_diff_eq!(p.length(), expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_ring_faces_up() {
        let mesh = Ring::default().generate();
        for [a, b, c] in mesh.triangles() {
            let (pa, pb, pc) = (
                mesh.vertex(a).position,
                mesh.vertex(b).position,
                mesh.vertex(c).position,
            );
            assert!((pb - pa).cross(pc - pa).y > 0.0);
        }
        assert!(mesh.vertices().iter().all(|v| v.normal == Vec3::Y));
    }

    #[test]
    fn test_ring_wraps_to_first_pair() {
        let mesh = Ring {
            segments: 4,
            ..Ring::default()
        }
        .generate();
        let last: Vec<[u32; 3]> = mesh.triangles().skip(6).collect();
        assert_eq!(last, vec![[6, 7, 0], [7, 1, 0]]);
    }
}
