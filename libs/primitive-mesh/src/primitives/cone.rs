//! # Cone Primitive
//!
//! Cone standing on the XZ plane, centred vertically on the origin.

use config::constants::{DEFAULT_HEIGHT, DEFAULT_RADIUS, DEFAULT_SEGMENTS};
use glam::Vec3;

use super::{clamp_segments, segment_angle};
use crate::math::{face_normal, normalize_or, ring_point};
use crate::mesh::{Mesh, MeshBuilder, Vertex};

/// Cone with its base at `y = -height / 2` and apex at `y = height / 2`.
///
/// The smooth variant shares the base centre and the apex between all
/// segments and gives each rim point a slope normal. The flat variant emits
/// a base triangle and a side triangle per segment with their own vertices.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::Cone;
///
/// let smooth = Cone::default().generate();
/// assert_eq!(smooth.vertex_count(), 2 + 2 * 16);
///
/// let flat = Cone { flat_normals: true, ..Cone::default() }.generate();
/// assert_eq!(flat.vertex_count(), 6 * 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cone {
    pub radius: f32,
    pub height: f32,
    pub segments: u32,
    pub flat_normals: bool,
}

impl Default for Cone {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            height: DEFAULT_HEIGHT,
            segments: DEFAULT_SEGMENTS,
            flat_normals: false,
        }
    }
}

impl Cone {
    /// Generates the mesh.
    pub fn generate(&self) -> Mesh {
        let segments = clamp_segments(self.segments);
        if self.flat_normals {
            self.flat(segments)
        } else {
            self.smooth(segments)
        }
    }

    /// Side normal at `angle`: the rim direction tilted up by the slope.
    fn slope_normal(&self, angle: f32) -> Vec3 {
        let slope = self.height.atan2(self.radius);
        let (sin, cos) = slope.sin_cos();
        let rim = ring_point(angle, sin, cos);
        normalize_or(rim, Vec3::Y)
    }

    fn smooth(&self, segments: u32) -> Mesh {
        let mut builder = MeshBuilder::with_capacity(2 + 2 * segments as usize, 2 * segments as usize);
        let bottom_y = -self.height * 0.5;

        let base = builder.add_vertex(Vertex::new(Vec3::new(0.0, bottom_y, 0.0), Vec3::NEG_Y));
        let apex = builder.add_vertex(Vertex::new(Vec3::new(0.0, -bottom_y, 0.0), Vec3::Y));

        for i in 0..segments {
            let angle = segment_angle(i, segments);
            let rim = ring_point(angle, self.radius, bottom_y);
            builder.add_vertex(Vertex::new(rim, Vec3::NEG_Y));
            builder.add_vertex(Vertex::new(rim, self.slope_normal(angle)));
        }

        for i in 0..segments {
            let (rim, next) = (2 + 2 * i, 2 + 2 * ((i + 1) % segments));
            builder.add_triangle(base, next, rim);
            builder.add_triangle(apex, rim + 1, next + 1);
        }

        builder.build()
    }

    fn flat(&self, segments: u32) -> Mesh {
        let mut builder = MeshBuilder::with_capacity(6 * segments as usize, 2 * segments as usize);
        let bottom_y = -self.height * 0.5;
        let centre = Vec3::new(0.0, bottom_y, 0.0);
        let apex = Vec3::new(0.0, -bottom_y, 0.0);

        for i in 0..segments {
            let (angle, next_angle) = (segment_angle(i, segments), segment_angle(i + 1, segments));
            let current = ring_point(angle, self.radius, bottom_y);
            let next = ring_point(next_angle, self.radius, bottom_y);

            builder.add_flat_triangle(
                Vertex::new(centre, Vec3::NEG_Y),
                Vertex::new(next, Vec3::NEG_Y),
                Vertex::new(current, Vec3::NEG_Y),
            );

            let fallback = self.slope_normal((angle + next_angle) * 0.5);
            let side = face_normal(current, next, apex, fallback);
            builder.add_flat_triangle(
                Vertex::new(current, side),
                Vertex::new(next, side),
                Vertex::new(apex, side),
            );
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn winding(mesh: &Mesh, [a, b, c]: [u32; 3]) -> Vec3 {
        let (a, b, c) = (
            mesh.vertex(a).position,
            mesh.vertex(b).position,
            mesh.vertex(c).position,
        );
        (b - a).cross(c - a)
    }

    #[test]
    fn test_smooth_cone_layout() {
        let mesh = Cone::default().generate();
        assert_eq!(mesh.vertex_count(), 34);
        assert_eq!(mesh.triangle_count(), 32);
        assert!(mesh.validate());
        assert_eq!(mesh.vertex(0).position, Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(mesh.vertex(1).position, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_smooth_slope_normals() {
        let mesh = Cone::default().generate();
        // radius 1, height 2: normal proportional to (2 * rim, 1)
        let expected = Vec3::new(0.0, 1.0, 2.0).normalize();
        let n = mesh.vertex(3).normal;
        assert_abs_diff_eq!(n.x, expected.x, epsilon = 1e-6);
        assert_abs_diff_eq!(n.y, expected.y, epsilon = 1e-6);
        assert_abs_diff_eq!(n.z, expected.z, epsilon = 1e-6);
    }

    #[test]
    fn test_cone_winding_matches_normals() {
        for flat_normals in [false, true] {
            let mesh = Cone {
                flat_normals,
                ..Cone::default()
            }
            .generate();
            for triangle in mesh.triangles() {
                let w = winding(&mesh, triangle);
                for i in triangle {
                    assert!(w.dot(mesh.vertex(i).normal) > 0.0);
                }
            }
        }
    }

    #[test]
    fn test_flat_cone_counts() {
        let cone = Cone {
            segments: 8,
            flat_normals: true,
            ..Cone::default()
        };
        let mesh = cone.generate();
        assert_eq!(mesh.vertex_count(), 48);
        assert_eq!(mesh.triangle_count(), 16);
        for v in mesh.vertices() {
            assert_abs_diff_eq!(v.normal.length(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_zero_radius_cone_has_unit_normals() {
        for flat_normals in [false, true] {
            let mesh = Cone {
                radius: 0.0,
                flat_normals,
                ..Cone::default()
            }
            .generate();
            for v in mesh.vertices() {
                assert!(v.normal.is_finite());
                assert_abs_diff_eq!(v.normal.length(), 1.0, epsilon = 1e-5);
            }
        }
    }
}
