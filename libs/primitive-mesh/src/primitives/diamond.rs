//! # Diamond Primitive
//!
//! Faceted gem: a flat table on top, a crown down to the girdle and a
//! pavilion tapering to a point. Every facet has its own vertices.

use config::constants::{
    DEFAULT_DIAMOND_BEVEL, DEFAULT_DIAMOND_FACETS, DEFAULT_DIAMOND_MIDDLE_RADIUS,
    DEFAULT_DIAMOND_TOP_BOTTOM, DEFAULT_DIAMOND_UPPER_RADIUS,
};
use glam::Vec3;

use super::{clamp_segments, segment_angle};
use crate::math::{face_normal, normalize_or, ring_point};
use crate::mesh::{Mesh, MeshBuilder, Vertex};

/// Diamond shape within a unit-height bounding column.
///
/// Heights are expressed on a `[-1, 1]` scale before the final halving, so
/// the top point sits at `y = 0.5` and the bottom point at `y = -0.5`.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::Diamond;
///
/// let mesh = Diamond::default().generate();
/// assert_eq!(mesh.triangle_count(), 32);
/// assert_eq!(mesh.vertex_count(), 96);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diamond {
    /// Facets around the girdle, at least 3.
    pub facets: u32,
    /// Girdle height below the top: girdle sits at `1 - 2 * top_bottom`.
    pub top_bottom: f32,
    /// Radius of the table rim.
    pub upper_radius: f32,
    /// Radius of the girdle.
    pub middle_radius: f32,
    /// Table rim drop: rim sits at `1 - 2 * bevel`.
    pub bevel: f32,
}

impl Default for Diamond {
    fn default() -> Self {
        Self {
            facets: DEFAULT_DIAMOND_FACETS,
            top_bottom: DEFAULT_DIAMOND_TOP_BOTTOM,
            upper_radius: DEFAULT_DIAMOND_UPPER_RADIUS,
            middle_radius: DEFAULT_DIAMOND_MIDDLE_RADIUS,
            bevel: DEFAULT_DIAMOND_BEVEL,
        }
    }
}

impl Diamond {
    /// Generates the mesh.
    pub fn generate(&self) -> Mesh {
        let facets = clamp_segments(self.facets);
        let mut builder = MeshBuilder::with_capacity(12 * facets as usize, 4 * facets as usize);

        let rim_y = 1.0 - 2.0 * self.bevel;
        let girdle_y = 1.0 - 2.0 * self.top_bottom;
        let top = Vec3::Y * 0.5;
        let bottom = Vec3::NEG_Y * 0.5;

        for i in 0..facets {
            let (current, next) = (segment_angle(i, facets), segment_angle(i + 1, facets));
            let rim0 = ring_point(current, self.upper_radius, rim_y) * 0.5;
            let rim1 = ring_point(next, self.upper_radius, rim_y) * 0.5;
            let girdle0 = ring_point(current, self.middle_radius, girdle_y) * 0.5;
            let girdle1 = ring_point(next, self.middle_radius, girdle_y) * 0.5;

            for [a, b, c] in [
                [top, rim0, rim1],
                [rim0, girdle0, rim1],
                [rim1, girdle0, girdle1],
                [girdle0, bottom, girdle1],
            ] {
                let outward = normalize_or(a + b + c, Vec3::Y);
                let normal = face_normal(a, b, c, outward);
                builder.add_flat_triangle(
                    Vertex::new(a, normal),
                    Vertex::new(b, normal),
                    Vertex::new(c, normal),
                );
            }
        }

        builder.build()
    }
}
