//! # Cube Primitive
//!
//! Axis-aligned cube with four unshared vertices per face.

use config::constants::DEFAULT_HALF_EXTENT;
use glam::{Vec2, Vec3};

use crate::mesh::{Mesh, MeshBuilder, Vertex};

/// Corner directions; scaled by the half extent.
const CORNERS: [Vec3; 8] = [
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
];

/// Corner indices and outward normal per face.
const FACES: [([usize; 4], Vec3); 6] = [
    ([5, 1, 0, 4], Vec3::X),
    ([6, 7, 3, 2], Vec3::NEG_X),
    ([0, 3, 7, 4], Vec3::Y),
    ([5, 6, 2, 1], Vec3::NEG_Y),
    ([0, 1, 2, 3], Vec3::Z),
    ([7, 6, 5, 4], Vec3::NEG_Z),
];

const TEX_COORDS: [Vec2; 4] = [
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, 0.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(1.0, 1.0),
];

/// Cube centred on the origin.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::Cube;
///
/// let mesh = Cube::default().generate();
/// assert_eq!(mesh.vertex_count(), 24);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube {
    /// Distance from the centre to each face.
    pub half_extent: f32,
}

impl Default for Cube {
    fn default() -> Self {
        Self {
            half_extent: DEFAULT_HALF_EXTENT,
        }
    }
}

impl Cube {
    /// Generates the mesh.
    pub fn generate(&self) -> Mesh {
        let mut builder = MeshBuilder::with_capacity(24, 12);

        for (corners, normal) in FACES {
            let base = builder.vertex_count() as u32;
            for (corner, tex_coord) in corners.iter().zip(TEX_COORDS) {
                builder.add_vertex(
                    Vertex::new(CORNERS[*corner] * self.half_extent, normal).with_tex_coord(tex_coord),
                );
            }
            builder.add_triangle(base, base + 2, base + 1);
            builder.add_triangle(base, base + 3, base + 2);
        }

        builder.build()
    }
}
