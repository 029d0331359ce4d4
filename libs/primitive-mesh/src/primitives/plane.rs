//! # Plane Primitive
//!
//! Square on the XZ plane facing +Y.

use config::constants::DEFAULT_PLANE_SIZE;
use glam::Vec3;

use crate::mesh::{Mesh, MeshBuilder, Vertex};

/// Square of edge `size` centred on the origin at y = 0.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::Plane;
///
/// let mesh = Plane::default().generate();
/// assert_eq!(mesh.indices(), &[0, 1, 2, 0, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub size: f32,
}

impl Default for Plane {
    fn default() -> Self {
        Self {
            size: DEFAULT_PLANE_SIZE,
        }
    }
}

impl Plane {
    /// Generates the mesh.
    pub fn generate(&self) -> Mesh {
        let half = self.size * 0.5;
        let mut builder = MeshBuilder::with_capacity(4, 2);
        for (x, z) in [(1.0, 1.0), (1.0, -1.0), (-1.0, -1.0), (-1.0, 1.0)] {
            builder.add_vertex(Vertex::new(Vec3::new(x * half, 0.0, z * half), Vec3::Y));
        }
        builder.add_triangle(0, 1, 2);
        builder.add_triangle(0, 2, 3);
        builder.build()
    }
}
