//! Cube-sphere generator: the six faces of a cube subdivided into regular
//! grids and projected onto a sphere.
//!
//! The smooth variant welds grid points through a position-keyed
//! [`VertexWeldCache`], which also merges the points that adjacent faces
//! share along cube edges. The flat variant emits four fresh vertices per
//! grid cell.

use config::constants::{
    GeometryConfig, DEFAULT_CUBE_SPHERE_SUBDIVISIONS, DEFAULT_RADIUS,
};
use glam::{Vec2, Vec3};
use log::debug;

use crate::error::{ensure_finite_radius, ensure_indexable, MeshResult};
use crate::math::{bilerp, normalize_or_with};
use crate::mesh::{orient, Mesh, MeshBuilder, Vertex};
use crate::weld::{QuantizedPosition, VertexWeldCache};

/// Cube corners, centred on the origin with unit edge length.
const CORNERS: [Vec3; 8] = [
    Vec3::new(0.5, 0.5, 0.5),
    Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(-0.5, -0.5, 0.5),
    Vec3::new(-0.5, 0.5, 0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(-0.5, 0.5, -0.5),
];

/// Four corners per face, ordered for [`bilerp`] so cells wind outwards.
const FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3], // +Z
    [6, 7, 3, 2], // -X
    [7, 6, 5, 4], // -Z
    [5, 1, 0, 4], // +X
    [0, 3, 7, 4], // +Y
    [5, 6, 2, 1], // -Y
];

/// Cube-sphere parameters.
///
/// # Examples
/// ```
/// use primitive_mesh::primitives::CubeSphere;
///
/// let mesh = CubeSphere::new().smooth_normals(true).generate().unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeSphere {
    /// Grid density per face: `2^subdivisions` cells along each edge.
    pub subdivisions: u32,
    /// Sphere radius.
    pub radius: f32,
    /// Negate normals and reverse winding so the sphere is seen from inside.
    pub inward_faces: bool,
    /// Share vertices between cells and faces with radial normals.
    pub smooth_normals: bool,
    /// Weld precision and normalization tolerance.
    pub config: GeometryConfig,
}

impl Default for CubeSphere {
    fn default() -> Self {
        Self {
            subdivisions: DEFAULT_CUBE_SPHERE_SUBDIVISIONS,
            radius: DEFAULT_RADIUS,
            inward_faces: false,
            smooth_normals: false,
            config: GeometryConfig::default(),
        }
    }
}

impl CubeSphere {
    /// Creates the default configuration (flat, one quad per face).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the subdivision level.
    pub fn subdivisions(mut self, subdivisions: u32) -> Self {
        self.subdivisions = subdivisions;
        self
    }

    /// Sets the radius.
    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Sets whether the sphere faces inwards.
    pub fn inward_faces(mut self, inward: bool) -> Self {
        self.inward_faces = inward;
        self
    }

    /// Sets whether vertices are welded with smooth normals.
    pub fn smooth_normals(mut self, smooth: bool) -> Self {
        self.smooth_normals = smooth;
        self
    }

    /// Replaces the tolerances.
    pub fn with_config(mut self, config: GeometryConfig) -> Self {
        self.config = config;
        self
    }

    /// Cells along each face edge: `2^subdivisions`, at least 1.
    pub fn segments(&self) -> Option<u64> {
        1u64.checked_shl(self.subdivisions)
    }

    /// Number of vertices the configuration produces, if it fits in a u64.
    pub fn expected_vertex_count(&self) -> Option<u64> {
        let cells = self.segments()?.checked_pow(2)?.checked_mul(6)?;
        if self.smooth_normals {
            // Euler: V = F / 2 + 2 with two triangles per cell
            cells.checked_add(2)
        } else {
            cells.checked_mul(4)
        }
    }

    /// Number of triangles the configuration produces, if it fits in a u64.
    pub fn expected_triangle_count(&self) -> Option<u64> {
        self.segments()?.checked_pow(2)?.checked_mul(12)
    }

    /// Generates the mesh.
    ///
    /// # Errors
    ///
    /// - [`MeshError::InvalidParameter`](crate::MeshError::InvalidParameter)
    ///   if the radius is not finite
    /// - [`MeshError::TooManyVertices`](crate::MeshError::TooManyVertices)
    ///   if the level exceeds the u32 index range
    /// - [`MeshError::Config`](crate::MeshError::Config) if the tolerances
    ///   are not positive and finite
    pub fn generate(&self) -> MeshResult<Mesh> {
        ensure_finite_radius(self.radius)?;
        let config = GeometryConfig::new(self.config.weld_precision, self.config.normal_epsilon)?;
        ensure_indexable(self.expected_vertex_count())?;
        // An indexable vertex count bounds segments well below 2^16
        let segments = self.segments().map_or(1, |segments| segments as u32);

        let grid = Grid::new(segments, self.radius, self.inward_faces, config.normal_epsilon);
        let mesh = if self.smooth_normals {
            grid.smooth(config.weld_precision)
        } else {
            grid.flat()
        };

        debug!(
            "cube sphere: level {} ({} segments) radius {} smooth={} inward={} -> {} vertices, {} triangles",
            self.subdivisions,
            segments,
            self.radius,
            self.smooth_normals,
            self.inward_faces,
            mesh.vertex_count(),
            mesh.triangle_count(),
        );
        Ok(mesh)
    }
}

/// Per-call grid state shared by both variants.
struct Grid {
    segments: u32,
    radius: f32,
    inward: bool,
    epsilon: f32,
}

impl Grid {
    fn new(segments: u32, radius: f32, inward: bool, epsilon: f32) -> Self {
        Self {
            segments: segments.max(1),
            radius,
            inward,
            epsilon,
        }
    }

    /// Sign applied to outward directions to obtain normals.
    fn facing(&self) -> f32 {
        if self.inward {
            -1.0
        } else {
            1.0
        }
    }

    /// Grid parameter of line `k`; exact for power-of-two segment counts.
    fn t(&self, k: u32) -> f32 {
        k as f32 / self.segments as f32
    }

    /// Unit-sphere projection of grid point `(col, row)` on a face.
    fn direction(&self, face: &Face, col: u32, row: u32) -> Vec3 {
        let lattice = bilerp(&face.corners, self.t(col), self.t(row));
        normalize_or_with(lattice, face.axis, self.epsilon)
    }

    /// Welded grid with one radial normal per shared vertex.
    fn smooth(&self, precision: f32) -> Mesh {
        let segments = self.segments as usize;
        let mut cache = VertexWeldCache::with_capacity(6 * segments * segments + 2);
        let mut indices = Vec::with_capacity(36 * segments * segments);

        for face in FACES.iter().map(Face::new) {
            for row in 0..self.segments {
                for col in 0..self.segments {
                    let [i0, i1, i2, i3] = [(col, row), (col + 1, row), (col, row + 1), (col + 1, row + 1)]
                        .map(|(col, row)| self.welded(&mut cache, &face, col, row, precision));

                    indices.extend_from_slice(&orient([i0, i1, i2], self.inward));
                    indices.extend_from_slice(&orient([i1, i3, i2], self.inward));
                }
            }
        }

        debug!("cube sphere: {} weld hits", cache.hits());
        Mesh::from_parts(cache.into_vertices(), indices)
    }

    /// Looks up or creates the vertex for a grid point.
    ///
    /// Keys are taken on the unit sphere so they do not depend on the radius.
    fn welded(
        &self,
        cache: &mut VertexWeldCache<QuantizedPosition>,
        face: &Face,
        col: u32,
        row: u32,
        precision: f32,
    ) -> u32 {
        let direction = self.direction(face, col, row);
        let (radius, facing) = (self.radius, self.facing());
        cache.get_or_create(QuantizedPosition::with_precision(direction, precision), || {
            Vertex::new(direction * radius, direction * facing)
        })
    }

    /// Unwelded grid with one normal per cell.
    fn flat(&self) -> Mesh {
        let segments = self.segments as usize;
        let mut builder = MeshBuilder::with_capacity(24 * segments * segments, 12 * segments * segments);
        let facing = self.facing();

        for face in FACES.iter().map(Face::new) {
            for row in 0..self.segments {
                for col in 0..self.segments {
                    let (u0, u1, v0, v1) = (self.t(col), self.t(col + 1), self.t(row), self.t(row + 1));
                    let d00 = self.direction(&face, col, row);
                    let d10 = self.direction(&face, col + 1, row);
                    let d01 = self.direction(&face, col, row + 1);
                    let d11 = self.direction(&face, col + 1, row + 1);

                    let lower = (d10 - d00).cross(d01 - d00);
                    let upper = (d11 - d10).cross(d01 - d10);
                    let centre = normalize_or_with(d00 + d10 + d01 + d11, face.axis, self.epsilon);
                    let normal = normalize_or_with(lower + upper, centre, self.epsilon) * facing;

                    let base = builder.add_vertex(
                        Vertex::new(d00 * self.radius, normal).with_tex_coord(Vec2::new(u0, v0)),
                    );
                    builder.add_vertex(
                        Vertex::new(d10 * self.radius, normal).with_tex_coord(Vec2::new(u1, v0)),
                    );
                    builder.add_vertex(
                        Vertex::new(d01 * self.radius, normal).with_tex_coord(Vec2::new(u0, v1)),
                    );
                    builder.add_vertex(
                        Vertex::new(d11 * self.radius, normal).with_tex_coord(Vec2::new(u1, v1)),
                    );

                    builder.add_oriented_triangle(base, base + 1, base + 2, self.inward);
                    builder.add_oriented_triangle(base + 1, base + 3, base + 2, self.inward);
                }
            }
        }

        builder.build()
    }
}

/// Resolved corners of one cube face.
struct Face {
    corners: [Vec3; 4],
    /// Outward unit axis of the face.
    axis: Vec3,
}

impl Face {
    fn new(indices: &[usize; 4]) -> Self {
        let corners = indices.map(|i| CORNERS[i]);
        Self {
            corners,
            axis: corners[0] + corners[2],
        }
    }
}

#[cfg(test)]
mod tests;
