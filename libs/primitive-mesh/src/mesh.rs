//! # Mesh Data Structure
//!
//! The universal output of every generator: an ordered vertex buffer of
//! position/normal/uv records and a u32 triangle-list index buffer.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// A single mesh vertex.
///
/// Laid out as `position (3 × f32) | normal (3 × f32) | tex_coord (2 × f32)`,
/// 32 bytes per vertex, so a vertex slice can be uploaded as-is.
#[repr(C)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable,
)]
pub struct Vertex {
    /// Object-space position
    pub position: Vec3,
    /// Unit normal
    pub normal: Vec3,
    /// Texture coordinate, zero when the generator has no parametrization
    pub tex_coord: Vec2,
}

impl Vertex {
    /// Size of one vertex in bytes.
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();

    /// Creates a vertex with a zero texture coordinate.
    #[inline]
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position,
            normal,
            tex_coord: Vec2::ZERO,
        }
    }

    /// Returns the vertex with the given texture coordinate.
    #[inline]
    pub fn with_tex_coord(mut self, tex_coord: Vec2) -> Self {
        self.tex_coord = tex_coord;
        self
    }
}

/// An immutable triangle mesh.
///
/// Every index is smaller than the vertex count and the index count is a
/// multiple of three. Triangles wind counter-clockwise seen from the side
/// their normals face.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::Plane;
///
/// let mesh = Plane::default().generate();
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.triangle_count(), 2);
/// assert!(mesh.validate());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl Mesh {
    /// Wraps finished buffers produced by a generator.
    pub(crate) fn from_parts(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        let mesh = Self { vertices, indices };
        debug_assert!(mesh.validate(), "generator emitted an out-of-range index");
        mesh
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertex buffer.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the index buffer.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> &Vertex {
        &self.vertices[index as usize]
    }

    /// Iterates over triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Iterates over vertex positions.
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.vertices.iter().map(|v| v.position)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let Some(first) = self.vertices.first() else {
            return (Vec3::ZERO, Vec3::ZERO);
        };

        self.positions()
            .fold((first.position, first.position), |(min, max), p| {
                (min.min(p), max.max(p))
            })
    }

    /// Validates the index buffer.
    ///
    /// Checks:
    /// - The index count is a multiple of three
    /// - All indices reference existing vertices
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len();
        self.indices.len() % 3 == 0
            && self
                .indices
                .iter()
                .all(|&index| (index as usize) < vertex_count)
    }

    /// Raw vertex bytes for GPU upload (stride [`Vertex::STRIDE`]).
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw u32 index bytes for GPU upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Consumes the mesh and returns its buffers.
    pub fn into_parts(self) -> (Vec<Vertex>, Vec<u32>) {
        (self.vertices, self.indices)
    }
}

/// Append-only construction of a [`Mesh`].
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use primitive_mesh::{MeshBuilder, Vertex};
///
/// let mut builder = MeshBuilder::new();
/// let a = builder.add_vertex(Vertex::new(Vec3::ZERO, Vec3::Y));
/// let b = builder.add_vertex(Vertex::new(Vec3::Z, Vec3::Y));
/// let c = builder.add_vertex(Vertex::new(Vec3::X, Vec3::Y));
/// builder.add_triangle(a, b, c);
/// let mesh = builder.build();
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MeshBuilder {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl MeshBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(triangle_count * 3),
        }
    }

    /// Returns the number of vertices added so far.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, vertex: Vertex) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(vertex);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Adds a triangle, reversing its winding when `inward` is set.
    pub fn add_oriented_triangle(&mut self, a: u32, b: u32, c: u32, inward: bool) {
        let [a, b, c] = orient([a, b, c], inward);
        self.add_triangle(a, b, c);
    }

    /// Adds three fresh vertices and the triangle joining them.
    pub fn add_flat_triangle(&mut self, a: Vertex, b: Vertex, c: Vertex) {
        let base = self.add_vertex(a);
        self.add_vertex(b);
        self.add_vertex(c);
        self.add_triangle(base, base + 1, base + 2);
    }

    /// Freezes the builder into a mesh.
    pub fn build(self) -> Mesh {
        Mesh::from_parts(self.vertices, self.indices)
    }
}

/// Reverses a triangle's winding when `inward` is set.
#[inline]
pub fn orient(triangle: [u32; 3], inward: bool) -> [u32; 3] {
    let [a, b, c] = triangle;
    if inward {
        [a, c, b]
    } else {
        [a, b, c]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_mesh() -> Mesh {
        let mut builder = MeshBuilder::new();
        builder.add_vertex(Vertex::new(Vec3::new(-1.0, -2.0, -3.0), Vec3::Y));
        builder.add_vertex(Vertex::new(Vec3::new(4.0, 5.0, 6.0), Vec3::Y));
        builder.add_vertex(Vertex::new(Vec3::ZERO, Vec3::Y));
        builder.add_triangle(0, 1, 2);
        builder.build()
    }

    #[test]
    fn test_vertex_stride() {
        assert_eq!(Vertex::STRIDE, 32);
    }

    #[test]
    fn test_vertex_defaults_tex_coord() {
        let v = Vertex::new(Vec3::X, Vec3::Y);
        assert_eq!(v.tex_coord, Vec2::ZERO);
        assert_eq!(v.with_tex_coord(Vec2::ONE).tex_coord, Vec2::ONE);
    }

    #[test]
    fn test_mesh_empty() {
        let mesh = MeshBuilder::new().build();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert_eq!(mesh.bounding_box(), (Vec3::ZERO, Vec3::ZERO));
    }

    #[test]
    fn test_mesh_add_triangle() {
        let mesh = triangle_mesh();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.triangles().collect::<Vec<_>>(), vec![[0, 1, 2]]);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let (min, max) = triangle_mesh().bounding_box();
        assert_eq!(min, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mesh = Mesh {
            vertices: vec![Vertex::default()],
            indices: vec![0, 1, 2],
        };
        assert!(!mesh.validate());
    }

    #[test]
    fn test_mesh_validate_partial_triangle() {
        let mesh = Mesh {
            vertices: vec![Vertex::default(); 3],
            indices: vec![0, 1],
        };
        assert!(!mesh.validate());
    }

    #[test]
    fn test_oriented_triangle_reverses() {
        let mut builder = MeshBuilder::new();
        for _ in 0..3 {
            builder.add_vertex(Vertex::default());
        }
        builder.add_oriented_triangle(0, 1, 2, false);
        builder.add_oriented_triangle(0, 1, 2, true);
        let mesh = builder.build();
        assert_eq!(mesh.indices(), &[0, 1, 2, 0, 2, 1]);
    }

    #[test]
    fn test_flat_triangle_appends_fresh_vertices() {
        let mut builder = MeshBuilder::new();
        builder.add_vertex(Vertex::default());
        builder.add_flat_triangle(Vertex::default(), Vertex::default(), Vertex::default());
        let mesh = builder.build();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.indices(), &[1, 2, 3]);
    }

    #[test]
    fn test_byte_views() {
        let mesh = triangle_mesh();
        assert_eq!(mesh.vertex_bytes().len(), 3 * Vertex::STRIDE);
        assert_eq!(mesh.index_bytes().len(), 3 * std::mem::size_of::<u32>());
    }

    #[test]
    fn test_into_parts() {
        let (vertices, indices) = triangle_mesh().into_parts();
        assert_eq!(vertices.len(), 3);
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
