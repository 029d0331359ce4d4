//! Icosphere generator: a regular icosahedron refined by recursive 1-to-4
//! triangle subdivision, with edge midpoints welded through an edge-keyed
//! [`VertexWeldCache`].

use std::fmt;
use std::sync::Arc;

use config::constants::{DEFAULT_ICOSPHERE_SUBDIVISIONS, DEFAULT_RADIUS};
use glam::Vec3;
use log::{debug, trace};

use crate::error::{ensure_finite_radius, ensure_indexable, MeshError, MeshResult};
use crate::math::{face_normal, normalize_or};
use crate::mesh::{orient, Mesh, MeshBuilder, Vertex};
use crate::weld::{EdgeKey, VertexWeldCache};

/// Remaps the full set of subdivided positions to final vertices.
///
/// Must return exactly one vertex per input position, in the same order.
/// Its output replaces the builder's own positions, normals and texture
/// coordinates.
pub type HeightFn = dyn Fn(&[Vec3]) -> Vec<Vertex> + Send + Sync;

/// Icosahedron coordinates: `(±X, 0, ±Z)` cyclically permuted, with
/// `X = 1/sqrt(1 + phi^2)` and `Z = phi/sqrt(1 + phi^2)`.
const X: f32 = 0.525_731_1;
const Z: f32 = 0.850_650_8;

/// The 12 base directions.
pub(crate) const BASE_VERTICES: [[f32; 3]; 12] = [
    [-X, 0.0, Z],
    [X, 0.0, Z],
    [-X, 0.0, -Z],
    [X, 0.0, -Z],
    [0.0, Z, X],
    [0.0, Z, -X],
    [0.0, -Z, X],
    [0.0, -Z, -X],
    [Z, X, 0.0],
    [-Z, X, 0.0],
    [Z, -X, 0.0],
    [-Z, -X, 0.0],
];

/// The 20 base faces, counter-clockwise seen from outside.
pub(crate) const BASE_TRIANGLES: [[u32; 3]; 20] = [
    [1, 4, 0],
    [4, 9, 0],
    [4, 5, 9],
    [8, 5, 4],
    [1, 8, 4],
    [1, 10, 8],
    [10, 3, 8],
    [8, 3, 5],
    [3, 2, 5],
    [3, 7, 2],
    [3, 10, 7],
    [10, 6, 7],
    [6, 11, 7],
    [6, 0, 11],
    [6, 1, 0],
    [10, 1, 6],
    [11, 0, 9],
    [2, 11, 9],
    [5, 2, 9],
    [11, 2, 7],
];

/// Icosphere parameters.
///
/// # Examples
/// ```
/// use primitive_mesh::primitives::Icosphere;
///
/// let mesh = Icosphere::new().subdivisions(1).radius(2.0).generate().unwrap();
/// assert_eq!(mesh.vertex_count(), 42);
/// assert_eq!(mesh.triangle_count(), 80);
/// ```
#[derive(Clone)]
pub struct Icosphere {
    /// Recursion depth; level 0 is the bare icosahedron.
    pub subdivisions: u32,
    /// Sphere radius.
    pub radius: f32,
    /// Negate normals and reverse winding so the sphere is seen from inside.
    pub inward_normals: bool,
    /// Emit one normal per face with unshared vertices.
    pub flat_normals: bool,
    /// Optional remapping applied after subdivision, before flattening.
    pub height_fn: Option<Arc<HeightFn>>,
}

impl Default for Icosphere {
    fn default() -> Self {
        Self {
            subdivisions: DEFAULT_ICOSPHERE_SUBDIVISIONS,
            radius: DEFAULT_RADIUS,
            inward_normals: false,
            flat_normals: false,
            height_fn: None,
        }
    }
}

impl fmt::Debug for Icosphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Icosphere")
            .field("subdivisions", &self.subdivisions)
            .field("radius", &self.radius)
            .field("inward_normals", &self.inward_normals)
            .field("flat_normals", &self.flat_normals)
            .field("height_fn", &self.height_fn.as_ref().map(|_| "Fn"))
            .finish()
    }
}

impl Icosphere {
    /// Creates the default configuration (one subdivision, unit radius).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the recursion depth.
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
    pub fn inward_normals(mut self, inward: bool) -> Self {
        self.inward_normals = inward;
        self
    }

    /// Sets whether faces get flat normals.
    pub fn flat_normals(mut self, flat: bool) -> Self {
        self.flat_normals = flat;
        self
    }

    /// Installs a height function.
    ///
    /// # Examples
    /// ```
    /// use primitive_mesh::primitives::Icosphere;
    /// use primitive_mesh::Vertex;
    ///
    /// let bumpy = Icosphere::new().height_fn(|positions| {
    ///     positions
    ///         .iter()
    ///         .map(|p| Vertex::new(*p * 1.1, p.normalize()))
    ///         .collect()
    /// });
    /// let mesh = bumpy.generate().unwrap();
    /// assert!(mesh.positions().all(|p| (p.length() - 1.1).abs() < 1e-4));
    /// ```
    pub fn height_fn<F>(mut self, height_fn: F) -> Self
    where
        F: Fn(&[Vec3]) -> Vec<Vertex> + Send + Sync + 'static,
    {
        self.height_fn = Some(Arc::new(height_fn));
        self
    }

    /// Number of vertices the configuration produces, if it fits in a u64.
    pub fn expected_vertex_count(&self) -> Option<u64> {
        let faces = self.expected_triangle_count()?;
        if self.flat_normals {
            faces.checked_mul(3)
        } else {
            // Euler: V = F / 2 + 2 for a closed triangulated sphere
            Some(faces / 2 + 2)
        }
    }

    /// Number of triangles the configuration produces, if it fits in a u64.
    pub fn expected_triangle_count(&self) -> Option<u64> {
        let growth = 4u64.checked_pow(self.subdivisions)?;
        growth.checked_mul(BASE_TRIANGLES.len() as u64)
    }

    /// Generates the mesh.
    ///
    /// # Errors
    ///
    /// - [`MeshError::InvalidParameter`] if the radius is not finite
    /// - [`MeshError::TooManyVertices`] if the level exceeds the u32 index range
    /// - [`MeshError::HeightFunctionMismatch`] if the height function changes
    ///   the vertex count
    pub fn generate(&self) -> MeshResult<Mesh> {
        ensure_finite_radius(self.radius)?;
        ensure_indexable(self.expected_vertex_count())?;

        let (vertices, indices, hits) = self.subdivide();
        let vertices = self.apply_height_fn(vertices)?;

        let mesh = if self.flat_normals {
            flatten(&vertices, &indices)
        } else {
            Mesh::from_parts(vertices, indices)
        };

        debug!(
            "icosphere: level {} radius {} flat={} inward={} -> {} vertices, {} triangles ({} welds)",
            self.subdivisions,
            self.radius,
            self.flat_normals,
            self.inward_normals,
            mesh.vertex_count(),
            mesh.triangle_count(),
            hits,
        );
        Ok(mesh)
    }

    /// Sign applied to outward directions to obtain normals.
    fn facing(&self) -> f32 {
        if self.inward_normals {
            -1.0
        } else {
            1.0
        }
    }

    /// Builds the welded, smooth-normal vertex and index buffers.
    fn subdivide(&self) -> (Vec<Vertex>, Vec<u32>, usize) {
        let facing = self.facing();
        let base = BASE_VERTICES
            .iter()
            .map(|&coords| {
                let direction = normalize_or(Vec3::from(coords), Vec3::Y);
                Vertex::new(direction * self.radius, direction * facing)
            })
            .collect::<Vec<_>>();

        let mut indices: Vec<u32> = BASE_TRIANGLES
            .iter()
            .flat_map(|&triangle| orient(triangle, self.inward_normals))
            .collect();

        // One cache for every level: each edge of level k+1 has an endpoint
        // created during level k+1, so keys from earlier levels never recur.
        let mut cache: VertexWeldCache<EdgeKey> = VertexWeldCache::from_vertices(base);

        for level in 0..self.subdivisions {
            let mut refined = Vec::with_capacity(indices.len() * 4);
            for triangle in indices.chunks_exact(3) {
                let (v1, v2, v3) = (triangle[0], triangle[1], triangle[2]);
                let a = self.midpoint(&mut cache, v1, v2);
                let b = self.midpoint(&mut cache, v2, v3);
                let c = self.midpoint(&mut cache, v3, v1);

                refined.extend_from_slice(&[v1, a, c, v2, b, a, v3, c, b, a, b, c]);
            }
            indices = refined;
            trace!(
                "icosphere level {}: {} vertices, {} triangles",
                level + 1,
                cache.len(),
                indices.len() / 3
            );
        }

        let hits = cache.hits();
        (cache.into_vertices(), indices, hits)
    }

    /// Returns the welded midpoint vertex of edge `(p1, p2)`.
    fn midpoint(&self, cache: &mut VertexWeldCache<EdgeKey>, p1: u32, p2: u32) -> u32 {
        // Directions come from the endpoint normals so the midpoint stays
        // defined for a zero radius.
        let facing = self.facing();
        let d1 = cache.vertex(p1).normal * facing;
        let d2 = cache.vertex(p2).normal * facing;
        let radius = self.radius;

        cache.get_or_create(EdgeKey::new(p1, p2), || {
            let direction = normalize_or(d1 + d2, d1);
            Vertex::new(direction * radius, direction * facing)
        })
    }

    /// Runs the height function, if any, over the subdivided positions.
    fn apply_height_fn(&self, vertices: Vec<Vertex>) -> MeshResult<Vec<Vertex>> {
        let Some(height_fn) = &self.height_fn else {
            return Ok(vertices);
        };

        let positions = vertices.iter().map(|v| v.position).collect::<Vec<_>>();
        let remapped = height_fn(&positions);
        if remapped.len() != positions.len() {
            return Err(MeshError::HeightFunctionMismatch {
                expected: positions.len(),
                actual: remapped.len(),
            });
        }
        Ok(remapped)
    }
}

/// Re-expands a welded mesh into unshared vertices with one normal per face.
///
/// The face normal follows the triangle's winding, which already encodes
/// the facing; degenerate faces fall back to the averaged vertex normals.
fn flatten(vertices: &[Vertex], indices: &[u32]) -> Mesh {
    let mut builder = MeshBuilder::with_capacity(indices.len(), indices.len() / 3);

    for triangle in indices.chunks_exact(3) {
        let [a, b, c] = [triangle[0], triangle[1], triangle[2]].map(|i| vertices[i as usize]);
        let fallback = normalize_or(a.normal + b.normal + c.normal, Vec3::Y);
        let normal = face_normal(a.position, b.position, c.position, fallback);

        builder.add_flat_triangle(
            Vertex { normal, ..a },
            Vertex { normal, ..b },
            Vertex { normal, ..c },
        );
    }

    builder.build()
}
