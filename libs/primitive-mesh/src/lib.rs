//! # Primitive Mesh
//!
//! Procedural indexed triangle meshes for parametric primitives.
//!
//! ## Architecture
//!
//! ```text
//! parameters (Icosphere, CubeSphere, Cone, ...) → generate() → Mesh
//!                                   │
//!                           VertexWeldCache (shared-vertex dedup)
//! ```
//!
//! ## Algorithms
//!
//! - **Icosphere**: regular icosahedron, recursive 1-to-4 subdivision with
//!   edge-keyed midpoint welding
//! - **Cube sphere**: per-face grids projected onto the sphere, welded by
//!   quantized position so face seams share vertices
//! - **Flat primitives**: closed-form cube, plane, disc, ring, diamond,
//!   cone, cylinder and capsule
//!
//! Every computed normal goes through a guarded normalization, so
//! degenerate input (zero radius, collapsed facets) still yields unit
//! normals.
//!
//! ## Usage
//!
//! ```rust
//! use primitive_mesh::primitives::{CubeSphere, Icosphere};
//!
//! let ico = Icosphere::new().subdivisions(2).generate()?;
//! assert_eq!(ico.vertex_count(), 162);
//!
//! let cube = CubeSphere::new().subdivisions(1).smooth_normals(true).generate()?;
//! assert_eq!(cube.vertex_count(), 26);
//!
//! // Interleaved vertex bytes, ready for a GPU buffer
//! assert_eq!(cube.vertex_bytes().len(), 26 * primitive_mesh::Vertex::STRIDE);
//! # Ok::<(), primitive_mesh::MeshError>(())
//! ```

pub mod error;
pub mod math;
pub mod mesh;
pub mod primitives;
pub mod weld;

pub use error::{MeshError, MeshResult};
pub use mesh::{Mesh, MeshBuilder, Vertex};
pub use weld::{EdgeKey, QuantizedPosition, VertexWeldCache};
