//! # Vertex Welding
//!
//! Key-to-index cache that mediates vertex creation for the subdivision
//! builders. A vertex requested under a key that was seen before resolves
//! to the index created the first time, so shared corners and edge
//! midpoints become one entry of the vertex buffer instead of a triangle
//! soup.
//!
//! Two key types are provided:
//! - [`QuantizedPosition`] - a position rounded to a fixed fractional
//!   precision, so the same logical point reached through different
//!   interpolation paths collides.
//! - [`EdgeKey`] - an unordered pair of vertex indices naming the midpoint
//!   of that edge.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use config::constants::WELD_PRECISION;
use glam::Vec3;

use crate::mesh::Vertex;

// =============================================================================
// KEYS
// =============================================================================

/// A position quantized onto an integer lattice.
///
/// Each coordinate is scaled by the precision and rounded in f64, so
/// `-0.0` and `0.0` map to the same key.
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use primitive_mesh::weld::QuantizedPosition;
///
/// let a = QuantizedPosition::new(Vec3::new(0.1 + 0.2, 0.0, -0.0));
/// let b = QuantizedPosition::new(Vec3::new(0.3, -0.0, 0.0));
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuantizedPosition([i64; 3]);

impl QuantizedPosition {
    /// Quantizes `position` with [`WELD_PRECISION`].
    #[inline]
    pub fn new(position: Vec3) -> Self {
        Self::with_precision(position, WELD_PRECISION)
    }

    /// Quantizes `position` with an explicit scale.
    #[inline]
    pub fn with_precision(position: Vec3, precision: f32) -> Self {
        let scale = f64::from(precision);
        let quantize = |value: f32| (f64::from(value) * scale).round() as i64;
        Self([
            quantize(position.x),
            quantize(position.y),
            quantize(position.z),
        ])
    }

    /// Returns the lattice coordinates.
    #[inline]
    pub fn coords(&self) -> [i64; 3] {
        self.0
    }
}

/// An undirected edge between two vertex indices.
///
/// `EdgeKey::new(a, b) == EdgeKey::new(b, a)`, so the midpoint of an edge
/// welds regardless of which adjacent triangle visits it first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeKey(u32, u32);

impl EdgeKey {
    /// Creates the key for the edge between `a` and `b`.
    #[inline]
    pub fn new(a: u32, b: u32) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    /// Returns the endpoints as `(min, max)`.
    #[inline]
    pub fn endpoints(&self) -> (u32, u32) {
        (self.0, self.1)
    }
}

// =============================================================================
// CACHE
// =============================================================================

/// Growing vertex buffer with a key -> index lookup.
///
/// The cache is the single source of truth for whether a vertex already
/// exists. It only grows; there is no removal.
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use primitive_mesh::weld::{QuantizedPosition, VertexWeldCache};
/// use primitive_mesh::Vertex;
///
/// let mut cache = VertexWeldCache::new();
/// let key = QuantizedPosition::new(Vec3::X);
/// let first = cache.get_or_create(key, || Vertex::new(Vec3::X, Vec3::X));
/// let second = cache.get_or_create(key, || unreachable!());
/// assert_eq!(first, second);
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct VertexWeldCache<K> {
    lookup: HashMap<K, u32>,
    vertices: Vec<Vertex>,
    hits: usize,
}

impl<K: Eq + Hash> Default for VertexWeldCache<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> VertexWeldCache<K> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            lookup: HashMap::new(),
            vertices: Vec::new(),
            hits: 0,
        }
    }

    /// Creates an empty cache with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lookup: HashMap::with_capacity(capacity),
            vertices: Vec::with_capacity(capacity),
            hits: 0,
        }
    }

    /// Creates a cache whose buffer starts with `vertices`.
    ///
    /// Seed vertices are addressable by index but have no key; only vertices
    /// created through [`get_or_create`](Self::get_or_create) are welded.
    pub fn from_vertices(vertices: Vec<Vertex>) -> Self {
        Self {
            lookup: HashMap::new(),
            vertices,
            hits: 0,
        }
    }

    /// Returns the index stored for `key`, creating the vertex on a miss.
    ///
    /// `factory` runs only when `key` has not been seen; a hit returns the
    /// existing index without touching the buffer.
    pub fn get_or_create<F>(&mut self, key: K, factory: F) -> u32
    where
        F: FnOnce() -> Vertex,
    {
        match self.lookup.entry(key) {
            Entry::Occupied(entry) => {
                self.hits += 1;
                *entry.get()
            }
            Entry::Vacant(entry) => {
                let index = self.vertices.len() as u32;
                self.vertices.push(factory());
                entry.insert(index);
                index
            }
        }
    }

    /// Returns the index stored for `key`, if any.
    #[inline]
    pub fn get(&self, key: &K) -> Option<u32> {
        self.lookup.get(key).copied()
    }

    /// Returns the vertex at `index`.
    #[inline]
    pub fn vertex(&self, index: u32) -> &Vertex {
        &self.vertices[index as usize]
    }

    /// Returns the vertex buffer built so far.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the number of vertices in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns how many lookups resolved to an existing vertex.
    #[inline]
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Consumes the cache and returns the vertex buffer.
    pub fn into_vertices(self) -> Vec<Vertex> {
        self.vertices
    }
}
