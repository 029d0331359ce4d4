//! # Mesh Errors
//!
//! Error types for mesh generation. Flat-formula generators clamp their
//! inputs and never fail; the subdivision builders report the few inputs
//! they cannot turn into a valid indexed mesh.

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Error, PartialEq)]
pub enum MeshError {
    /// A numeric parameter cannot produce geometry (NaN or infinite)
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter { name: &'static str, message: String },

    /// The requested refinement does not fit a u32 index buffer
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: u64, max: u64 },

    /// A height function changed the number of vertices
    #[error("Height function returned {actual} vertices, expected {expected}")]
    HeightFunctionMismatch { expected: usize, actual: usize },

    /// Invalid geometry configuration
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }
}

/// Result type alias for mesh generation.
pub type MeshResult<T> = Result<T, MeshError>;

/// Rejects radii that cannot be scaled into finite positions.
pub(crate) fn ensure_finite_radius(radius: f32) -> MeshResult<()> {
    if radius.is_finite() {
        Ok(())
    } else {
        Err(MeshError::invalid_parameter(
            "radius",
            format!("radius must be finite: {radius}"),
        ))
    }
}

/// Rejects vertex counts that overflow the index type.
pub(crate) fn ensure_indexable(count: Option<u64>) -> MeshResult<u64> {
    let max = config::constants::MAX_INDEXED_VERTICES;
    match count {
        Some(count) if count <= max => Ok(count),
        Some(count) => Err(MeshError::TooManyVertices { count, max }),
        None => Err(MeshError::TooManyVertices { count: u64::MAX, max }),
    }
}
