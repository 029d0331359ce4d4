//! # Configuration Constants
//!
//! Centralized constants for procedural mesh generation. Weld precision,
//! normalization tolerances, default primitive parameters and index limits
//! are defined here so generators never carry their own literals.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point tolerances and weld quantization
//! - **Defaults**: Default parameters for every primitive
//! - **Limits**: Bounds imposed by the u32 index buffer

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for approximate floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f32, b: f32) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-7));
/// ```
pub const EPSILON: f32 = 1e-6;

/// Minimum vector length that may be normalized.
///
/// Vectors shorter than this (zero-area cross products, collapsed midpoints)
/// are replaced by a caller-provided fallback instead of producing NaN.
///
/// # Example
///
/// ```rust
/// use config::constants::NORMAL_EPSILON;
///
/// let degenerate = 0.0_f32;
/// assert!(degenerate <= NORMAL_EPSILON);
/// ```
pub const NORMAL_EPSILON: f32 = f32::EPSILON;

/// Scaling factor used to quantize positions into weld keys.
///
/// Each coordinate is multiplied by this factor and rounded to an integer,
/// so positions that agree to six fractional digits collide on the same key.
///
/// # Example
///
/// ```rust
/// use config::constants::WELD_PRECISION;
///
/// let a = (0.123_456_71_f64 * WELD_PRECISION as f64).round() as i64;
/// let b = (0.123_456_74_f64 * WELD_PRECISION as f64).round() as i64;
/// assert_eq!(a, b);
/// ```
pub const WELD_PRECISION: f32 = 1e6;

// =============================================================================
// DEFAULT PARAMETERS
// =============================================================================

/// Default radius for spheres, discs, cones and cylinders.
pub const DEFAULT_RADIUS: f32 = 1.0;

/// Default recursion depth for the icosphere.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_ICOSPHERE_SUBDIVISIONS;
///
/// // One level of refinement: 20 * 4 = 80 triangles
/// assert_eq!(20 * 4u32.pow(DEFAULT_ICOSPHERE_SUBDIVISIONS), 80);
/// ```
pub const DEFAULT_ICOSPHERE_SUBDIVISIONS: u32 = 1;

/// Default subdivision level for the cube sphere (one quad per face).
pub const DEFAULT_CUBE_SPHERE_SUBDIVISIONS: u32 = 0;

/// Default angular segment count for round primitives.
pub const DEFAULT_SEGMENTS: u32 = 16;

/// Smallest segment count that still encloses an area.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_SEGMENTS;
///
/// let requested = 0u32;
/// assert_eq!(requested.max(MIN_SEGMENTS), 3);
/// ```
pub const MIN_SEGMENTS: u32 = 3;

/// Default cube half extent (corners at ±1).
pub const DEFAULT_HALF_EXTENT: f32 = 1.0;

/// Default plane edge length.
pub const DEFAULT_PLANE_SIZE: f32 = 1.0;

/// Default full height of cones and cylinders.
pub const DEFAULT_HEIGHT: f32 = 2.0;

/// Default radius of the capsule's cylindrical section.
pub const DEFAULT_CAPSULE_RADIUS: f32 = 0.5;

/// Default height of the capsule's cylindrical section.
pub const DEFAULT_CAPSULE_HEIGHT: f32 = 1.0;

/// Default ring inner radius.
pub const DEFAULT_RING_INNER_RADIUS: f32 = 0.5;

/// Default number of diamond facets around the girdle.
pub const DEFAULT_DIAMOND_FACETS: u32 = 8;

/// Default diamond crown/pavilion split (fraction of the unit height).
pub const DEFAULT_DIAMOND_TOP_BOTTOM: f32 = 0.25;

/// Default diamond table radius.
pub const DEFAULT_DIAMOND_UPPER_RADIUS: f32 = 1.2;

/// Default diamond girdle radius.
pub const DEFAULT_DIAMOND_MIDDLE_RADIUS: f32 = 1.4;

/// Default diamond table bevel.
pub const DEFAULT_DIAMOND_BEVEL: f32 = 0.125;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices addressable by a u32 index buffer.
///
/// Subdivision builders compute their output size up front and refuse
/// levels that would exceed this.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_INDEXED_VERTICES;
///
/// assert_eq!(MAX_INDEXED_VERTICES, u32::MAX as u64);
/// ```
pub const MAX_INDEXED_VERTICES: u64 = u32::MAX as u64;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks whether two values are equal within [`EPSILON`].
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(0.5, 0.5 + 1e-7));
/// assert!(!approx_equal(0.5, 0.6));
/// ```
#[inline]
pub fn approx_equal(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks whether a value is zero within [`EPSILON`].
#[inline]
pub fn approx_zero(value: f32) -> bool {
    value.abs() < EPSILON
}

// =============================================================================
// GEOMETRY CONFIG
// =============================================================================

/// Tolerances shared by the mesh generators.
///
/// # Examples
/// ```
/// use config::constants::GeometryConfig;
/// let config = GeometryConfig::default();
/// assert!(config.weld_precision > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryConfig {
    /// Quantization scale applied to positions before weld lookup.
    pub weld_precision: f32,
    /// Minimum length a vector must have to be normalized.
    pub normal_epsilon: f32,
}

impl GeometryConfig {
    /// Builds a configuration, rejecting non-positive or non-finite values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GeometryConfig;
    /// let config = GeometryConfig::new(1.0e4, 1.0e-6).expect("valid config");
    /// assert_eq!(config.weld_precision, 1.0e4);
    /// ```
    pub fn new(weld_precision: f32, normal_epsilon: f32) -> Result<Self, ConfigError> {
        if !(weld_precision.is_finite() && weld_precision > 0.0) {
            return Err(ConfigError::InvalidPrecision(weld_precision));
        }
        if !(normal_epsilon.is_finite() && normal_epsilon > 0.0) {
            return Err(ConfigError::InvalidEpsilon(normal_epsilon));
        }
        Ok(Self {
            weld_precision,
            normal_epsilon,
        })
    }
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            weld_precision: WELD_PRECISION,
            normal_epsilon: NORMAL_EPSILON,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the weld precision is zero, negative or not finite.
    InvalidPrecision(f32),
    /// Raised when the normal epsilon is zero, negative or not finite.
    InvalidEpsilon(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPrecision(value) => {
                write!(f, "weld_precision must be positive and finite: {value}")
            }
            ConfigError::InvalidEpsilon(value) => {
                write!(f, "normal_epsilon must be positive and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
