//! # Config Crate
//!
//! Centralized configuration constants for procedural mesh generation.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across generators and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_SEGMENTS, MIN_SEGMENTS, NORMAL_EPSILON};
//!
//! // Guard normalization of computed vectors
//! let length: f32 = 0.0;
//! let degenerate = length <= NORMAL_EPSILON;
//! assert!(degenerate);
//!
//! // Clamp user-supplied segment counts
//! let segments = 0u32.max(MIN_SEGMENTS);
//! assert!(segments <= DEFAULT_SEGMENTS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Runtime State**: Pure constants plus a validated tolerance record

pub mod constants;
