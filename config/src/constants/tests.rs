//! Tests for the geometry configuration record.

use super::*;

/// Ensures the default configuration mirrors the constants.
#[test]
fn default_config_uses_constants() {
    let config = GeometryConfig::default();
    assert_eq!(config.weld_precision, WELD_PRECISION);
    assert_eq!(config.normal_epsilon, NORMAL_EPSILON);
}

/// Validates the constructor rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GeometryConfig::new(0.0, 1.0e-6).unwrap_err(),
        ConfigError::InvalidPrecision(0.0)
    );
    assert_eq!(
        GeometryConfig::new(1.0e6, -1.0).unwrap_err(),
        ConfigError::InvalidEpsilon(-1.0)
    );
    assert!(GeometryConfig::new(f32::INFINITY, 1.0e-6).is_err());
    assert!(GeometryConfig::new(1.0e6, f32::NAN).is_err());
}

#[test]
fn config_error_display_names_field() {
    let message = ConfigError::InvalidPrecision(-2.0).to_string();
    assert!(message.contains("weld_precision"));
    assert!(message.contains("-2"));
}
