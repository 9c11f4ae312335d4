//! Error types for Disha.

use thiserror::Error;

use crate::config::ConfigLoadError;
use crate::core::Axis;

/// Disha error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DishaError {
    /// A sample component was NaN or infinite. The integrator state is unchanged.
    #[error("Invalid sample: {axis} component is {value}")]
    InvalidSample {
        /// Axis of the offending component
        axis: Axis,
        /// The rejected value
        value: f32,
    },

    /// A finite sample was too large for its incremental rotation to stay finite.
    /// The integrator state is unchanged.
    #[error("Non-finite rotation: sample magnitude {magnitude} overflows the increment")]
    NonFiniteRotation {
        /// Rotation angle of the scaled sample
        magnitude: f32,
    },

    /// Input did not have the expected (rows, cols) shape.
    #[error("Dimension mismatch: expected {}x{}, got {}x{}", expected.0, expected.1, actual.0, actual.1)]
    DimensionMismatch {
        /// Expected (rows, cols)
        expected: (usize, usize),
        /// Actual (rows, cols)
        actual: (usize, usize),
    },

    /// Configuration could not be loaded or validated.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigLoadError),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, DishaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_sample_message() {
        let err = DishaError::InvalidSample {
            axis: Axis::Y,
            value: f32::NAN,
        };
        assert_eq!(err.to_string(), "Invalid sample: y component is NaN");
    }

    #[test]
    fn test_non_finite_rotation_message() {
        let err = DishaError::NonFiniteRotation { magnitude: 1e10 };
        assert!(err.to_string().starts_with("Non-finite rotation"));
    }

    #[test]
    fn test_dimension_mismatch_message() {
        let err = DishaError::DimensionMismatch {
            expected: (3, 3),
            actual: (2, 3),
        };
        assert_eq!(err.to_string(), "Dimension mismatch: expected 3x3, got 2x3");
    }

    #[test]
    fn test_config_error_from() {
        let err: DishaError = ConfigLoadError::Parse("bad yaml".to_string()).into();
        assert!(err.to_string().contains("Parse error: bad yaml"));
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<DishaError>();
        _assert_sync::<DishaError>();
    }
}
