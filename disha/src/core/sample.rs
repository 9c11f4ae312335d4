//! Angular-velocity samples.

use std::fmt;

use super::matrix::{Matrix3, SkewMatrix};
use crate::error::{DishaError, Result};

/// Body axis of a sample component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Roll axis
    X,
    /// Pitch axis
    Y,
    /// Yaw axis
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// One gyroscope reading, already scaled to radians per integration step.
///
/// The integrator has no notion of time. A reading in rad/s must be
/// multiplied by the sample interval before it is integrated, see
/// [`AngularVelocity::from_rate`].
///
/// # Axis Convention
///
/// - `x`: roll rate
/// - `y`: pitch rate
/// - `z`: yaw rate, CCW positive. Heading follows this axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AngularVelocity {
    /// Rotation about X (radians per step)
    pub x: f32,
    /// Rotation about Y (radians per step)
    pub y: f32,
    /// Rotation about Z (radians per step)
    pub z: f32,
}

impl AngularVelocity {
    /// Create a sample from per-step rotation components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Scale a rate in rad/s by the sample interval `dt_seconds`.
    pub fn from_rate(rate: [f32; 3], dt_seconds: f32) -> Self {
        Self::new(
            rate[0] * dt_seconds,
            rate[1] * dt_seconds,
            rate[2] * dt_seconds,
        )
    }

    /// Build from a slice that must hold exactly three components.
    pub fn from_slice(values: &[f32]) -> Result<Self> {
        match values {
            [x, y, z] => Ok(Self::new(*x, *y, *z)),
            _ => Err(DishaError::DimensionMismatch {
                expected: (1, 3),
                actual: (1, values.len()),
            }),
        }
    }

    /// Components as `[x, y, z]`.
    #[inline]
    pub fn to_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Multiply every component by `factor`.
    #[inline]
    pub fn scaled(&self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Rotation angle for this step, `sqrt(x² + y² + z²)`.
    #[inline]
    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Reject NaN or infinite components, reporting the first bad axis.
    pub fn validate(&self) -> Result<()> {
        for (axis, value) in [(Axis::X, self.x), (Axis::Y, self.y), (Axis::Z, self.z)] {
            if !value.is_finite() {
                return Err(DishaError::InvalidSample { axis, value });
            }
        }
        Ok(())
    }

    /// Cross-product matrix of this sample.
    ///
    /// ```text
    /// |  0  -z   y |
    /// |  z   0  -x |
    /// | -y   x   0 |
    /// ```
    pub fn skew(&self) -> SkewMatrix {
        let (x, y, z) = (self.x, self.y, self.z);
        Matrix3::new([[0.0, -z, y], [z, 0.0, -x], [-y, x, 0.0]])
    }
}

impl From<[f32; 3]> for AngularVelocity {
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::matrix::{add, scale};

    #[test]
    fn test_skew_is_antisymmetric() {
        let w = AngularVelocity::new(0.1, -0.2, 0.3);
        let b = w.skew();
        assert_eq!(add(&b, &b.transpose()), Matrix3::zeros());
        assert_eq!(b.transpose(), scale(&b, -1.0));
    }

    #[test]
    fn test_skew_layout() {
        let b = AngularVelocity::new(1.0, 2.0, 3.0).skew();
        assert_eq!(b.rows, [[0.0, -3.0, 2.0], [3.0, 0.0, -1.0], [-2.0, 1.0, 0.0]]);
    }

    #[test]
    fn test_magnitude() {
        let w = AngularVelocity::new(3.0, 4.0, 0.0);
        assert!((w.magnitude() - 5.0).abs() < 1e-6);
        assert_eq!(AngularVelocity::default().magnitude(), 0.0);
    }

    #[test]
    fn test_from_rate() {
        let w = AngularVelocity::from_rate([0.0, 0.5, 1.0], 0.01);
        assert!((w.y - 0.005).abs() < 1e-7);
        assert!((w.z - 0.01).abs() < 1e-7);
    }

    #[test]
    fn test_from_slice() {
        let w = AngularVelocity::from_slice(&[0.1, 0.2, 0.3]).unwrap();
        assert_eq!(w.to_array(), [0.1, 0.2, 0.3]);

        let err = AngularVelocity::from_slice(&[0.1, 0.2]).unwrap_err();
        assert_eq!(
            err,
            DishaError::DimensionMismatch {
                expected: (1, 3),
                actual: (1, 2),
            }
        );
        assert!(AngularVelocity::from_slice(&[0.0; 4]).is_err());
    }

    #[test]
    fn test_validate_reports_first_bad_axis() {
        assert!(AngularVelocity::new(0.1, 0.2, 0.3).validate().is_ok());

        let err = AngularVelocity::new(0.0, f32::INFINITY, f32::NAN)
            .validate()
            .unwrap_err();
        match err {
            DishaError::InvalidSample { axis, value } => {
                assert_eq!(axis, Axis::Y);
                assert!(value.is_infinite());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_axis_display() {
        assert_eq!(Axis::X.to_string(), "x");
        assert_eq!(Axis::Z.to_string(), "z");
    }
}
