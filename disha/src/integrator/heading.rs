//! Heading integration over a running rotation matrix.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use super::series::incremental_rotation;
use crate::config::{ConfigLoadError, defaults};
use crate::core::{AngularVelocity, Matrix3, RotationMatrix, identity, multiply};
use crate::error::{DishaError, Result};

/// Configuration for the heading integrator.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct IntegratorConfig {
    /// Reject samples containing NaN or infinity.
    ///
    /// When disabled, non-finite input propagates into the orientation and
    /// every later heading is undefined until [`HeadingIntegrator::reset`].
    ///
    /// Default: true
    #[serde(default = "defaults::reject_non_finite")]
    pub reject_non_finite: bool,

    /// Multiplier applied to every sample before integration.
    ///
    /// Use this to fold a fixed sample interval (or a raw-unit conversion)
    /// into the integrator. Default: 1.0 (samples are already rad/step)
    #[serde(default = "defaults::sample_scale")]
    pub sample_scale: f32,

    /// Accepted samples between orthonormality checks. 0 disables the check.
    ///
    /// Default: 1000
    #[serde(default = "defaults::drift_check_interval")]
    pub drift_check_interval: u64,

    /// Orthonormality error above which a drift warning is logged.
    ///
    /// Default: 0.01
    #[serde(default = "defaults::orthonormality_tolerance")]
    pub orthonormality_tolerance: f32,

    /// Starting orientation. Identity when absent.
    #[serde(default)]
    pub initial_orientation: Option<Matrix3>,
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        Self {
            reject_non_finite: true,
            sample_scale: 1.0,
            drift_check_interval: 1000,
            orthonormality_tolerance: 0.01,
            initial_orientation: None,
        }
    }
}

impl IntegratorConfig {
    /// Check values are usable.
    pub fn validate(&self) -> std::result::Result<(), ConfigLoadError> {
        if !self.sample_scale.is_finite() || self.sample_scale == 0.0 {
            return Err(ConfigLoadError::Invalid(format!(
                "integrator.sample_scale must be finite and non-zero, got {}",
                self.sample_scale
            )));
        }
        if !self.orthonormality_tolerance.is_finite() || self.orthonormality_tolerance <= 0.0 {
            return Err(ConfigLoadError::Invalid(format!(
                "integrator.orthonormality_tolerance must be positive, got {}",
                self.orthonormality_tolerance
            )));
        }
        if self.initial_orientation.is_some_and(|m| !m.is_finite()) {
            return Err(ConfigLoadError::Invalid(
                "integrator.initial_orientation contains non-finite values".to_string(),
            ));
        }
        Ok(())
    }
}

/// Integrates gyroscope samples into an orientation matrix and reports heading.
///
/// Each sample is turned into an incremental rotation `A` (see
/// [`incremental_rotation`]) and composed as `C = C * A`: prior orientation
/// first, this step's delta second. Heading is `atan2(C[1][0], C[0][0])`.
///
/// The orientation is never re-orthonormalized. Integration error makes it
/// drift slowly away from a pure rotation; the integrator logs a warning
/// when the drift passes `orthonormality_tolerance`.
///
/// # Threading
///
/// Not synchronized. Integration takes `&mut self`, so use one integrator per
/// sensor stream or wrap it in a `Mutex` to share it.
///
/// # Example
///
/// ```rust
/// use disha::HeadingIntegrator;
///
/// let mut integrator = HeadingIntegrator::new();
/// for _ in 0..100 {
///     integrator.integrate(0.0, 0.0, 0.01).unwrap();
/// }
/// assert!((integrator.heading() - 1.0).abs() < 1e-3);
/// ```
#[derive(Clone, Debug)]
pub struct HeadingIntegrator {
    /// Configuration
    config: IntegratorConfig,

    /// Accumulated orientation `C`
    orientation: RotationMatrix,

    /// Samples accepted since construction or the last reset
    sample_count: u64,
}

impl Default for HeadingIntegrator {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadingIntegrator {
    /// Create an integrator at the identity orientation with default settings.
    pub fn new() -> Self {
        Self::build(IntegratorConfig::default())
    }

    /// Create an integrator starting from `orientation`.
    ///
    /// The matrix is copied; later integration never touches the caller's value.
    pub fn with_orientation(orientation: Matrix3) -> Self {
        Self::build(IntegratorConfig {
            initial_orientation: Some(orientation),
            ..IntegratorConfig::default()
        })
    }

    /// Create an integrator from a configuration.
    ///
    /// Fails with `ConfigLoadError::Invalid` if the configuration does not
    /// pass [`IntegratorConfig::validate`].
    pub fn from_config(config: IntegratorConfig) -> std::result::Result<Self, ConfigLoadError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: IntegratorConfig) -> Self {
        let orientation = config.initial_orientation.unwrap_or_else(identity);
        log::debug!(
            "Heading integrator created, initial heading {:.4} rad",
            heading_of(&orientation)
        );
        Self {
            config,
            orientation,
            sample_count: 0,
        }
    }

    /// Integrate one sample given as components and return the new heading.
    #[inline]
    pub fn integrate(&mut self, wx: f32, wy: f32, wz: f32) -> Result<f32> {
        self.integrate_sample(&AngularVelocity::new(wx, wy, wz))
    }

    /// Integrate one sample from a `[x, y, z]` slice.
    ///
    /// Fails with `DimensionMismatch` unless the slice has exactly 3 elements.
    pub fn integrate_slice(&mut self, values: &[f32]) -> Result<f32> {
        let sample = AngularVelocity::from_slice(values)?;
        self.integrate_sample(&sample)
    }

    /// Integrate one sample and return the new heading in radians, (-π, π].
    ///
    /// A rejected sample leaves the orientation and sample count unchanged.
    /// With `reject_non_finite` set, a sample is rejected when it is NaN or
    /// infinite after scaling, or when its incremental rotation overflows.
    pub fn integrate_sample(&mut self, sample: &AngularVelocity) -> Result<f32> {
        let step = sample.scaled(self.config.sample_scale);
        if self.config.reject_non_finite {
            if let Err(e) = step.validate() {
                log::warn!("Rejecting gyro sample {:?}: {}", sample, e);
                return Err(e);
            }
        }

        let delta = incremental_rotation(&step);
        if self.config.reject_non_finite && !delta.is_finite() {
            let err = DishaError::NonFiniteRotation {
                magnitude: step.magnitude(),
            };
            log::warn!("Rejecting gyro sample {:?}: {}", sample, err);
            return Err(err);
        }

        // Old state first. Swapping the operands changes the heading.
        self.orientation = multiply(&self.orientation, &delta);
        self.sample_count += 1;

        self.check_drift();

        let heading = self.heading();
        log::trace!("sample {} heading {:.5} rad", self.sample_count, heading);
        Ok(heading)
    }

    /// Current heading in radians, (-π, π], without integrating.
    #[inline]
    pub fn heading(&self) -> f32 {
        heading_of(&self.orientation)
    }

    /// Current heading in degrees, (-180, 180].
    #[inline]
    pub fn heading_degrees(&self) -> f32 {
        self.heading().to_degrees()
    }

    /// Accumulated orientation matrix.
    #[inline]
    pub fn orientation(&self) -> &RotationMatrix {
        &self.orientation
    }

    /// Samples accepted since construction or the last reset.
    #[inline]
    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    /// Get the current configuration.
    pub fn config(&self) -> &IntegratorConfig {
        &self.config
    }

    /// Discard accumulated rotation and return to the identity orientation.
    pub fn reset(&mut self) {
        self.reset_to(identity());
    }

    /// Discard accumulated rotation and restart from `orientation`.
    pub fn reset_to(&mut self, orientation: Matrix3) {
        log::debug!(
            "Heading integrator reset after {} samples, new heading {:.4} rad",
            self.sample_count,
            heading_of(&orientation)
        );
        self.orientation = orientation;
        self.sample_count = 0;
    }

    fn check_drift(&self) {
        let interval = self.config.drift_check_interval;
        if interval == 0 || self.sample_count % interval != 0 {
            return;
        }

        let error = self.orientation.orthonormality_error();
        if error > self.config.orthonormality_tolerance {
            log::warn!(
                "Orientation drifted from orthonormal after {} samples: error {:.2e} > {:.2e}",
                self.sample_count,
                error,
                self.config.orthonormality_tolerance
            );
        } else {
            log::trace!(
                "Orthonormality error {:.2e} after {} samples",
                error,
                self.sample_count
            );
        }
    }
}

/// Heading of an orientation matrix: projection of its first column onto the x-y plane.
fn heading_of(m: &Matrix3) -> f32 {
    let heading = m[(1, 0)].atan2(m[(0, 0)]);
    // atan2 yields -π for a -0.0 numerator; keep the range half-open at -π.
    if heading <= -PI { heading + 2.0 * PI } else { heading }
}
