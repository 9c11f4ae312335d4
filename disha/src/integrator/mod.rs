//! Gyroscope heading integration.
//!
//! - [`HeadingIntegrator`]: Owns the running orientation and reports heading per sample
//! - [`IntegratorConfig`]: Validation, scaling, and drift-monitoring settings
//! - [`series`]: Truncated-series coefficients and the per-sample incremental rotation
//!
//! # Pipeline
//!
//! ```text
//! sample w ──► skew B ──► σ = |w| ──► A = I + b(σ)·B + b2(σ)·B² ──► C = C·A ──► atan2(C10, C00)
//! ```

mod heading;
pub mod series;

pub use heading::{HeadingIntegrator, IntegratorConfig};
pub use series::incremental_rotation;
