//! Configuration loading for Disha.
//!
//! Loads configuration from a single YAML file with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use disha::config::DishaConfig;
//!
//! // Load from default path (configs/disha.yaml)
//! let config = DishaConfig::load_default()?;
//!
//! // Or use built-in defaults (no file needed)
//! let config = DishaConfig::default();
//!
//! let mut integrator = config.build_integrator()?;
//! ```
//!
//! ## Example YAML
//!
//! ```yaml
//! integrator:
//!   reject_non_finite: true         # reject NaN/inf samples
//!   sample_scale: 1.0               # multiplier applied to every sample
//!   drift_check_interval: 1000      # samples between orthonormality checks, 0=off
//!   orthonormality_tolerance: 0.01  # warn above this drift
//!   initial_orientation: null       # or [[1,0,0],[0,1,0],[0,0,1]]
//! ```

pub(crate) mod defaults;
mod disha;
mod error;

pub use disha::{DEFAULT_CONFIG_PATH, DishaConfig};
pub use error::ConfigLoadError;
