//! # Disha
//!
//! Heading (yaw) estimation by integrating gyroscope samples into a running
//! 3x3 rotation matrix.
//!
//! ## Overview
//!
//! Each angular-velocity sample becomes a small rotation computed with a
//! truncated-series form of Rodrigues' formula. The rotation is composed into
//! the accumulated orientation and heading is read from its first column.
//!
//! - **Kernel** ([`core`]): fixed-size [`Matrix3`] with identity, multiply,
//!   add, scale, and factorial
//! - **Integrator** ([`integrator`]): [`HeadingIntegrator`] state and update
//! - **Configuration** ([`config`]): YAML settings with defaults
//!
//! Not an attitude filter: no accelerometer or magnetometer fusion and no
//! drift correction.
//!
//! ## Quick Start
//!
//! ```rust
//! use disha::HeadingIntegrator;
//!
//! let mut integrator = HeadingIntegrator::new();
//!
//! // Samples are rotation per step: rate (rad/s) * dt (s)
//! let heading = integrator.integrate(0.0, 0.0, 0.01)?;
//! assert!((heading - 0.01).abs() < 1e-6);
//!
//! integrator.reset();
//! assert_eq!(integrator.heading(), 0.0);
//! # Ok::<(), disha::DishaError>(())
//! ```
//!
//! ## Coordinate System
//!
//! - Z: Up, heading is rotation about Z
//! - Heading: radians, CCW positive, range (-π, π]

pub mod config;
pub mod core;
pub mod error;
pub mod integrator;

pub use config::{ConfigLoadError, DishaConfig};
pub use crate::core::{AngularVelocity, Axis, Matrix3, RotationMatrix, SkewMatrix};
pub use error::{DishaError, Result};
pub use integrator::{HeadingIntegrator, IntegratorConfig};
