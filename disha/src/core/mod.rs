//! Core types for Disha.
//!
//! ## Type Categories
//!
//! ### Matrices
//! - [`Matrix3`]: Row-major 3x3 `f32` matrix, also named [`RotationMatrix`] and
//!   [`SkewMatrix`] where the role matters
//! - Kernel functions: [`identity`], [`multiply`], [`add`], [`scale`], [`factorial`]
//!
//! ### Samples
//! - [`AngularVelocity`]: Per-step rotation about the body axes
//! - [`Axis`]: Names a sample component in errors
//!
//! ## Coordinate System
//!
//! Right-handed body frame, Z up. Heading is the rotation about Z,
//! CCW positive, in radians.

mod matrix;
mod sample;

pub use matrix::{
    Matrix3, RotationMatrix, SkewMatrix, add, factorial, identity, multiply, scale,
};
pub use sample::{AngularVelocity, Axis};
