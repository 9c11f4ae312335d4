//! Truncated Taylor series for the incremental rotation.
//!
//! Rodrigues' formula gives the rotation for a per-step rotation vector `w`
//! with angle `σ = |w|` and skew matrix `B`:
//!
//! ```text
//! A = I + (sin σ / σ) B + ((1 - cos σ) / σ²) B²
//! ```
//!
//! Both coefficients divide by zero at `σ = 0`. They are replaced by their
//! series up to σ⁴, which are exact at zero and accurate for the small angles
//! a gyroscope produces between samples:
//!
//! ```text
//! sin σ / σ         ≈ 1   - σ²/3! + σ⁴/5!
//! (1 - cos σ) / σ²  ≈ 1/2 - σ²/4! + σ⁴/6!
//! ```
//!
//! The truncation is intentional. Do not swap in the exact trigonometric
//! forms.

use crate::core::{AngularVelocity, RotationMatrix, add, factorial, identity, multiply, scale};

/// Series approximation of `sin σ / σ`.
#[inline]
pub fn sin_over_sigma(sigma: f32) -> f32 {
    let sigma_sq = sigma * sigma;
    1.0 - sigma_sq / factorial(3) as f32 + sigma_sq * sigma_sq / factorial(5) as f32
}

/// Series approximation of `(1 - cos σ) / σ²`.
#[inline]
pub fn one_minus_cos_over_sigma_sq(sigma: f32) -> f32 {
    let sigma_sq = sigma * sigma;
    0.5 - sigma_sq / factorial(4) as f32 + sigma_sq * sigma_sq / factorial(6) as f32
}

/// Rotation undergone during one sample interval.
///
/// `A = I + b·B + b2·B²` with the series coefficients above.
pub fn incremental_rotation(sample: &AngularVelocity) -> RotationMatrix {
    let b = sample.skew();
    let b_sq = multiply(&b, &b);

    let sigma = sample.magnitude();
    let b_coeff = sin_over_sigma(sigma);
    let b_sq_coeff = one_minus_cos_over_sigma_sq(sigma);

    add(
        &add(&identity(), &scale(&b, b_coeff)),
        &scale(&b_sq, b_sq_coeff),
    )
}
