//! Fixed-size 3x3 matrix kernel.
//!
//! Every matrix in the integration pipeline is 3x3, so the shape lives in the
//! type: [`Matrix3`] wraps a row-major `[[f32; 3]; 3]` and is `Copy`. The kernel
//! is a handful of free functions over that value type:
//!
//! | Function | Result |
//! |----------|--------|
//! | [`identity`] | `I` |
//! | [`multiply`] | `A * B` (order matters) |
//! | [`add`] | `A + B` element-wise |
//! | [`scale`] | `s * A` element-wise |
//! | [`factorial`] | `n!` for series denominators |
//!
//! Shape errors can only arise when converting from dynamically sized input,
//! see [`Matrix3::from_rows`].
//!
//! # Storage Layout
//!
//! ```text
//! | m00 m01 m02 |
//! | m10 m11 m12 |    m[(row, col)] == m.rows[row][col]
//! | m20 m21 m22 |
//! ```

use std::ops::{Add, Index, Mul};

use serde::{Deserialize, Serialize};

use crate::error::{DishaError, Result};

/// Orientation of the body frame relative to the reference frame.
pub type RotationMatrix = Matrix3;

/// Antisymmetric cross-product generator built from an angular-velocity sample.
pub type SkewMatrix = Matrix3;

/// Row-major 3x3 matrix of `f32`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix3 {
    /// Rows of the matrix
    pub rows: [[f32; 3]; 3],
}

impl Default for Matrix3 {
    fn default() -> Self {
        identity()
    }
}

impl Matrix3 {
    /// Wrap a row-major array.
    #[inline]
    pub const fn new(rows: [[f32; 3]; 3]) -> Self {
        Self { rows }
    }

    /// All-zero matrix.
    #[inline]
    pub const fn zeros() -> Self {
        Self {
            rows: [[0.0; 3]; 3],
        }
    }

    /// Build from dynamically sized rows, checking the shape is 3x3.
    ///
    /// Returns [`DishaError::DimensionMismatch`] when the row count or any row
    /// length differs from 3. For ragged input the reported column count is
    /// the length of the first offending row.
    pub fn from_rows(rows: &[Vec<f32>]) -> Result<Self> {
        if rows.len() != 3 {
            let cols = rows.first().map_or(0, Vec::len);
            return Err(DishaError::DimensionMismatch {
                expected: (3, 3),
                actual: (rows.len(), cols),
            });
        }

        let mut out = Self::zeros();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != 3 {
                return Err(DishaError::DimensionMismatch {
                    expected: (3, 3),
                    actual: (rows.len(), row.len()),
                });
            }
            out.rows[i].copy_from_slice(row);
        }
        Ok(out)
    }

    /// Element at `(row, col)`. Panics if either index is >= 3.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.rows[row][col]
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        let m = &self.rows;
        Self::new([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Euclidean length of each row.
    pub fn row_norms(&self) -> [f32; 3] {
        self.rows
            .map(|r| (r[0] * r[0] + r[1] * r[1] + r[2] * r[2]).sqrt())
    }

    /// Largest absolute element of `M * Mᵀ - I`.
    ///
    /// Zero for an exactly orthonormal matrix. Grows as integration error
    /// accumulates in a rotation matrix.
    pub fn orthonormality_error(&self) -> f32 {
        let gram = multiply(self, &self.transpose());
        let mut worst = 0.0_f32;
        for (i, row) in gram.rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                let target = if i == j { 1.0 } else { 0.0 };
                worst = worst.max((value - target).abs());
            }
        }
        worst
    }

    /// True if [`orthonormality_error`](Self::orthonormality_error) is within `tolerance`.
    #[inline]
    pub fn is_orthonormal(&self, tolerance: f32) -> bool {
        self.orthonormality_error() <= tolerance
    }

    /// True if every element is finite.
    pub fn is_finite(&self) -> bool {
        self.rows.iter().flatten().all(|v| v.is_finite())
    }
}

impl From<[[f32; 3]; 3]> for Matrix3 {
    fn from(rows: [[f32; 3]; 3]) -> Self {
        Self::new(rows)
    }
}

impl TryFrom<&[Vec<f32>]> for Matrix3 {
    type Error = DishaError;

    fn try_from(rows: &[Vec<f32>]) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl Index<(usize, usize)> for Matrix3 {
    type Output = f32;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.rows[row][col]
    }
}

impl Mul for Matrix3 {
    type Output = Matrix3;

    #[inline]
    fn mul(self, rhs: Matrix3) -> Matrix3 {
        multiply(&self, &rhs)
    }
}

impl Add for Matrix3 {
    type Output = Matrix3;

    #[inline]
    fn add(self, rhs: Matrix3) -> Matrix3 {
        add(&self, &rhs)
    }
}

/// The 3x3 identity matrix.
#[inline]
pub const fn identity() -> Matrix3 {
    Matrix3::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
}

/// Matrix product `a * b`.
///
/// Not commutative: `multiply(a, b)` applies `a` first when composing a
/// running orientation with an increment (`C_new = C_old * A`).
pub fn multiply(a: &Matrix3, b: &Matrix3) -> Matrix3 {
    let mut out = Matrix3::zeros();
    for i in 0..3 {
        let row = &a.rows[i];
        for j in 0..3 {
            out.rows[i][j] = row[0] * b.rows[0][j] + row[1] * b.rows[1][j] + row[2] * b.rows[2][j];
        }
    }
    out
}

/// Element-wise sum.
pub fn add(a: &Matrix3, b: &Matrix3) -> Matrix3 {
    let mut out = *a;
    for (row, other) in out.rows.iter_mut().zip(b.rows.iter()) {
        for (v, o) in row.iter_mut().zip(other.iter()) {
            *v += o;
        }
    }
    out
}

/// Element-wise multiply by `s`.
pub fn scale(a: &Matrix3, s: f32) -> Matrix3 {
    Matrix3::new(a.rows.map(|row| row.map(|v| v * s)))
}

/// `n!` for small `n`.
///
/// Only used for Taylor-series denominators (n <= 6). Overflows `u64`
/// past `n = 20`.
pub const fn factorial(n: u32) -> u64 {
    let mut acc: u64 = 1;
    let mut k: u64 = 2;
    while k <= n as u64 {
        acc *= k;
        k += 1;
    }
    acc
}
