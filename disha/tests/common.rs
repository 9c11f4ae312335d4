//! Test utilities for Disha integration tests.
//!
//! Helpers for building reference rotations and synthetic gyro streams.

#![allow(dead_code)]

use disha::{AngularVelocity, Matrix3};

/// Rotation about Z by `theta` radians.
pub fn rot_z(theta: f32) -> Matrix3 {
    let (s, c) = theta.sin_cos();
    Matrix3::new([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
}

/// Rotation about X by `theta` radians.
pub fn rot_x(theta: f32) -> Matrix3 {
    let (s, c) = theta.sin_cos();
    Matrix3::new([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
}

/// Constant-rate stream: `n` samples of `rate` rad/s at `hz`.
pub fn constant_rate(n: usize, rate: [f32; 3], hz: f32) -> Vec<AngularVelocity> {
    let dt = 1.0 / hz;
    (0..n)
        .map(|_| AngularVelocity::from_rate(rate, dt))
        .collect()
}

/// Deterministic wobbling stream around a steady yaw rate.
pub fn wobble(n: usize, yaw_per_step: f32, amplitude: f32) -> Vec<AngularVelocity> {
    (0..n)
        .map(|i| {
            let t = i as f32;
            AngularVelocity::new(
                (t * 0.37).sin() * amplitude,
                (t * 0.71).cos() * amplitude,
                yaw_per_step,
            )
        })
        .collect()
}

/// Wrap an angle into (-π, π].
pub fn wrap(angle: f32) -> f32 {
    let pi = std::f32::consts::PI;
    let mut a = angle;
    while a > pi {
        a -= 2.0 * pi;
    }
    while a <= -pi {
        a += 2.0 * pi;
    }
    a
}

/// Largest absolute element-wise difference.
pub fn max_abs_diff(a: &Matrix3, b: &Matrix3) -> f32 {
    let mut worst = 0.0_f32;
    for i in 0..3 {
        for j in 0..3 {
            worst = worst.max((a[(i, j)] - b[(i, j)]).abs());
        }
    }
    worst
}
