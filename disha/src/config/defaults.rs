//! Default value functions for serde deserialization.

pub fn reject_non_finite() -> bool {
    true
}

pub fn sample_scale() -> f32 {
    1.0
}

pub fn drift_check_interval() -> u64 {
    1000
}

pub fn orthonormality_tolerance() -> f32 {
    0.01
}
