use thiserror::Error;

/// Errors reported by the validated constructors of the crate.
///
/// The kernel functions themselves never return this type: they trust their
/// documented preconditions. Only `try_*` constructors and builders check them.
#[derive(Error, Debug, Clone)]
pub enum HodographError {
    #[error("Invalid semi-major axis: {0} (must be finite and > 0)")]
    InvalidSemiMajorAxis(f64),

    #[error("Invalid eccentricity: {0} (elliptic orbits require 0 <= e < 1)")]
    InvalidEccentricity(f64),

    #[error("Invalid gravitational parameter: {0} (must be finite and > 0)")]
    InvalidGravitationalParameter(f64),

    #[error("Invalid hodograph step count: {0} (at least one step is required)")]
    InvalidStepCount(usize),

    #[error("Invalid kernel parameter: {0}")]
    InvalidKernelParameter(String),
}

impl PartialEq for HodographError {
    fn eq(&self, other: &Self) -> bool {
        use HodographError::*;
        match (self, other) {
            // NaN payloads still compare equal when the variant matches
            (InvalidSemiMajorAxis(a), InvalidSemiMajorAxis(b)) => {
                a == b || (a.is_nan() && b.is_nan())
            }
            (InvalidEccentricity(a), InvalidEccentricity(b)) => {
                a == b || (a.is_nan() && b.is_nan())
            }
            (InvalidGravitationalParameter(a), InvalidGravitationalParameter(b)) => {
                a == b || (a.is_nan() && b.is_nan())
            }
            (InvalidStepCount(a), InvalidStepCount(b)) => a == b,
            (InvalidKernelParameter(a), InvalidKernelParameter(b)) => a == b,
            _ => false,
        }
    }
}
