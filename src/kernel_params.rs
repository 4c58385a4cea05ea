//! # Kernel numerical parameters
//!
//! [`KernelParams`] gathers the few numerical knobs of the kernel that are not part of
//! the orbit itself: the fixed iteration count of the Kepler solver, the eccentricity at
//! which the solver switches its initial guess, and the tolerance of the hodograph ray
//! intersection.
//!
//! Parameters can be obtained three ways:
//!
//! * [`KernelParams::default()`] – the values used by the plain kernel entry points.
//! * [`KernelParams::builder()`] – fluent builder with validation on `build()`.
//! * Deserialization through `serde` (missing fields fall back to the defaults),
//!   so a host application can keep them in its own configuration file.
//!
//! ```rust
//! use hodograph::kernel_params::KernelParams;
//!
//! let params = KernelParams::builder()
//!     .kepler_iterations(12)
//!     .intersection_eps(1e-12)
//!     .build()
//!     .unwrap();
//! assert_eq!(params.kepler_iterations, 12);
//! ```

use std::cmp::Ordering::{Equal, Greater, Less};

use serde::{Deserialize, Serialize};

use crate::{
    constants::{HIGH_ECCENTRICITY_GUESS, INTERSECTION_EPS, KEPLER_ITERATIONS},
    hodograph_errors::HodographError,
};

/// Numerical configuration of the kernel.
///
/// Fields
/// -----------------
/// * `kepler_iterations` – number of Newton–Raphson updates applied to Kepler's equation.
///   There is no convergence test: cost and precision are fixed by this number.
/// * `high_eccentricity_guess` – eccentricity from which the solver starts at E₀ = π.
/// * `intersection_eps` – threshold under which the hodograph ray/ray solve is treated
///   as degenerate (near-parallel rays, or an intersection behind a ray origin).
///
/// Default values:
///
/// * `kepler_iterations`: 7
/// * `high_eccentricity_guess`: 0.8
/// * `intersection_eps`: 1e-9
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelParams {
    pub kepler_iterations: usize,
    pub high_eccentricity_guess: f64,
    pub intersection_eps: f64,
}

impl KernelParams {
    /// Equivalent to [`KernelParams::default()`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`KernelParamsBuilder`] initialized with the default values.
    pub fn builder() -> KernelParamsBuilder {
        KernelParamsBuilder::new()
    }
}

impl Default for KernelParams {
    fn default() -> Self {
        KernelParams {
            kepler_iterations: KEPLER_ITERATIONS,
            high_eccentricity_guess: HIGH_ECCENTRICITY_GUESS,
            intersection_eps: INTERSECTION_EPS,
        }
    }
}

/// Builder for [`KernelParams`], with validation.
#[derive(Debug, Clone)]
pub struct KernelParamsBuilder {
    params: KernelParams,
}

impl Default for KernelParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl KernelParamsBuilder {
    pub fn new() -> Self {
        Self {
            params: KernelParams::default(),
        }
    }

    pub fn kepler_iterations(mut self, v: usize) -> Self {
        self.params.kepler_iterations = v;
        self
    }
    pub fn high_eccentricity_guess(mut self, v: f64) -> Self {
        self.params.high_eccentricity_guess = v;
        self
    }
    pub fn intersection_eps(mut self, v: f64) -> Self {
        self.params.intersection_eps = v;
        self
    }

    /// Return true iff x > 0.0 and comparable (i.e., not NaN).
    #[inline]
    fn gt0(x: f64) -> bool {
        x.partial_cmp(&0.0) == Some(Greater)
    }

    /// Return true iff a <= b and comparable (i.e., not NaN).
    #[inline]
    fn le(a: f64, b: f64) -> bool {
        matches!(a.partial_cmp(&b), Some(Less) | Some(Equal))
    }

    /// Finalize the builder and produce a [`KernelParams`] instance.
    ///
    /// Validation rules
    /// -----------------
    /// * `kepler_iterations >= 1`
    /// * `intersection_eps > 0.0` and finite
    /// * `0.0 < high_eccentricity_guess <= 1.0`
    ///
    /// Returns
    /// -----------------
    /// * `Ok(KernelParams)` if every rule holds.
    /// * `Err(HodographError::InvalidKernelParameter)` naming the first failing rule.
    pub fn build(self) -> Result<KernelParams, HodographError> {
        let p = &self.params;

        if p.kepler_iterations == 0 {
            return Err(HodographError::InvalidKernelParameter(
                "kepler_iterations must be >= 1".into(),
            ));
        }
        if !Self::gt0(p.intersection_eps) || !p.intersection_eps.is_finite() {
            return Err(HodographError::InvalidKernelParameter(
                "intersection_eps must be finite and > 0".into(),
            ));
        }
        if !Self::gt0(p.high_eccentricity_guess) || !Self::le(p.high_eccentricity_guess, 1.0) {
            return Err(HodographError::InvalidKernelParameter(
                "high_eccentricity_guess must lie in (0, 1]".into(),
            ));
        }

        Ok(self.params)
    }
}

#[cfg(test)]
mod kernel_params_test {
    use super::*;

    #[test]
    fn test_default_values() {
        let params = KernelParams::default();
        assert_eq!(params.kepler_iterations, 7);
        assert_eq!(params.high_eccentricity_guess, 0.8);
        assert_eq!(params.intersection_eps, 1e-9);
        assert_eq!(KernelParams::builder().build().unwrap(), params);
    }

    #[test]
    fn test_builder_rejects_invalid_values() {
        let err = KernelParams::builder().kepler_iterations(0).build();
        assert_eq!(
            err,
            Err(HodographError::InvalidKernelParameter(
                "kepler_iterations must be >= 1".into()
            ))
        );

        assert!(KernelParams::builder()
            .intersection_eps(0.0)
            .build()
            .is_err());
        assert!(KernelParams::builder()
            .intersection_eps(f64::NAN)
            .build()
            .is_err());
        assert!(KernelParams::builder()
            .intersection_eps(f64::INFINITY)
            .build()
            .is_err());
        assert!(KernelParams::builder()
            .high_eccentricity_guess(1.5)
            .build()
            .is_err());
        assert!(KernelParams::builder()
            .high_eccentricity_guess(-0.1)
            .build()
            .is_err());
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let params: KernelParams = serde_json::from_str(r#"{ "kepler_iterations": 20 }"#).unwrap();
        assert_eq!(params.kepler_iterations, 20);
        assert_eq!(params.intersection_eps, INTERSECTION_EPS);
        assert_eq!(params.high_eccentricity_guess, HIGH_ECCENTRICITY_GUESS);
    }
}
