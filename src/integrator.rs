//! # Frame-to-frame true anomaly integration
//!
//! Conservation of angular momentum gives the exact angular rate
//!
//! ```text
//! dθ/dt = h / r²
//! ```
//!
//! [`advance_angle`] applies one explicit Euler step of this relation. It lets an
//! animation move the body continuously without solving Kepler's equation every frame.
//! The local error is `O(dt²)`, nothing corrects the accumulated drift and the step is
//! never adapted: good enough for display, not for ephemerides.
//!
//! `dt` is a speed multiplier chosen by the caller. It is not assumed to be calibrated
//! to physical seconds.

use serde::{Deserialize, Serialize};

use crate::{
    constants::Radian,
    orbital_elements::OrbitalElements,
    state_vector::{evaluate_by_angle, StateVector},
};

/// Instantaneous angular rate `h / r²` of a state.
#[inline]
pub fn angular_rate(state: &StateVector) -> f64 {
    state.angular_momentum / (state.radius * state.radius)
}

/// One Euler step of the true anomaly: `θ' = θ + dt · h / r²`.
///
/// `state` must be the state at `theta`; only its `h` and `r` are read.
#[inline]
pub fn advance_angle(theta: Radian, state: &StateVector, dt: f64) -> Radian {
    theta + dt * angular_rate(state)
}

/// Pure stepping value for angle-driven animation.
///
/// Each call to [`AngularTimeIntegrator::advance`] returns a new integrator; the host
/// scheduler decides when to call it and with which `dt`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngularTimeIntegrator {
    pub elements: OrbitalElements,
    pub theta: Radian,
}

impl AngularTimeIntegrator {
    /// Start at periapsis.
    pub fn new(elements: OrbitalElements) -> Self {
        Self::starting_at(elements, 0.0)
    }

    pub fn starting_at(elements: OrbitalElements, theta: Radian) -> Self {
        Self { elements, theta }
    }

    /// State at the current true anomaly.
    pub fn state(&self) -> StateVector {
        evaluate_by_angle(&self.elements, self.theta)
    }

    /// Integrator advanced by one Euler step of size `dt`.
    pub fn advance(&self, dt: f64) -> Self {
        Self {
            elements: self.elements,
            theta: advance_angle(self.theta, &self.state(), dt),
        }
    }

    /// Integrator advanced by `steps` Euler steps of size `dt`.
    pub fn advance_by(&self, dt: f64, steps: usize) -> Self {
        (0..steps).fold(*self, |integrator, _| integrator.advance(dt))
    }
}

#[cfg(test)]
mod integrator_test {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_advance_angle_formula() {
        let elem = OrbitalElements::new(1.0, 0.5, 1.0);
        let state = evaluate_by_angle(&elem, 0.0);

        // At periapsis r = 0.5 and h = √0.75
        let expected = 0.1 * 0.75_f64.sqrt() / 0.25;
        assert_relative_eq!(advance_angle(0.0, &state, 0.1), expected, max_relative = 1e-14);
        assert_eq!(advance_angle(1.0, &state, 0.0), 1.0);
    }

    #[test]
    fn test_rate_is_fastest_at_periapsis() {
        let elem = OrbitalElements::new(1.0, 0.5, 1.0);
        let peri = angular_rate(&evaluate_by_angle(&elem, 0.0));
        let apo = angular_rate(&evaluate_by_angle(&elem, PI));

        // h/r² ratio between apsides: ((1 + e)/(1 − e))²
        assert_relative_eq!(peri / apo, 9.0, max_relative = 1e-12);
    }

    #[test]
    fn test_pure_stepping() {
        let start = AngularTimeIntegrator::new(OrbitalElements::with_unit_mu(1.0, 0.2));
        let next = start.advance(0.05);

        assert_eq!(start.theta, 0.0);
        assert!(next.theta > start.theta);
        assert_eq!(start.advance(0.05), next);
        assert_eq!(start.advance_by(0.05, 1), next);
        assert_eq!(start.advance_by(0.05, 0), start);
    }
}
