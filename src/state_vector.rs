//! # Position / velocity state from orbital elements
//!
//! A single evaluator with two explicit entry modes sharing the same conic geometry:
//!
//! * **by angle** – [`evaluate_by_angle`] places the body at a given true anomaly θ:
//!
//!   ```text
//!   r  = p / (1 + e·cos θ)
//!   vr = (μ/h)·e·sin θ          (radial)
//!   vt = (μ/h)·(1 + e·cos θ)    (transverse)
//!   v  = vr·r̂ + vt·θ̂
//!   ```
//!
//! * **by time** – [`evaluate_by_time`] solves Kepler's equation for the mean anomaly
//!   reached after `elapsed · time_scale` and works from the eccentric anomaly:
//!
//!   ```text
//!   x  = a(cos E − e)              y  = b·sin E
//!   vx = −a·n·sin E / (1 − e·cos E)
//!   vy =  b·n·cos E / (1 − e·cos E)
//!   ```
//!
//! Both modes report the same specific angular momentum `h = √(μ·a(1 − e²))`,
//! whatever the position on the orbit.

use hifitime::Duration;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::{
    anomaly::AnomalyState,
    constants::{PlanarPoint, PlanarVelocity, Radian, DPI},
    kepler::{solve_from_guess, solve_kepler_equation},
    kernel_params::KernelParams,
    orbital_elements::OrbitalElements,
};

/// Cartesian state of the orbiting body in the orbital plane, focus at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateVector {
    pub position: PlanarPoint,
    pub velocity: PlanarVelocity,
    /// Distance to the focus
    pub radius: f64,
    /// Specific angular momentum h
    pub angular_momentum: f64,
    pub speed: f64,
}

impl StateVector {
    fn from_parts(position: PlanarPoint, velocity: PlanarVelocity, radius: f64, h: f64) -> Self {
        Self {
            position,
            velocity,
            radius,
            angular_momentum: h,
            speed: velocity.norm(),
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    #[inline]
    pub fn vx(&self) -> f64 {
        self.velocity.x
    }

    #[inline]
    pub fn vy(&self) -> f64 {
        self.velocity.y
    }

    /// True anomaly of the position, in `(−π, π]`.
    pub fn true_anomaly(&self) -> Radian {
        self.position.y.atan2(self.position.x)
    }

    /// Angular momentum recomputed from the state itself: `x·vy − y·vx`.
    pub fn angular_momentum_from_cross(&self) -> f64 {
        self.position.perp(&self.velocity)
    }

    /// Vis-viva energy `v²/2 − μ/r`.
    pub fn specific_energy(&self, mu: f64) -> f64 {
        0.5 * self.speed * self.speed - mu / self.radius
    }
}

/// Evaluate the state at true anomaly `θ`.
///
/// Arguments
/// ---------
/// * `elements` – orbit `(a, e, μ)`; preconditions are not checked.
/// * `true_anomaly` – θ in radians, any real value.
///
/// Return
/// ------
/// * The [`StateVector`] at θ. The velocity is built in the local radial/transverse
///   frame `(r̂, θ̂)` and rotated back into Cartesian axes.
pub fn evaluate_by_angle(elements: &OrbitalElements, true_anomaly: Radian) -> StateVector {
    let e = elements.eccentricity;
    let p = elements.semi_latus_rectum();
    let h = elements.angular_momentum();

    let (sin_t, cos_t) = true_anomaly.sin_cos();
    let r = p / (1.0 + e * cos_t);

    let radial_dir = Vector2::new(cos_t, sin_t);
    let transverse_dir = Vector2::new(-sin_t, cos_t);

    let mu_over_h = elements.mu / h;
    let v_radial = mu_over_h * e * sin_t;
    let v_transverse = mu_over_h * (1.0 + e * cos_t);

    StateVector::from_parts(
        r * radial_dir,
        v_radial * radial_dir + v_transverse * transverse_dir,
        r,
        h,
    )
}

/// Evaluate the state after `elapsed_seconds · time_scale` time units since periapsis,
/// using the default Kepler iteration count.
///
/// See [`evaluate_by_time_with`].
pub fn evaluate_by_time(
    elements: &OrbitalElements,
    elapsed_seconds: f64,
    time_scale: f64,
) -> StateVector {
    let mean_anomaly = mean_anomaly_at(elements, elapsed_seconds, time_scale);
    state_from_eccentric_anomaly(
        elements,
        solve_kepler_equation(mean_anomaly, elements.eccentricity),
    )
}

/// Evaluate the state after `elapsed_seconds · time_scale` time units since periapsis.
///
/// Arguments
/// ---------
/// * `elements` – orbit `(a, e, μ)`.
/// * `elapsed_seconds` – wall-clock time supplied by the host.
/// * `time_scale` – factor converting `elapsed_seconds` into orbit time units.
/// * `params` – Kepler solver settings.
///
/// Return
/// ------
/// * The [`StateVector`] at mean anomaly `M = (elapsed · time_scale · n) mod 2π`,
///   `M` always taken in `[0, 2π)`.
pub fn evaluate_by_time_with(
    elements: &OrbitalElements,
    elapsed_seconds: f64,
    time_scale: f64,
    params: &KernelParams,
) -> StateVector {
    let mean_anomaly = mean_anomaly_at(elements, elapsed_seconds, time_scale);
    let ecc_anom = solve_from_guess(
        mean_anomaly,
        elements.eccentricity,
        params.kepler_iterations,
        params.high_eccentricity_guess,
    );
    state_from_eccentric_anomaly(elements, ecc_anom)
}

/// Same as [`evaluate_by_time`] with the elapsed time given as a [`Duration`].
pub fn evaluate_by_duration(
    elements: &OrbitalElements,
    elapsed: Duration,
    time_scale: f64,
) -> StateVector {
    evaluate_by_time(elements, elapsed.to_seconds(), time_scale)
}

/// Evaluate the state at any anomaly, through its true anomaly.
pub fn evaluate_by_anomaly(
    elements: &OrbitalElements,
    anomaly: AnomalyState,
    params: &KernelParams,
) -> StateVector {
    evaluate_by_angle(elements, anomaly.to_true(elements.eccentricity, params))
}

/// Mean anomaly reached after `elapsed · time_scale`, in `[0, 2π)`.
fn mean_anomaly_at(elements: &OrbitalElements, elapsed_seconds: f64, time_scale: f64) -> Radian {
    (elapsed_seconds * time_scale * elements.mean_motion()).rem_euclid(DPI)
}

fn state_from_eccentric_anomaly(elements: &OrbitalElements, ecc_anom: Radian) -> StateVector {
    let a = elements.semi_major_axis;
    let e = elements.eccentricity;
    let b = elements.semi_minor_axis();
    let n = elements.mean_motion();

    let (sin_e, cos_e) = ecc_anom.sin_cos();
    let one_minus_ecos = 1.0 - e * cos_e;

    // dE/dt = n / (1 − e·cos E)
    let position = Vector2::new(a * (cos_e - e), b * sin_e);
    let velocity = Vector2::new(
        -a * n * sin_e / one_minus_ecos,
        b * n * cos_e / one_minus_ecos,
    );

    StateVector::from_parts(position, velocity, a * one_minus_ecos, elements.angular_momentum())
}
