//! # Anomalies of an elliptic orbit
//!
//! Three angles locate a body on its ellipse:
//!
//! * **true anomaly θ** – angle at the focus between periapsis and the body,
//! * **eccentric anomaly E** – auxiliary angle measured at the centre of the ellipse,
//! * **mean anomaly M** – angle of a fictitious uniform motion, proportional to time.
//!
//! They are linked by
//!
//! ```text
//! tan(θ/2) = √((1+e)/(1−e)) · tan(E/2)
//! M = E − e·sin(E)
//! ```
//!
//! The conversions below keep the revolution count: an input `E = 2π + 0.3` gives a
//! true anomaly just above `2π`, not a wrapped value. Only `M → E` needs an iterative
//! solve, delegated to [`crate::kepler`].

use serde::{Deserialize, Serialize};

use crate::{
    constants::{Radian, DPI},
    kepler::solve_from_guess,
    kernel_params::KernelParams,
};

/// An angular position on the orbit, tagged with the anomaly it is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AnomalyState {
    True(Radian),
    Mean(Radian),
    Eccentric(Radian),
}

impl AnomalyState {
    /// Express this anomaly as a true anomaly.
    pub fn to_true(self, eccentricity: f64, params: &KernelParams) -> Radian {
        match self {
            AnomalyState::True(theta) => theta,
            AnomalyState::Eccentric(ecc_anom) => eccentric_to_true(ecc_anom, eccentricity),
            AnomalyState::Mean(mean_anom) => {
                eccentric_to_true(mean_to_eccentric(mean_anom, eccentricity, params), eccentricity)
            }
        }
    }

    /// Express this anomaly as an eccentric anomaly.
    pub fn to_eccentric(self, eccentricity: f64, params: &KernelParams) -> Radian {
        match self {
            AnomalyState::True(theta) => true_to_eccentric(theta, eccentricity),
            AnomalyState::Eccentric(ecc_anom) => ecc_anom,
            AnomalyState::Mean(mean_anom) => mean_to_eccentric(mean_anom, eccentricity, params),
        }
    }

    /// Express this anomaly as a mean anomaly.
    pub fn to_mean(self, eccentricity: f64) -> Radian {
        match self {
            AnomalyState::True(theta) => {
                eccentric_to_mean(true_to_eccentric(theta, eccentricity), eccentricity)
            }
            AnomalyState::Eccentric(ecc_anom) => eccentric_to_mean(ecc_anom, eccentricity),
            AnomalyState::Mean(mean_anom) => mean_anom,
        }
    }
}

/// Split an angle into a whole number of turns and a remainder in `[−π, π]`.
fn split_revolutions(angle: Radian) -> (f64, Radian) {
    let turns = (angle / DPI).round();
    (turns, angle - turns * DPI)
}

/// True anomaly from eccentric anomaly, keeping the revolution count.
pub fn eccentric_to_true(eccentric_anomaly: Radian, eccentricity: f64) -> Radian {
    let (turns, ecc_anom) = split_revolutions(eccentric_anomaly);
    let half = 0.5 * ecc_anom;
    let theta = 2.0
        * ((1.0 + eccentricity).sqrt() * half.sin()).atan2((1.0 - eccentricity).sqrt() * half.cos());
    theta + turns * DPI
}

/// Eccentric anomaly from true anomaly, keeping the revolution count.
pub fn true_to_eccentric(true_anomaly: Radian, eccentricity: f64) -> Radian {
    let (turns, theta) = split_revolutions(true_anomaly);
    let half = 0.5 * theta;
    let ecc_anom = 2.0
        * ((1.0 - eccentricity).sqrt() * half.sin()).atan2((1.0 + eccentricity).sqrt() * half.cos());
    ecc_anom + turns * DPI
}

/// Mean anomaly from eccentric anomaly (Kepler's equation, direct form).
#[inline]
pub fn eccentric_to_mean(eccentric_anomaly: Radian, eccentricity: f64) -> Radian {
    eccentric_anomaly - eccentricity * eccentric_anomaly.sin()
}

/// Eccentric anomaly from mean anomaly, with the solver settings of `params`.
pub fn mean_to_eccentric(mean_anomaly: Radian, eccentricity: f64, params: &KernelParams) -> Radian {
    solve_from_guess(
        mean_anomaly,
        eccentricity,
        params.kepler_iterations,
        params.high_eccentricity_guess,
    )
}
