//! # Planar elliptic orbital elements
//!
//! This module defines [`OrbitalElements`], the minimal element set describing a planar
//! two-body ellipse with the attracting body at the focus:
//!
//! 1. **a** – Semi-major axis (`> 0`)
//! 2. **e** – Eccentricity (`0 ≤ e < 1`)
//! 3. **μ** – Gravitational parameter GM of the central body (`> 0`, default `1`)
//!
//! Orientation elements (i, Ω, ω) are absent: the periapsis direction is the `+x` axis of
//! the orbital plane and motion is counter-clockwise.
//!
//! ## Derived quantities
//!
//! | Quantity | Formula |
//! |---|---|
//! | semi-latus rectum | `p = a(1 − e²)` |
//! | specific angular momentum | `h = √(μ·p)` |
//! | mean motion | `n = √(μ / a³)` |
//! | semi-minor axis | `b = a√(1 − e²)` |
//! | conic radius | `r(θ) = p / (1 + e·cos θ)` |
//! | periapsis / apoapsis speed | `(μ/h)(1 ± e)` |
//!
//! ## Units
//!
//! Any consistent unit system works. The visualisation kernel uses the normalized system
//! `μ = 1`, where one orbital period of the `a = 1` orbit lasts `2π`.
//!
//! ## Degeneracies
//!
//! `e → 1` (near-parabolic) is outside the domain: `p → 0` and the speed at periapsis
//! diverges. [`OrbitalElements::new`] does not check this; use [`OrbitalElements::try_new`]
//! when the elements come from user input.

use serde::{Deserialize, Serialize};

use crate::{
    constants::{Radian, DEFAULT_MU, DPI},
    hodograph_errors::HodographError,
};

/// Planar elliptic orbital elements.
///
/// Units
/// -----
/// * `semi_major_axis`: length unit of the scene.
/// * `eccentricity`: unitless.
/// * `mu`: length³ / time².
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub mu: f64,
}

impl OrbitalElements {
    /// Build elements without checking them.
    pub fn new(semi_major_axis: f64, eccentricity: f64, mu: f64) -> Self {
        Self {
            semi_major_axis,
            eccentricity,
            mu,
        }
    }

    /// Elements in the normalized unit system (`μ = 1`).
    pub fn with_unit_mu(semi_major_axis: f64, eccentricity: f64) -> Self {
        Self::new(semi_major_axis, eccentricity, DEFAULT_MU)
    }

    /// Build elements and check the elliptic-orbit preconditions.
    ///
    /// Return
    /// ------
    /// * `Err(InvalidSemiMajorAxis)` if `a` is not finite and strictly positive.
    /// * `Err(InvalidEccentricity)` if `e ∉ [0, 1)`.
    /// * `Err(InvalidGravitationalParameter)` if `μ` is not finite and strictly positive.
    pub fn try_new(semi_major_axis: f64, eccentricity: f64, mu: f64) -> Result<Self, HodographError> {
        let elements = Self::new(semi_major_axis, eccentricity, mu);
        elements.validate()?;
        Ok(elements)
    }

    /// Check the elliptic-orbit preconditions on an existing element set.
    pub fn validate(&self) -> Result<(), HodographError> {
        if !(self.semi_major_axis.is_finite() && self.semi_major_axis > 0.0) {
            return Err(HodographError::InvalidSemiMajorAxis(self.semi_major_axis));
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(HodographError::InvalidEccentricity(self.eccentricity));
        }
        if !(self.mu.is_finite() && self.mu > 0.0) {
            return Err(HodographError::InvalidGravitationalParameter(self.mu));
        }
        Ok(())
    }

    /// Semi-latus rectum `p = a(1 − e²)`.
    #[inline]
    pub fn semi_latus_rectum(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity)
    }

    /// Specific angular momentum `h = √(μ·p)`, constant along the orbit.
    #[inline]
    pub fn angular_momentum(&self) -> f64 {
        (self.mu * self.semi_latus_rectum()).sqrt()
    }

    /// Mean motion `n = √(μ / a³)`.
    #[inline]
    pub fn mean_motion(&self) -> f64 {
        (self.mu / self.semi_major_axis.powi(3)).sqrt()
    }

    #[inline]
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity).sqrt()
    }

    /// Orbital period `2π / n`.
    pub fn period(&self) -> f64 {
        DPI / self.mean_motion()
    }

    pub fn periapsis_radius(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    pub fn apoapsis_radius(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Distance to the focus at true anomaly `θ`: `r = p / (1 + e·cos θ)`.
    #[inline]
    pub fn radius_at(&self, true_anomaly: Radian) -> f64 {
        self.semi_latus_rectum() / (1.0 + self.eccentricity * true_anomaly.cos())
    }

    /// Radius of the velocity hodograph, `μ / h`.
    #[inline]
    pub fn hodograph_radius(&self) -> f64 {
        self.mu / self.angular_momentum()
    }

    /// Maximum speed, reached at periapsis.
    pub fn periapsis_speed(&self) -> f64 {
        self.hodograph_radius() * (1.0 + self.eccentricity)
    }

    /// Minimum speed, reached at apoapsis.
    pub fn apoapsis_speed(&self) -> f64 {
        self.hodograph_radius() * (1.0 - self.eccentricity)
    }

    /// Position of `speed` between the apoapsis speed (0) and the periapsis speed (1).
    ///
    /// Meant for speed gauges. A circular orbit has a single speed and maps to `1`.
    pub fn speed_fraction(&self, speed: f64) -> f64 {
        let (low, high) = (self.apoapsis_speed(), self.periapsis_speed());
        if high - low <= f64::EPSILON * high {
            return 1.0;
        }
        ((speed - low) / (high - low)).clamp(0.0, 1.0)
    }

    /// Specific orbital energy `−μ / (2a)`.
    pub fn specific_energy(&self) -> f64 {
        -self.mu / (2.0 * self.semi_major_axis)
    }
}
