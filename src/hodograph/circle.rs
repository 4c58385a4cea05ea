//! Exact velocity hodograph of a Keplerian ellipse.
//!
//! Rewriting the by-angle velocity as
//!
//! ```text
//! v(θ) = (μ/h)·(−sin θ, e + cos θ) = (0, μ·e/h) + (μ/h)·(−sin θ, cos θ)
//! ```
//!
//! shows that the tip of the velocity vector runs on a circle of radius `μ/h`
//! centred at `(0, μ·e/h)`. The origin of the velocity plane lies inside the circle
//! for every elliptic orbit since `e < 1`.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{PlanarVelocity, Radian, DPI},
    orbital_elements::OrbitalElements,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HodographCircle {
    pub center: PlanarVelocity,
    pub radius: f64,
}

impl HodographCircle {
    pub fn from_elements(elements: &OrbitalElements) -> Self {
        let radius = elements.hodograph_radius();
        Self {
            center: Vector2::new(0.0, radius * elements.eccentricity),
            radius,
        }
    }

    /// Velocity at true anomaly `θ`, read on the circle.
    pub fn velocity_at(&self, true_anomaly: Radian) -> PlanarVelocity {
        let (sin_t, cos_t) = true_anomaly.sin_cos();
        self.center + self.radius * Vector2::new(-sin_t, cos_t)
    }

    /// Signed radial offset of `velocity` from the circle (positive outside).
    pub fn distance_to(&self, velocity: &PlanarVelocity) -> f64 {
        (velocity - self.center).norm() - self.radius
    }

    /// `count` points evenly spread on the circle, starting at the periapsis velocity.
    pub fn sample(&self, count: usize) -> Vec<PlanarVelocity> {
        (0..count)
            .map(|k| self.velocity_at(DPI * k as f64 / count as f64))
            .collect()
    }
}
