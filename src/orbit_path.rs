//! Polyline samples of the orbit, for drawing its outline.

use nalgebra::Vector2;

use crate::{
    constants::{PlanarPoint, DPI, MIN_OUTLINE_STEP},
    orbital_elements::OrbitalElements,
};

/// Point of the conic at true anomaly `θ`.
#[inline]
pub fn orbit_point(elements: &OrbitalElements, true_anomaly: f64) -> PlanarPoint {
    let (sin_t, cos_t) = true_anomaly.sin_cos();
    elements.radius_at(true_anomaly) * Vector2::new(cos_t, sin_t)
}

/// Sample the orbit at `θ = 0, step, 2·step, …` while `θ ≤ 2π`.
///
/// A non-finite `angular_step`, or one below [`MIN_OUTLINE_STEP`], gives an empty polyline.
pub fn sample_orbit(elements: &OrbitalElements, angular_step: f64) -> Vec<PlanarPoint> {
    if !(angular_step.is_finite() && angular_step >= MIN_OUTLINE_STEP) {
        return Vec::new();
    }

    let count = (DPI / angular_step).floor() as usize;
    (0..=count)
        .map(|k| k as f64 * angular_step)
        .filter(|theta| *theta <= DPI)
        .map(|theta| orbit_point(elements, theta))
        .collect()
}

/// Sample the orbit in `count` equal angular steps. The result holds `count + 1` points,
/// the last one being the first one again.
pub fn sample_orbit_closed(elements: &OrbitalElements, count: usize) -> Vec<PlanarPoint> {
    if count == 0 {
        return Vec::new();
    }

    let mut points: Vec<_> = (0..count)
        .map(|k| orbit_point(elements, DPI * k as f64 / count as f64))
        .collect();
    points.push(points[0]);
    points
}
