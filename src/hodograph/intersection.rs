//! Ray/ray intersection used by each hodograph step.

use nalgebra::Vector2;

/// 2D cross product `u × w = u.x·w.y − u.y·w.x`.
#[inline]
pub(crate) fn cross(u: &Vector2<f64>, w: &Vector2<f64>) -> f64 {
    u.perp(w)
}

/// Outcome of the ray/ray solve of one hodograph step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RayIntersection {
    /// Both ray parameters are usable. `t` runs along the velocity ray,
    /// `lambda` along the target direction.
    Hit { t: f64, lambda: f64 },
    /// Rays are near-parallel, or the solution lies behind one of the ray origins.
    Degenerate,
}

/// Intersect the ray `point + t·velocity` with the ray `λ·target_dir` from the origin.
///
/// With `denom = velocity × target_dir`:
///
/// ```text
/// t = −(point × target_dir) / denom
/// λ = −(velocity × point) / denom
/// ```
///
/// The solve is rejected when `|denom| < eps`, `t ≤ eps` or `λ ≤ eps`.
pub fn intersect_rays(
    point: &Vector2<f64>,
    velocity: &Vector2<f64>,
    target_dir: &Vector2<f64>,
    eps: f64,
) -> RayIntersection {
    let denom = cross(velocity, target_dir);
    if denom.abs() < eps {
        return RayIntersection::Degenerate;
    }

    let t = -cross(point, target_dir) / denom;
    let lambda = -cross(velocity, point) / denom;

    if t <= eps || lambda <= eps {
        RayIntersection::Degenerate
    } else {
        RayIntersection::Hit { t, lambda }
    }
}
