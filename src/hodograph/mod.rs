//! # Stepwise construction of the velocity hodograph
//!
//! This module precomputes a [`HodographModel`]: one revolution of a Keplerian ellipse
//! cut into `n` steps of equal true-anomaly increment `dθ = 2π/n`. Each step pairs the
//! displacement of the body with the velocity increment
//!
//! ```text
//! Δv = −(μ/h)·dθ·r̂
//! ```
//!
//! which has the same magnitude `(μ/h)·dθ` on every step and points along the radial
//! unit vector. Equal angular steps therefore add equal velocity increments turning by
//! `dθ` each time: the velocity tips form a regular polygon, and in the limit `dθ → 0`
//! the circle described in [`circle`].
//!
//! ## Construction
//!
//! Starting at periapsis with `point = (a(1−e), 0)` and `velocity = (0, (μ/h)(1+e))`,
//! each step:
//!
//! 1. reads `θ = atan2(point)` and `r̂ = point / |point|`,
//! 2. aims at `θ + dθ`,
//! 3. intersects the velocity ray with the target direction ([`intersect_rays`]),
//!    falling back to the exact conic radius `p / (1 + e·cos(θ + dθ))` when the solve
//!    is degenerate,
//! 4. adds `Δv` to the velocity.
//!
//! The branch taken is recorded in [`HodographStep::branch`].
//!
//! ## Usage
//!
//! ```rust
//! use hodograph::hodograph::build_hodograph_model;
//!
//! let model = build_hodograph_model(8, 0.5);
//! assert_eq!(model.len(), 8);
//!
//! // The caller owns the replay index; it may run past the end of the loop
//! let frame = 11;
//! let step = model.step(frame).unwrap();
//! assert_eq!(step, &model.steps()[3]);
//! ```
//!
//! The model is plain read-only data: rebuild it when `n` or `e` changes.

pub mod circle;
pub mod intersection;

use itertools::Itertools;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    constants::{PlanarPoint, PlanarVelocity, Radian, DEFAULT_MU, DPI, UNIT_SEMI_MAJOR_AXIS},
    hodograph_errors::HodographError,
    kernel_params::KernelParams,
    orbital_elements::OrbitalElements,
};

use circle::HodographCircle;
pub use intersection::{intersect_rays, RayIntersection};

/// Which way the next point of a step was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepBranch {
    /// `next_point = point + t·velocity`, from the ray/ray intersection.
    LineIntersected,
    /// `next_point = r(θ + dθ)·(cos, sin)(θ + dθ)`, exact on the ellipse.
    DegenerateAnalytic,
}

/// One discrete transition of the construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HodographStep {
    pub point: PlanarPoint,
    pub velocity: PlanarVelocity,
    pub theta: Radian,
    pub target_theta: Radian,
    pub next_point: PlanarPoint,
    pub delta_v: PlanarVelocity,
    pub next_velocity: PlanarVelocity,
    pub branch: StepBranch,
}

/// Number of steps that took each branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BranchCounts {
    pub line_intersected: usize,
    pub degenerate_analytic: usize,
}

/// Precomputed stepwise hodograph for one revolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HodographModel {
    steps: Vec<HodographStep>,
    d_theta: f64,
    angular_momentum: f64,
    elements: OrbitalElements,
}

/// Build the model of `n` steps for eccentricity `e`, with `a = 1` and `μ = 1`.
///
/// Preconditions (`n ≥ 1`, `0 ≤ e < 1`) are not checked; `n = 0` yields an empty model.
/// See [`HodographModel::try_build`] for a validated variant.
pub fn build_hodograph_model(n: usize, eccentricity: f64) -> HodographModel {
    HodographModel::build(
        n,
        &OrbitalElements::new(UNIT_SEMI_MAJOR_AXIS, eccentricity, DEFAULT_MU),
        &KernelParams::default(),
    )
}

impl HodographModel {
    /// Build the model of `n` steps for an arbitrary orbit.
    ///
    /// Arguments
    /// ---------
    /// * `n` – number of steps over one revolution.
    /// * `elements` – orbit `(a, e, μ)`.
    /// * `params` – only `intersection_eps` is read.
    ///
    /// Return
    /// ------
    /// * A model of exactly `n` steps, in order, starting at periapsis.
    pub fn build(n: usize, elements: &OrbitalElements, params: &KernelParams) -> Self {
        let e = elements.eccentricity;
        let p = elements.semi_latus_rectum();
        let h = elements.angular_momentum();
        let mu_over_h = elements.mu / h;
        let d_theta = DPI / n as f64;
        let eps = params.intersection_eps;

        let mut point = Vector2::new(elements.periapsis_radius(), 0.0);
        let mut velocity = Vector2::new(0.0, mu_over_h * (1.0 + e));
        let mut steps = Vec::with_capacity(n);

        for k in 0..n {
            let theta = point.y.atan2(point.x);
            let radial_dir = point / point.norm();

            let target_theta = theta + d_theta;
            let (sin_t, cos_t) = target_theta.sin_cos();
            let target_dir = Vector2::new(cos_t, sin_t);

            let (next_point, branch) = match intersect_rays(&point, &velocity, &target_dir, eps) {
                RayIntersection::Hit { t, .. } => (point + t * velocity, StepBranch::LineIntersected),
                RayIntersection::Degenerate => {
                    trace!(step = k, target_theta, "analytic fallback");
                    let r_next = p / (1.0 + e * cos_t);
                    (r_next * target_dir, StepBranch::DegenerateAnalytic)
                }
            };

            let delta_v = (-mu_over_h * d_theta) * radial_dir;
            let next_velocity = velocity + delta_v;

            steps.push(HodographStep {
                point,
                velocity,
                theta,
                target_theta,
                next_point,
                delta_v,
                next_velocity,
                branch,
            });

            point = next_point;
            velocity = next_velocity;
        }

        let model = Self {
            steps,
            d_theta,
            angular_momentum: h,
            elements: *elements,
        };

        let counts = model.branch_counts();
        debug!(
            n,
            eccentricity = e,
            line_intersected = counts.line_intersected,
            degenerate_analytic = counts.degenerate_analytic,
            closure_gap = model.closure_gap(),
            "hodograph model built"
        );

        model
    }

    /// Validated variant of [`HodographModel::build`].
    ///
    /// Return
    /// ------
    /// * `Err(InvalidStepCount(0))` when `n = 0`.
    /// * The error of [`OrbitalElements::validate`] for an invalid orbit.
    pub fn try_build(
        n: usize,
        elements: &OrbitalElements,
        params: &KernelParams,
    ) -> Result<Self, HodographError> {
        if n == 0 {
            return Err(HodographError::InvalidStepCount(n));
        }
        elements.validate()?;
        Ok(Self::build(n, elements, params))
    }

    pub fn steps(&self) -> &[HodographStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Angular increment `2π/n` of every step.
    pub fn d_theta(&self) -> f64 {
        self.d_theta
    }

    pub fn angular_momentum(&self) -> f64 {
        self.angular_momentum
    }

    pub fn eccentricity(&self) -> f64 {
        self.elements.eccentricity
    }

    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }

    /// Step at a replay index, wrapping around the loop. `None` only for an empty model.
    pub fn step(&self, index: usize) -> Option<&HodographStep> {
        if self.steps.is_empty() {
            return None;
        }
        self.steps.get(index % self.steps.len())
    }

    /// Endless looped replay of the steps.
    pub fn replay(&self) -> impl Iterator<Item = &HodographStep> + '_ {
        self.steps.iter().cycle()
    }

    /// Magnitude `(μ/h)·dθ` shared by every velocity increment.
    pub fn velocity_increment(&self) -> f64 {
        self.elements.mu / self.angular_momentum * self.d_theta
    }

    /// Exact hodograph circle of the orbit.
    pub fn circle(&self) -> HodographCircle {
        HodographCircle::from_elements(&self.elements)
    }

    /// Distance between the end of the last step and the start of the first one.
    pub fn closure_gap(&self) -> f64 {
        match (self.steps.first(), self.steps.last()) {
            (Some(first), Some(last)) => (last.next_point - first.point).norm(),
            _ => 0.0,
        }
    }

    /// Largest jump between the end of a step and the start of the following one,
    /// the last step being followed by the first.
    pub fn max_link_gap(&self) -> f64 {
        self.steps
            .iter()
            .circular_tuple_windows()
            .map(|(current, next)| (next.point - current.next_point).norm())
            .fold(0.0, f64::max)
    }

    pub fn branch_counts(&self) -> BranchCounts {
        self.steps
            .iter()
            .fold(BranchCounts::default(), |mut counts, step| {
                match step.branch {
                    StepBranch::LineIntersected => counts.line_intersected += 1,
                    StepBranch::DegenerateAnalytic => counts.degenerate_analytic += 1,
                }
                counts
            })
    }
}
