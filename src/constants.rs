//! # Constants and type definitions for the hodograph kernel
//!
//! This module centralizes the **numerical defaults**, **tolerances**, and **common type
//! aliases** used throughout the crate.
//!
//! ## Overview
//!
//! - Angular constants (2π)
//! - Default gravitational parameter of the normalized unit system
//! - Default iteration count and initial-guess threshold of the Kepler solver
//! - Tolerance of the hodograph ray/ray intersection
//! - Core type aliases for planar points and velocities
//!
//! Every value defined here is only a *default*: kernel functions receive their
//! configuration explicitly, either as [`crate::orbital_elements::OrbitalElements`]
//! or as [`crate::kernel_params::KernelParams`].

use nalgebra::Vector2;

// -------------------------------------------------------------------------------------------------
// Angular constants
// -------------------------------------------------------------------------------------------------

/// 2π, one full revolution in radians
pub const DPI: f64 = 2. * std::f64::consts::PI;

// -------------------------------------------------------------------------------------------------
// Normalized unit system
// -------------------------------------------------------------------------------------------------

/// Gravitational parameter μ = GM of the normalized unit system
pub const DEFAULT_MU: f64 = 1.0;

/// Semi-major axis used by the stepwise hodograph construction
pub const UNIT_SEMI_MAJOR_AXIS: f64 = 1.0;

// -------------------------------------------------------------------------------------------------
// Solver defaults
// -------------------------------------------------------------------------------------------------

/// Number of Newton–Raphson updates applied to Kepler's equation
pub const KEPLER_ITERATIONS: usize = 7;

/// Eccentricity at and above which the Kepler solver starts from E₀ = π (in M's revolution)
/// instead of E₀ = M
pub const HIGH_ECCENTRICITY_GUESS: f64 = 0.8;

/// Below this value a ray/ray intersection parameter is considered degenerate
pub const INTERSECTION_EPS: f64 = 1e-9;

/// Smallest angular step accepted when sampling the orbit outline (≈ 6.3 million points)
pub const MIN_OUTLINE_STEP: Radian = 1e-6;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;

/// Point of the orbital plane, focus at the origin
pub type PlanarPoint = Vector2<f64>;

/// Velocity in the orbital plane
pub type PlanarVelocity = Vector2<f64>;
