//! # hodograph
//!
//! Two-body Keplerian kinematics for orbit visualisation: Kepler's equation, state
//! vectors from orbital elements, true anomaly integration and a stepwise model of the
//! velocity hodograph.
//!
//! Every function is a synchronous pure function of its arguments. Drawing, coordinate
//! flipping and frame scheduling belong to the caller.
//!
//! ```rust
//! use hodograph::{advance_angle, build_hodograph_model, evaluate_by_angle, OrbitalElements};
//!
//! let elements = OrbitalElements::with_unit_mu(1.0, 0.5);
//! let state = evaluate_by_angle(&elements, 0.0);
//! assert!((state.radius - 0.5).abs() < 1e-12);
//!
//! let theta = advance_angle(0.0, &state, 0.01);
//! assert!(theta > 0.0);
//!
//! let model = build_hodograph_model(8, 0.5);
//! assert_eq!(model.len(), 8);
//! ```

pub mod anomaly;
pub mod constants;
pub mod hodograph;
pub mod hodograph_errors;
pub mod integrator;
pub mod kepler;
pub mod kernel_params;
pub mod orbit_path;
pub mod orbital_elements;
pub mod state_vector;

pub use anomaly::AnomalyState;
pub use hodograph::{
    build_hodograph_model, circle::HodographCircle, HodographModel, HodographStep, StepBranch,
};
pub use hodograph_errors::HodographError;
pub use integrator::{advance_angle, AngularTimeIntegrator};
pub use kepler::{solve_kepler_equation, solve_kepler_equation_with};
pub use kernel_params::KernelParams;
pub use orbital_elements::OrbitalElements;
pub use state_vector::{
    evaluate_by_angle, evaluate_by_anomaly, evaluate_by_duration, evaluate_by_time,
    evaluate_by_time_with, StateVector,
};
