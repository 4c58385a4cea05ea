//! # Kepler's equation for elliptic orbits
//!
//! Solves `E − e·sin(E) = M` for the eccentric anomaly `E` with a **fixed number** of
//! Newton–Raphson updates. No convergence test is performed and the loop never exits
//! early, so the cost and the precision of a call depend only on the iteration count.
//!
//! With the default 7 iterations the residual stays well below `1e-6` for `e < 0.9`.
//! Closer to `e = 1` the accuracy degrades; this is a known limitation, not a guarded error.
//!
//! The module also hosts the angle normalization helpers shared by the crate.

use std::f64::consts::PI;

use crate::constants::{Radian, DPI, HIGH_ECCENTRICITY_GUESS, KEPLER_ITERATIONS};

/// Principal value of an angle, in `[0, 2π)`.
pub fn principal_angle(a: Radian) -> Radian {
    a.rem_euclid(DPI)
}

/// Principal difference `a − b` between two angles, in `[−π, π]`.
pub fn angle_diff(a: Radian, b: Radian) -> Radian {
    let mut diff = principal_angle(a) - principal_angle(b);

    if diff > PI {
        diff -= DPI;
    } else if diff < -PI {
        diff += DPI;
    }

    diff
}

/// Residual `E − e·sin(E) − M` of Kepler's equation.
#[inline]
pub fn kepler_residual(eccentric_anomaly: Radian, mean_anomaly: Radian, eccentricity: f64) -> f64 {
    eccentric_anomaly - eccentricity * eccentric_anomaly.sin() - mean_anomaly
}

/// Solve Kepler's equation with the default iteration count.
///
/// See [`solve_kepler_equation_with`].
pub fn solve_kepler_equation(mean_anomaly: Radian, eccentricity: f64) -> Radian {
    solve_kepler_equation_with(mean_anomaly, eccentricity, KEPLER_ITERATIONS)
}

/// Solve Kepler's equation `E − e·sin(E) = M` for the eccentric anomaly.
///
/// Arguments
/// ---------
/// * `mean_anomaly` – `M` in radians, any real value.
/// * `eccentricity` – `e`, expected in `[0, 1)`. Not checked.
/// * `iterations` – exact number of Newton–Raphson updates.
///
/// Return
/// ------
/// * The eccentric anomaly `E` in radians. It is **not** normalized: for `M` outside
///   `[0, 2π)` the result follows `M`.
///
/// Initial guess is `E₀ = M` when `e < 0.8`. Otherwise it is the apoapsis of the
/// revolution holding `M`, `E₀ = π + 2π·⌊M/2π⌋` (plain `π` for `M ∈ [0, 2π)`), which keeps
/// Newton–Raphson from overshooting near periapsis on very elongated orbits.
pub fn solve_kepler_equation_with(
    mean_anomaly: Radian,
    eccentricity: f64,
    iterations: usize,
) -> Radian {
    solve_from_guess(
        mean_anomaly,
        eccentricity,
        iterations,
        HIGH_ECCENTRICITY_GUESS,
    )
}

pub(crate) fn solve_from_guess(
    mean_anomaly: Radian,
    eccentricity: f64,
    iterations: usize,
    high_eccentricity_guess: f64,
) -> Radian {
    let mut ecc_anom = if eccentricity < high_eccentricity_guess {
        mean_anomaly
    } else {
        PI + DPI * (mean_anomaly / DPI).floor()
    };

    for _ in 0..iterations {
        let f = kepler_residual(ecc_anom, mean_anomaly, eccentricity);
        let df = 1.0 - eccentricity * ecc_anom.cos();
        ecc_anom -= f / df;
    }

    ecc_anom
}

#[cfg(test)]
mod kepler_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_principal_angle() {
        assert_abs_diff_eq!(principal_angle(-PI / 2.), 3. * PI / 2., epsilon = 1e-15);
        assert_abs_diff_eq!(principal_angle(5. * PI), PI, epsilon = 1e-14);
        assert_eq!(principal_angle(0.0), 0.0);
    }

    #[test]
    fn test_angle_diff() {
        assert_abs_diff_eq!(angle_diff(0.1, DPI - 0.1), 0.2, epsilon = 1e-14);
        assert_abs_diff_eq!(angle_diff(DPI - 0.1, 0.1), -0.2, epsilon = 1e-14);
        assert_abs_diff_eq!(angle_diff(3.0, 1.0), 2.0, epsilon = 1e-14);
    }

    #[test]
    fn test_circular_orbit_is_identity() {
        for m in [0.0, 0.5, 2.0, 4.0, 6.0] {
            assert_eq!(solve_kepler_equation(m, 0.0), m);
        }
    }

    #[test]
    fn test_residual_below_threshold() {
        let n = 200;
        for e in [0.0, 0.1, 0.3, 0.5, 0.7, 0.79, 0.8, 0.85, 0.89] {
            for k in 0..n {
                let m = DPI * k as f64 / n as f64;
                let ecc_anom = solve_kepler_equation(m, e);
                assert!(
                    kepler_residual(ecc_anom, m, e).abs() < 1e-6,
                    "residual too large for M = {m}, e = {e}"
                );
            }
        }
    }

    #[test]
    fn test_high_eccentricity_any_revolution() {
        for e in [0.8, 0.85, 0.89] {
            for k in -2000..=2000 {
                let m = 0.01 * k as f64;
                let ecc_anom = solve_kepler_equation(m, e);
                assert!(
                    kepler_residual(ecc_anom, m, e).abs() < 1e-6,
                    "residual too large for M = {m}, e = {e}"
                );
            }
        }

        // Same solution modulo the revolution
        let base = solve_kepler_equation(1.0, 0.85);
        assert_abs_diff_eq!(
            solve_kepler_equation(1.0 - 2. * DPI, 0.85),
            base - 2. * DPI,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            solve_kepler_equation(1.0 + 3. * DPI, 0.85),
            base + 3. * DPI,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_unnormalized_output() {
        // M outside [0, 2π) is solved as given, not wrapped
        let m = 3. * DPI + 1.0;
        let ecc_anom = solve_kepler_equation(m, 0.3);
        assert!(ecc_anom > 3. * DPI);
        assert!(kepler_residual(ecc_anom, m, 0.3).abs() < 1e-10);
    }

    #[test]
    fn test_iteration_count_is_exact() {
        // A single update from E₀ = M: E₁ = M + e·sin(M) / (1 − e·cos(M))
        let (m, e) = (1.0_f64, 0.2_f64);
        let expected = m + e * m.sin() / (1.0 - e * m.cos());
        assert_abs_diff_eq!(solve_kepler_equation_with(m, e, 1), expected, epsilon = 1e-15);

        // Zero iterations returns the initial guess
        assert_eq!(solve_kepler_equation_with(m, e, 0), m);
        assert_eq!(solve_kepler_equation_with(m, 0.85, 0), PI);
    }

    #[test]
    fn test_known_value() {
        // Classical textbook case (Vallado ex. 2-1): M = 235.4°, e = 0.4
        let m = 235.4_f64.to_radians();
        let ecc_anom = solve_kepler_equation(m, 0.4);
        assert_abs_diff_eq!(ecc_anom, 3.848_661_745, epsilon = 1e-8);
    }
}
