#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use hodograph::StateVector;
use nalgebra::Vector2;

pub fn assert_vec2_close(actual: &Vector2<f64>, expected: &Vector2<f64>, epsilon: f64) {
    assert_abs_diff_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_abs_diff_eq!(actual.y, expected.y, epsilon = epsilon);
}

pub fn assert_state_close(actual: &StateVector, expected: &StateVector, epsilon: f64) {
    assert_vec2_close(&actual.position, &expected.position, epsilon);
    assert_vec2_close(&actual.velocity, &expected.velocity, epsilon);
    assert_abs_diff_eq!(actual.radius, expected.radius, epsilon = epsilon);
    assert_abs_diff_eq!(
        actual.angular_momentum,
        expected.angular_momentum,
        epsilon = epsilon
    );
    assert_abs_diff_eq!(actual.speed, expected.speed, epsilon = epsilon);
}

/// Grid of elliptic orbits `(a, e, μ)` covering small/large axes and low/high eccentricities.
pub fn orbit_grid() -> Vec<(f64, f64, f64)> {
    let mut grid = Vec::new();
    for a in [0.3, 1.0, 7.5] {
        for e in [0.0, 0.1, 0.5, 0.85] {
            for mu in [1.0, 3.986e5] {
                grid.push((a, e, mu));
            }
        }
    }
    grid
}
