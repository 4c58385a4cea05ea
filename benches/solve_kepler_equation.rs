use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hodograph::{evaluate_by_time, solve_kepler_equation, OrbitalElements};

/// Uniform random in [0, 2π)
#[inline]
fn rand_angle(rng: &mut StdRng) -> f64 {
    rng.random::<f64>() * std::f64::consts::TAU
}

/// Typical regime: e ∈ [0.0, 0.7], initial guess E₀ = M
fn bench_typical(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let samples = 10_000usize;

    c.bench_function("solve_kepler_equation/typical_e<=0.7", |b| {
        b.iter_batched(
            || {
                // Pre-generate inputs to avoid RNG cost in the timed section
                (0..samples)
                    .map(|_| (rand_angle(&mut rng), rng.random_range(0.0..=0.7)))
                    .collect::<Vec<_>>()
            },
            |cases| {
                for (m, e) in cases {
                    black_box(solve_kepler_equation(black_box(m), black_box(e)));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// High-eccentricity regime: e ∈ [0.8, 0.9), initial guess E₀ = π
fn bench_high_e(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);
    let samples = 10_000usize;

    c.bench_function("solve_kepler_equation/high_e_0.8..0.9", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| (rand_angle(&mut rng), rng.random_range(0.8..0.9)))
                    .collect::<Vec<_>>()
            },
            |cases| {
                for (m, e) in cases {
                    black_box(solve_kepler_equation(black_box(m), black_box(e)));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// One animation frame: time-driven state evaluation
fn bench_evaluate_by_time(c: &mut Criterion) {
    let elements = OrbitalElements::with_unit_mu(1.0, 0.55);

    c.bench_function("evaluate_by_time/frame", |b| {
        let mut elapsed = 0.0;
        b.iter(|| {
            elapsed += 1.0 / 60.0;
            black_box(evaluate_by_time(&elements, black_box(elapsed), 0.5))
        })
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_typical, bench_high_e, bench_evaluate_by_time
);
criterion_main!(benches);
