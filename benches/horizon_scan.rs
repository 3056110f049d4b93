use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use parallax_horizons::error_models::AstrometricModel;
use parallax_horizons::horizon::{distance_grid, first_crossing, HorizonProfile};
use parallax_horizons::photometry::SptPhotometry;

/// Monotonically increasing error sequence with seeded random increments.
fn make_error_sequence(samples: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(0xA57);
    let mut errs = Vec::with_capacity(samples);
    let mut acc = 1.0e-5;
    for _ in 0..samples {
        acc *= 1.0 + rng.random::<f64>() * 0.01;
        errs.push(acc);
    }
    errs
}

fn bench_profile_evaluation(c: &mut Criterion) {
    let grid = distance_grid();
    let solar = SptPhotometry {
        v_mini: 0.75,
        v_abs: 4.8,
    };

    c.bench_function("horizon_profile_10001", |b| {
        b.iter(|| {
            HorizonProfile::new(
                "G2V",
                black_box(solar),
                AstrometricModel::PreLaunch,
                black_box(&grid),
            )
        })
    });
}

fn bench_threshold_scan(c: &mut Criterion) {
    let errs = make_error_sequence(10_001);

    c.bench_function("first_crossing_10001", |b| {
        b.iter(|| first_crossing(black_box(&errs), black_box(0.01)))
    });
}

criterion_group!(benches, bench_profile_evaluation, bench_threshold_scan);
criterion_main!(benches);
