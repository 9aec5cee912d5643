use criterion::{Criterion, black_box, criterion_group, criterion_main};
use skyline_math::*;

fn bench_bilerp(c: &mut Criterion) {
    c.bench_function("bilerp", |bencher| {
        bencher.iter(|| {
            black_box(bilerp(
                black_box(812.0),
                black_box(815.0),
                black_box(809.0),
                black_box(820.0),
                black_box(0.37),
                black_box(0.61),
            ))
        })
    });
}

fn bench_bracket_search_long_range(c: &mut Criterion) {
    // Sight line 600 m above a plane, dipping 0.5 % and bending with curvature.
    let f = |x: f64| -> Result<f64, SkylineError> { Ok(600.0 - x * 0.005 + 6.8e-8 * x * x) };
    c.bench_function("first_interval_containing_root_300km", |bencher| {
        bencher.iter(|| {
            black_box(first_interval_containing_root(
                f,
                black_box(0.0),
                black_box(300_000.0),
                black_box(64.0),
            ))
        })
    });
}

fn bench_improve_root(c: &mut Criterion) {
    let f = |x: f64| -> Result<f64, SkylineError> { Ok(x * x - 2.0) };
    c.bench_function("improve_root_4m", |bencher| {
        bencher.iter(|| black_box(improve_root(f, black_box(0.0), black_box(64.0), black_box(4.0))))
    });
}

fn bench_angular_distance(c: &mut Criterion) {
    c.bench_function("angular_distance", |bencher| {
        bencher.iter(|| black_box(angular_distance(black_box(6.2), black_box(0.1))))
    });
}

criterion_group!(
    benches,
    bench_bilerp,
    bench_bracket_search_long_range,
    bench_improve_root,
    bench_angular_distance,
);
criterion_main!(benches);
