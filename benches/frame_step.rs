//! Benchmarks for sampling and the per-frame update.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use shapecloud::integrator::{step, StepParams};
use shapecloud::shape::{sample, sample_into};
use shapecloud::ShapeKind;

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_60k");

    for shape in ShapeKind::ALL {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut out = vec![0.0f32; 60_000 * 3];
        group.bench_function(shape.name(), |b| {
            b.iter(|| sample_into(shape, 1.5, black_box(&mut out), &mut rng))
        });
    }

    group.finish();
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for count in [1_000usize, 25_000, 60_000] {
        let mut rng = SmallRng::seed_from_u64(2);
        let target = sample(ShapeKind::Heart, count, 1.5, &mut rng);
        let mut current = sample(ShapeKind::Sphere, count, 10.0, &mut rng);
        let params = StepParams {
            speed: 0.5,
            noise_strength: 0.5,
            hover_effect: true,
        };
        let mut t = 0.0f32;

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                t += 1.0 / 60.0;
                step(black_box(&mut current), &target, t, Some(Vec3::new(1.0, 0.5, 0.0)), &params)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sample, bench_step);
criterion_main!(benches);
