use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use homog_mat4::{
    compose,
    transforms::{frustum, rotate_x, rotate_y, translate},
    Mat4,
};

fn mvp() -> Mat4 {
    frustum(45.0, 4.0 / 3.0, 0.1, 100.0) * translate(0.0, 0.0, -5.0) * rotate_y(30.0)
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");

    for num_matrices in [2, 4, 8, 16].iter() {
        let matrices = (0..*num_matrices)
            .map(|i| rotate_x(i as f64) * translate(i as f64, 0.0, 1.0))
            .collect::<Vec<_>>();

        group.bench_with_input(
            BenchmarkId::new("compose", num_matrices),
            &matrices,
            |b, m| {
                b.iter(|| {
                    let _ = black_box(compose(black_box(m)));
                });
            },
        );
    }
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse");
    let m = mvp();

    group.bench_function(BenchmarkId::new("inverse", ""), |b| {
        b.iter(|| black_box(black_box(&m).inverse()));
    });

    group.bench_function(BenchmarkId::new("try_inverse", ""), |b| {
        b.iter(|| black_box(black_box(&m).try_inverse(1e-12)));
    });

    group.bench_function(BenchmarkId::new("transpose", ""), |b| {
        b.iter(|| black_box(black_box(&m).transpose()));
    });
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");
    let m = mvp();

    for num_points in [1000, 10000, 100000].iter() {
        group.throughput(criterion::Throughput::Elements(*num_points as u64));

        let points = (0..*num_points)
            .map(|i| [i as f64 * 1e-3, 1.0, -2.0])
            .collect::<Vec<_>>();

        group.bench_with_input(BenchmarkId::new("apply3", num_points), &points, |b, p| {
            b.iter(|| {
                for point in p.iter() {
                    black_box(m.apply3(*point));
                }
            });
        });
    }
}

criterion_group!(benches, bench_compose, bench_inverse, bench_apply);
criterion_main!(benches);
