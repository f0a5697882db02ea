//! Benchmarks for matrix composition and batch transforms.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use affinum::{Mat3, Mat4, Vec2, Vec3};

/// Generates pseudo-random points in `[0, 100)`.
fn generate_points(count: usize, seed: u64) -> Vec<Vec2<f32>> {
    let mut points = Vec::with_capacity(count);
    let mut state = seed;

    for _ in 0..count {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let x = (state as f32 / u64::MAX as f32) * 100.0;

        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let y = (state as f32 / u64::MAX as f32) * 100.0;

        points.push(Vec2::new(x, y));
    }

    points
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    let a: Mat3<f32> = Mat3::rotate(30.0) * Mat3::scale(2.0, 3.0);
    let b: Mat3<f32> = Mat3::translate(5.0, -2.0) * Mat3::shear(0.5, 0.0);
    group.bench_function("mat3", |bench| {
        bench.iter(|| black_box(a).multiply(&black_box(b)))
    });

    let a: Mat4<f32> = Mat4::translate(1.0, 2.0, 3.0) * Mat4::scale(2.0, 2.0, 2.0);
    let b: Mat4<f32> = Mat4::orthographic(0.0, 800.0, 0.0, 450.0);
    group.bench_function("mat4", |bench| {
        bench.iter(|| black_box(a).multiply(&black_box(b)))
    });

    group.finish();
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");

    group.bench_function("sprite_mvp", |b| {
        b.iter(|| {
            let model = Mat3::translate(black_box(200.0f32), 100.0)
                * Mat3::rotate(black_box(45.0))
                * Mat3::scale(2.0, 2.0);
            let camera = Mat3::translate(400.0, 225.0);
            Mat3::orthographic(0.0, 800.0, 0.0, 450.0) * camera * model
        })
    });

    group.bench_function("then_chain", |b| {
        b.iter(|| {
            Mat3::scale(black_box(2.0f32), 4.0)
                .then(Mat3::shear(3.0, 0.0))
                .then(Mat3::rotate(90.0))
                .then(Mat3::translate(2.0, 3.0))
        })
    });

    group.finish();
}

fn bench_transform_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_points");

    let m3: Mat3<f32> = Mat3::translate(10.0, 20.0) * Mat3::rotate(30.0) * Mat3::scale(1.5, 0.5);
    let m4: Mat4<f32> = Mat4::translate(10.0, 20.0, 0.0) * Mat4::scale(1.5, 0.5, 1.0);

    for count in [100, 1000, 10000, 100000] {
        let points = generate_points(count, 12345);
        let points3: Vec<Vec3<f32>> = points.iter().map(|p| Vec3::from_vec2(*p, 0.0)).collect();
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("mat3", count), &points, |b, pts| {
            b.iter(|| m3.transform_points(black_box(pts)))
        });

        group.bench_with_input(BenchmarkId::new("mat4", count), &points3, |b, pts| {
            b.iter(|| m4.transform_points(black_box(pts)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_multiply,
    bench_compose,
    bench_transform_points
);
criterion_main!(benches);
