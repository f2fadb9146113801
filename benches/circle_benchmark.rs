#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for midpoint circle rasterization.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trueno_raster::prelude::*;

fn rasterize_circle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterize_circle");

    for radius in [5, 50, 500, 5_000] {
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, &radius| {
            b.iter(|| rasterize_circle(black_box(0), black_box(0), black_box(radius)).expect("radius is non-negative"));
        });
    }

    group.finish();
}

fn circle_distinct_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle_distinct");

    for radius in [50, 500] {
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, &radius| {
            b.iter(|| rasterize_circle_distinct(0, 0, black_box(radius)).expect("radius is non-negative"));
        });
    }

    group.finish();
}

fn sketch_circle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("sketch_circle");
    group.sample_size(50);

    let mut sketch = Sketch::new(800, 600).expect("sketch creation should succeed");
    let request = DrawRequest::new(DrawMode::Circle, Point::new(-20, 15), Point::new(180, 90));

    group.bench_function("800x600", |b| {
        b.iter(|| sketch.draw(black_box(&request)).expect("radius fits i32"));
    });

    group.bench_function("800x600_png", |b| {
        b.iter(|| {
            sketch.clear();
            sketch.draw(&request).expect("radius fits i32");
            PngEncoder::to_bytes(sketch.framebuffer()).expect("encoding should succeed")
        });
    });

    group.finish();
}

criterion_group!(benches, rasterize_circle_benchmark, circle_distinct_benchmark, sketch_circle_benchmark);
criterion_main!(benches);
