#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for Bresenham line rasterization.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use trueno_raster::prelude::*;

fn rasterize_line_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterize_line");

    for length in [10, 100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(length as u64 + 1));
        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, &length| {
            // Shallow slope so both error branches are exercised
            b.iter(|| rasterize_line(black_box(0), black_box(0), black_box(length), black_box(length / 3)));
        });
    }

    group.finish();
}

fn line_iterator_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_iterator");
    let segment = LineSegment::from_coords(-5_000, 1_234, 5_000, -4_321);

    group.bench_function("count", |b| {
        b.iter(|| black_box(segment).into_iter().count());
    });

    group.bench_function("collect", |b| {
        b.iter(|| black_box(segment).into_iter().collect::<Vec<_>>());
    });

    group.bench_function("symmetric", |b| {
        b.iter(|| rasterize_line_symmetric(black_box(segment.end), black_box(segment.start)));
    });

    group.finish();
}

fn draw_line_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_line");

    for size in [256u32, 1024, 4096] {
        let mut fb = Framebuffer::new(size, size).expect("framebuffer creation should succeed");
        let edge = size as i32 - 1;

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut pen = Pen::new(&mut fb, Rgba::BLACK);
                draw_line(&mut pen, 0, 0, black_box(edge), black_box(edge / 2));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, rasterize_line_benchmark, line_iterator_benchmark, draw_line_benchmark);
criterion_main!(benches);
