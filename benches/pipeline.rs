//! Benchmarks for the gridmask pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::GrayImage;

use gridmask::display::NullSink;
use gridmask::pipeline::{self, PipelineOptions};
use gridmask::threshold::{distinct_values, fill_mask, in_range_mask, tri_ranges};
use gridmask::types::{Boundary, Range};

/// A square map with an obstacle border, an unknown band and free interior.
fn synthetic_map(size: u32) -> GrayImage {
    GrayImage::from_fn(size, size, |x, y| {
        let edge = x.min(y).min(size - 1 - x).min(size - 1 - y);
        let value = match edge {
            0..=1 => 0,
            2..=15 => 205,
            _ => 254,
        };
        image::Luma([value])
    })
}

// -- Analysis benchmarks --

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");

    let small = synthetic_map(64);
    let large = synthetic_map(1024);

    group.bench_function("distinct_values_64", |b| {
        b.iter(|| distinct_values(black_box(&small)).unwrap())
    });

    group.bench_function("distinct_values_1024", |b| {
        b.iter(|| distinct_values(black_box(&large)).unwrap())
    });

    group.bench_function("tri_ranges_1024", |b| {
        b.iter(|| tri_ranges(black_box(&large), Boundary::Shared).unwrap())
    });

    group.finish();
}

// -- Masking benchmarks --

fn bench_masking(c: &mut Criterion) {
    let mut group = c.benchmark_group("masking");

    let map = synthetic_map(1024);
    let free = Range { low: 229, high: 254 };
    let mask = in_range_mask(&map, free);

    group.bench_function("in_range_mask_1024", |b| {
        b.iter(|| in_range_mask(black_box(&map), free))
    });

    group.bench_function("fill_mask_1024", |b| {
        b.iter(|| fill_mask(black_box(&map), black_box(&mask), 0).unwrap())
    });

    group.finish();
}

// -- Full pipeline --

fn bench_pipeline(c: &mut Criterion) {
    let map = synthetic_map(512);
    let options = PipelineOptions::default();

    c.bench_function("pipeline_512", |b| {
        b.iter(|| pipeline::run(black_box(&map), &options, &mut NullSink).unwrap())
    });
}

criterion_group!(benches, bench_analysis, bench_masking, bench_pipeline);
criterion_main!(benches);
