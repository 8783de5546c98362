//! Benchmarks for the rotating-calipers sweep.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use minrect::{min_area_rect, Point2};

/// Generates a regular n-gon, the worst case for the caliper walk (every
/// edge serves as the bottom side once).
fn regular_polygon(n: usize, radius: f64) -> Vec<Point2<f64>> {
    (0..n)
        .map(|k| {
            let t = 2.0 * std::f64::consts::PI * k as f64 / n as f64;
            Point2::new(radius * t.cos(), radius * t.sin())
        })
        .collect()
}

/// Generates an irregular convex polygon by jittering vertex angles with a
/// deterministic xorshift sequence. Radii stay fixed so convexity holds.
fn jittered_polygon(n: usize, radius: f64, seed: u64) -> Vec<Point2<f64>> {
    let mut state = seed;
    let mut offsets = Vec::with_capacity(n);

    for _ in 0..n {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        offsets.push(state as f64 / u64::MAX as f64);
    }

    // Spread the jitter inside each vertex's angular slot.
    let slot = 2.0 * std::f64::consts::PI / n as f64;
    (0..n)
        .map(|k| {
            let t = slot * (k as f64 + 0.2 + 0.6 * offsets[k]);
            Point2::new(radius * t.cos(), radius * t.sin())
        })
        .collect()
}

fn bench_regular(c: &mut Criterion) {
    let mut group = c.benchmark_group("min_area_rect_regular");

    for size in [8, 64, 512, 4096] {
        let points = regular_polygon(size, 100.0);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("vertices", size), &points, |b, points| {
            b.iter(|| min_area_rect(black_box(points)))
        });
    }

    group.finish();
}

fn bench_jittered(c: &mut Criterion) {
    let mut group = c.benchmark_group("min_area_rect_jittered");

    for size in [8, 64, 512, 4096] {
        let points = jittered_polygon(size, 100.0, 0x9E3779B97F4A7C15);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("vertices", size), &points, |b, points| {
            b.iter(|| min_area_rect(black_box(points)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_regular, bench_jittered);
criterion_main!(benches);
