use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nailfile::{decode, encode, DecodeOptions, Point2D};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

fn random_points(count: usize) -> Vec<Point2D> {
    let mut rng = StdRng::seed_from_u64(0x4E41_494C);
    (0..count)
        .map(|_| Point2D::new(rng.random_range(-16.0..16.0), rng.random_range(-16.0..16.0)))
        .collect()
}

/// Decode throughput for files that end on a group boundary and files that don't
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for count in [4usize, 1_001, 100_000] {
        let (bytes, _) = encode(&random_points(count));
        group.throughput(Throughput::Bytes(bytes.len() as u64));

        group.bench_with_input(BenchmarkId::new("points", count), &bytes, |b, bytes| {
            b.iter(|| {
                let decoded = decode(black_box(bytes), &DecodeOptions::default()).unwrap();
                black_box(decoded);
            });
        });

        let options = DecodeOptions::new().keep_raw(true);
        group.bench_with_input(BenchmarkId::new("with_raw", count), &bytes, |b, bytes| {
            b.iter(|| {
                let decoded = decode(black_box(bytes), &options).unwrap();
                black_box(decoded);
            });
        });
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for count in [4usize, 1_001, 100_000] {
        let points = random_points(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("points", count), &points, |b, points| {
            b.iter(|| {
                let encoded = encode(black_box(points));
                black_box(encoded);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode, bench_encode);
criterion_main!(benches);
