//! Benchmarks for keyed table writes and reads

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use trellis_data::{DefaultKeyedValues3D, KeyedValues3D, Values3D, find_value_range};

fn build(series: usize, rows: usize, columns: usize) -> DefaultKeyedValues3D<usize, usize, usize> {
    let mut data = DefaultKeyedValues3D::new();
    for s in 0..series {
        for r in 0..rows {
            for c in 0..columns {
                data.set_value(Some((s * r + c) as f64), s, r, c);
            }
        }
    }
    data
}

fn bench_set_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyed3d_set_value");

    for size in [4, 16, 64] {
        group.throughput(Throughput::Elements((4 * size * size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| build(black_box(4), black_box(size), black_box(size)));
        });
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyed3d_lookup");

    for size in [16, 64] {
        let data = build(4, size, size);
        group.bench_with_input(BenchmarkId::new("by_index", size), &size, |b, &size| {
            b.iter(|| {
                let mut sum = 0.0;
                for r in 0..size {
                    sum += data.double_value(3, r, size - 1).unwrap_or(0.0);
                }
                sum
            });
        });
        group.bench_with_input(BenchmarkId::new("by_key", size), &size, |b, &size| {
            b.iter(|| {
                let mut sum = 0.0;
                for r in 0..size {
                    sum += data.double_value_by_key(&3, &r, &(size - 1)).unwrap_or(0.0);
                }
                sum
            });
        });
        group.bench_with_input(BenchmarkId::new("value_range", size), &size, |b, _| {
            b.iter(|| find_value_range(black_box(&data)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_set_value, bench_lookup);
criterion_main!(benches);
