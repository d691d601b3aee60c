//! Benchmarks for the buffer primitives behind labeled indexing.
//!
//! Permute, per-axis slicing and the split/concatenate pair are what every
//! labeled index expression lowers to.
//!
//! Run with:
//! ```bash
//! cargo bench --bench reshape_permute
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use flextensor_core::{AxisSlice, DenseND};
use std::hint::black_box;

/// Benchmark permute followed by a contiguous copy for various shapes
fn bench_permute(c: &mut Criterion) {
    let mut group = c.benchmark_group("permute");

    let test_cases = vec![
        ("2d_transpose", vec![500, 500], vec![1, 0]),
        ("3d_cycle", vec![60, 60, 60], vec![2, 0, 1]),
        ("3d_reverse", vec![60, 60, 60], vec![2, 1, 0]),
        ("4d_swap_01", vec![20, 20, 20, 20], vec![1, 0, 2, 3]),
    ];

    for (name, shape, perm) in test_cases {
        let tensor = DenseND::<f64>::ones(&shape);
        let total: usize = shape.iter().product();
        group.throughput(Throughput::Elements(total as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(&tensor, &perm),
            |b, (tensor, perm)| {
                b.iter(|| {
                    let permuted = tensor.permute(black_box(perm)).unwrap();
                    let flat = permuted.reshape(&[total]).unwrap();
                    black_box(flat);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark index and stepped-range slicing
fn bench_slice_axis(c: &mut Criterion) {
    let mut group = c.benchmark_group("slice_axis");
    let tensor = DenseND::<f64>::ones(&[100, 100, 100]);

    group.bench_function("index_middle", |b| {
        b.iter(|| {
            let sliced = tensor.slice_axis(1, black_box(&AxisSlice::Index(50))).unwrap();
            black_box(sliced);
        });
    });

    let stepped = AxisSlice::range(None, None, 2);
    group.bench_function("stepped_last", |b| {
        b.iter(|| {
            let sliced = tensor.slice_axis(2, black_box(&stepped)).unwrap();
            black_box(sliced);
        });
    });

    group.finish();
}

/// Benchmark merging two axes through unit splits and concatenation
fn bench_split_concat_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_concat_merge");

    for outer in [4usize, 16, 64] {
        let tensor = DenseND::<f64>::ones(&[outer, 32, 64]);
        group.throughput(Throughput::Elements((outer * 32 * 64) as u64));

        group.bench_with_input(BenchmarkId::from_parameter(outer), &tensor, |b, tensor| {
            b.iter(|| {
                let blocks = tensor.split(outer, 0).unwrap();
                let joined = DenseND::concatenate(&blocks, 2).unwrap();
                black_box(joined.remove_axis(0).unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_permute,
    bench_slice_axis,
    bench_split_concat_merge
);
criterion_main!(benches);
