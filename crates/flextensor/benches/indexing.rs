//! Benchmarks for labeled index expressions.
//!
//! Run with:
//! ```bash
//! cargo bench --bench indexing
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use flextensor::{ix, AxisArg, DenseND, FlexTensor};
use std::hint::black_box;

fn tensor(shape: &[usize]) -> FlexTensor<f64> {
    let names = ["a", "b", "c", "d"];
    FlexTensor::new(DenseND::<f64>::ones(shape), names[..shape.len()].iter().copied()).unwrap()
}

/// Reordering by name against the equivalent positional permute
fn bench_reorder(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder");
    let t = tensor(&[32, 32, 32, 32]);
    group.throughput(Throughput::Elements(t.size() as u64));

    let args = ix!["d", .., "a"];
    group.bench_function("labeled", |b| {
        b.iter(|| black_box(t.index(black_box(&args)).unwrap()));
    });
    group.bench_function("positional", |b| {
        b.iter(|| black_box(t.data().permute(black_box(&[3, 1, 2, 0])).unwrap()));
    });

    group.finish();
}

/// Flatten groups of increasing outer size
fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");

    for outer in [4usize, 16, 64] {
        let t = tensor(&[outer, 16, 32]);
        group.throughput(Throughput::Elements(t.size() as u64));
        let args: Vec<AxisArg> = ix![["a", "c"], "b"];

        group.bench_with_input(BenchmarkId::from_parameter(outer), &t, |b, t| {
            b.iter(|| black_box(t.index(black_box(&args)).unwrap()));
        });
    }

    group.finish();
}

/// Slicing, new axes and elementwise label merge in one pipeline
fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let y = tensor(&[256]);
    let x = FlexTensor::new(DenseND::<f64>::ones(&[256]), ["x"]).unwrap();

    group.bench_function("outer_product", |b| {
        b.iter(|| {
            let column = y.index(ix!["a", ""]).unwrap();
            let row = x.index(ix!["", "x"]).unwrap();
            black_box((&column * &row).unwrap())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_reorder, bench_flatten, bench_pipeline);
criterion_main!(benches);
