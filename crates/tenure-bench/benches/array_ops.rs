//! Criterion micro-benchmarks for `DynArray` growth, access, and clone.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tenure_array::DynArray;
use tenure_bench::{mixed_array_ops, run_array_ops};

/// Benchmark: 1K pushes into an empty array (10 doubling reallocations).
fn bench_push_from_empty(c: &mut Criterion) {
    c.bench_function("array_push_1k_from_empty", |b| {
        b.iter(|| {
            let mut array = DynArray::new();
            for i in 0..1024i32 {
                array.push(black_box(i));
            }
            black_box(array.len());
        });
    });
}

/// Benchmark: 1K pushes into pre-sized storage (no reallocation).
fn bench_push_with_capacity(c: &mut Criterion) {
    c.bench_function("array_push_1k_presized", |b| {
        b.iter(|| {
            let mut array = DynArray::with_capacity(1024);
            for i in 0..1024i32 {
                array.push(black_box(i));
            }
            black_box(array.len());
        });
    });
}

/// Benchmark: deep copy of a 1K-element array.
fn bench_clone_1k(c: &mut Criterion) {
    let source: DynArray<i32> = (0..1024).collect();
    c.bench_function("array_clone_1k", |b| {
        b.iter(|| {
            let copy = source.clone();
            black_box(copy.len());
        });
    });
}

/// Benchmark: checked (`at`) vs unchecked (`get_unchecked`) summation.
fn bench_checked_vs_unchecked(c: &mut Criterion) {
    let array: DynArray<i64> = (0..4096).collect();

    c.bench_function("array_sum_checked", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for i in 0..array.len() {
                sum += array.at(i).expect("in range");
            }
            black_box(sum);
        });
    });

    c.bench_function("array_sum_unchecked", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for i in 0..array.len() {
                // SAFETY: `i` ranges over `0..len`.
                sum += unsafe { array.get_unchecked(i) };
            }
            black_box(sum);
        });
    });
}

/// Benchmark: seeded mixed push/pop/read workload.
fn bench_mixed_ops(c: &mut Criterion) {
    let ops = mixed_array_ops(42, 10_000);
    c.bench_function("array_mixed_ops_10k", |b| {
        b.iter(|| black_box(run_array_ops(&ops)));
    });
}

criterion_group!(
    benches,
    bench_push_from_empty,
    bench_push_with_capacity,
    bench_clone_1k,
    bench_checked_vs_unchecked,
    bench_mixed_ops
);
criterion_main!(benches);
