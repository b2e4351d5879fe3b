// ============================================================================
// Factorial Strategy Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Strategy Comparison - Sequential vs fan-out vs batched at equal inputs
// 2. Batch Size Sweep - Batched strategy across chunk sizes
// 3. Decorator Overhead - Timed vs bare strategy
//
// Notes:
// - Fan-out spawns one thread per multiplicand; its inputs are kept small
// - Batched runs sequentially up to its batch size (80 by default)
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use factorial_fanout::prelude::*;
use std::hint::black_box;
use std::sync::Arc;

// ============================================================================
// Strategy Comparison
// ============================================================================

fn benchmark_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategies");

    for n in [50u64, 500, 2000].iter() {
        group.bench_with_input(BenchmarkId::new("sequential", n), n, |b, &n| {
            let strategy = Sequential::new();
            b.iter(|| black_box(strategy.factorial(black_box(n))));
        });

        group.bench_with_input(BenchmarkId::new("batched", n), n, |b, &n| {
            let strategy = BatchedFanOut::default();
            b.iter(|| black_box(strategy.factorial(black_box(n))));
        });

        // One thread per multiplicand gets expensive quickly
        if *n <= 500 {
            group.bench_with_input(BenchmarkId::new("fan_out", n), n, |b, &n| {
                let strategy = FanOut::new();
                b.iter(|| black_box(strategy.factorial(black_box(n))));
            });
        }
    }

    group.finish();
}

// ============================================================================
// Batch Size Sweep
// ============================================================================

fn benchmark_batch_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_size");
    let n = 5000u64;

    for batch_size in [20u64, 80, 320, 1280].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            batch_size,
            |b, &batch_size| {
                let strategy = BatchedFanOut::new(batch_size);
                b.iter(|| black_box(strategy.factorial(black_box(n))));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Decorator Overhead
// ============================================================================

fn benchmark_timed_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("timed_overhead");

    group.bench_function("bare", |b| {
        let strategy = Sequential::new();
        b.iter(|| black_box(strategy.factorial(black_box(200))));
    });

    group.bench_function("timed_noop_sink", |b| {
        let strategy = Timed::new(Sequential::new(), Arc::new(NoOpSink));
        b.iter(|| black_box(strategy.factorial(black_box(200))));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_strategies,
    benchmark_batch_sizes,
    benchmark_timed_overhead,
);
criterion_main!(benches);
