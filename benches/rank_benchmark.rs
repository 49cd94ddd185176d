// ============================================================================
// Rank Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Integer - Digit-level add and multiply at growing widths
// 2. Seeding - Cached vs uncached middle rank
// 3. Insertion - Append with next, repeated between in one gap
// 4. Codec - Parse and render of rank keys
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lexorank::prelude::*;
use std::hint::black_box;

// ============================================================================
// Integer Benchmarks
// ============================================================================

fn benchmark_integer_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("integer_arithmetic");

    for digits in [8usize, 64, 512].iter() {
        let text: String = "z".repeat(*digits);
        let a = Integer::parse(&text, &BASE36).unwrap();
        let b = Integer::parse(&text[..digits / 2], &BASE36).unwrap();

        group.bench_with_input(BenchmarkId::new("add", digits), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(*a + *b));
        });

        group.bench_with_input(BenchmarkId::new("mul", digits), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(*a * *b));
        });
    }

    group.finish();
}

// ============================================================================
// Seeding Benchmarks
// ============================================================================

fn benchmark_middle(c: &mut Criterion) {
    let mut group = c.benchmark_group("middle");
    let config = RankConfig::default();
    let ranker = Ranker::default();

    group.bench_function("uncached", |b| {
        b.iter(|| black_box(LexoRank::middle(Bucket::Bucket0, &config)));
    });

    group.bench_function("cached", |b| {
        b.iter(|| black_box(ranker.middle(Bucket::Bucket0)));
    });

    group.finish();
}

// ============================================================================
// Insertion Benchmarks
// ============================================================================

fn benchmark_append(c: &mut Criterion) {
    let ranker = Ranker::default();
    let seed = ranker.middle(Bucket::Bucket0);

    c.bench_function("append_next", |b| {
        b.iter(|| black_box(ranker.next(&seed).unwrap()));
    });
}

fn benchmark_between_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("between_chain");
    let ranker = Ranker::default();

    for depth in [1usize, 16, 64].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(depth), depth, |b, &depth| {
            let low = ranker.middle(Bucket::Bucket0);
            let top = ranker.next(&low).unwrap();

            b.iter(|| {
                let mut high = top.clone();
                for _ in 0..depth {
                    high = ranker.between(Some(&low), Some(&high)).unwrap();
                }
                black_box(high)
            });
        });
    }

    group.finish();
}

// ============================================================================
// Codec Benchmarks
// ============================================================================

fn benchmark_codec(c: &mut Criterion) {
    let ranker = Ranker::default();
    let text = "0|i00008:9zk3m1";
    let rank = ranker.parse(text).unwrap();

    c.bench_function("parse", |b| {
        b.iter(|| black_box(ranker.parse(black_box(text)).unwrap()));
    });

    c.bench_function("render", |b| {
        b.iter(|| black_box(rank.to_string()));
    });
}

criterion_group!(
    benches,
    benchmark_integer_arithmetic,
    benchmark_middle,
    benchmark_append,
    benchmark_between_chain,
    benchmark_codec,
);
criterion_main!(benches);
