//! Benchmarks for the ordered linked set.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- remove
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};

use ordered_linked_set::{FixtureConfig, LinkedListTest, OrderedLinkedSet};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Deterministic shuffled values `0..count`
fn shuffled_values(count: usize, seed: u64) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut values: Vec<u64> = (0..count as u64).collect();
    for i in (1..values.len()).rev() {
        let j = rng.gen_range(0..=i);
        values.swap(i, j);
    }
    values
}

fn populated(count: usize) -> OrderedLinkedSet<u64> {
    let mut set = OrderedLinkedSet::with_capacity(count);
    for v in shuffled_values(count, 42) {
        set.insert(v).unwrap();
    }
    set
}

// ============================================================================
// BENCHMARKS
// ============================================================================

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for &size in &[1_000usize, 10_000, 100_000] {
        let values = shuffled_values(size, 7);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter_batched(
                || OrderedLinkedSet::with_capacity(values.len()),
                |mut set| {
                    for &v in values {
                        set.insert(v).unwrap();
                    }
                    black_box(set)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");

    for &size in &[1_000usize, 10_000] {
        let base = populated(size);
        let order = shuffled_values(size, 9);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &order, |b, order| {
            b.iter_batched(
                || base.clone(),
                |mut set| {
                    for v in order {
                        set.remove(v).unwrap();
                    }
                    black_box(set)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let set = populated(100_000);
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    c.bench_function("contains_100k", |b| {
        b.iter(|| {
            let v = rng.gen_range(0..200_000u64);
            black_box(set.contains(&v))
        });
    });
}

fn bench_fixture(c: &mut Criterion) {
    let mut test = LinkedListTest::new(FixtureConfig::default()).unwrap();

    c.bench_function("set_up_and_test_remove", |b| {
        b.iter(|| {
            test.set_up().unwrap();
            test.test_remove().unwrap();
        });
    });
}

criterion_group!(benches, bench_insert, bench_remove, bench_contains, bench_fixture);
criterion_main!(benches);
