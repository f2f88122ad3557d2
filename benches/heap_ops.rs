//! Micro-operation benchmarks for IndexedMaxHeap.
//!
//! Run with: `cargo bench --bench heap_ops`
//!
//! Measures per-operation latency for push, pop, update_priority and
//! remove_at, with `std::collections::BinaryHeap` as a baseline where it has
//! an equivalent operation.

use std::collections::BinaryHeap;
use std::hint::black_box;
use std::time::Instant;

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use heapkit::ds::{HeapIndex, IndexedMaxHeap, KeyedLocator};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const SIZES: [usize; 3] = [1_024, 16_384, 262_144];
const OPS: u64 = 10_000;

fn random_values(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random::<u64>()).collect()
}

// ============================================================================
// Push / Pop
// ============================================================================

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");
    for size in SIZES {
        let values = random_values(size, 42);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("indexed", size), &values, |b, values| {
            b.iter(|| {
                let mut heap = IndexedMaxHeap::new();
                for &v in values {
                    black_box(heap.push(v));
                }
                heap
            })
        });

        group.bench_with_input(BenchmarkId::new("std", size), &values, |b, values| {
            b.iter(|| {
                let mut heap = BinaryHeap::new();
                for &v in values {
                    heap.push(v);
                }
                heap
            })
        });
    }
    group.finish();
}

fn bench_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("pop_all");
    for size in SIZES {
        let values = random_values(size, 7);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("indexed", size), &values, |b, values| {
            b.iter_batched(
                || IndexedMaxHeap::from_vec(values.clone()),
                |mut heap| {
                    while let Ok(v) = heap.pop() {
                        black_box(v);
                    }
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("std", size), &values, |b, values| {
            b.iter_batched(
                || BinaryHeap::from(values.clone()),
                |mut heap| {
                    while let Some(v) = heap.pop() {
                        black_box(v);
                    }
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

// ============================================================================
// Handle Operations (ns/op)
// ============================================================================

fn bench_update_priority(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_priority_ns");
    group.throughput(Throughput::Elements(OPS));
    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter_custom(|iters| {
                let mut heap = IndexedMaxHeap::from_vec(random_values(size, 11));
                let mut rng = SmallRng::seed_from_u64(99);
                let start = Instant::now();
                for _ in 0..iters {
                    for _ in 0..OPS {
                        let raw = rng.random_range(1..=heap.len());
                        let idx = HeapIndex::new(raw).unwrap();
                        black_box(heap.update_priority(idx, rng.random::<u64>()).unwrap());
                    }
                }
                start.elapsed()
            })
        });
    }
    group.finish();
}

fn bench_remove_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_then_push_ns");
    group.throughput(Throughput::Elements(OPS));
    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter_custom(|iters| {
                let mut heap = IndexedMaxHeap::from_vec(random_values(size, 13));
                let mut rng = SmallRng::seed_from_u64(5);
                let start = Instant::now();
                for _ in 0..iters {
                    for _ in 0..OPS {
                        let raw = rng.random_range(1..=heap.len());
                        let idx = HeapIndex::new(raw).unwrap();
                        let v = heap.remove_at(idx).unwrap();
                        black_box(heap.push(v));
                    }
                }
                start.elapsed()
            })
        });
    }
    group.finish();
}

// ============================================================================
// Observer Overhead
// ============================================================================

fn bench_locator_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("locator_push_pop");
    let size = 16_384;
    let values: Vec<u64> = (0..size as u64).collect();
    group.throughput(Throughput::Elements(size as u64));

    group.bench_function("noop_observer", |b| {
        b.iter(|| {
            let mut heap = IndexedMaxHeap::with_capacity(size);
            heap.extend(values.iter().copied());
            while let Ok(v) = heap.pop() {
                black_box(v);
            }
        })
    });

    group.bench_function("keyed_locator", |b| {
        b.iter(|| {
            let locator = KeyedLocator::with_capacity(size, |v: &u64| *v);
            let mut heap = IndexedMaxHeap::with_capacity_and_observer(size, locator);
            heap.extend(values.iter().copied());
            while let Ok(v) = heap.pop() {
                black_box(v);
            }
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_push,
    bench_pop,
    bench_update_priority,
    bench_remove_at,
    bench_locator_overhead
);
criterion_main!(benches);
