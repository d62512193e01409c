//! Benchmark for sequence traversal and partition splitting.
//!
//! Measures the two consumption paths of a mapped sequence: a single
//! sequential pass, and recursive halving down to single-element leaves
//! followed by a drain. The split path exists for divide-and-conquer
//! executors; this benchmark keeps its pure index arithmetic honest.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lazyseq::sequence::Seq;
use std::hint::black_box;

const SIZES: [usize; 2] = [1_000, 100_000];

fn build_sequence(size: usize) -> Seq<i64> {
    Seq::from_collection((0..size as i64).map(|value| value.wrapping_mul(31)))
}

fn bench_sequential_traversal(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sequential_traversal");

    for size in SIZES {
        let sequence = build_sequence(size).map(|value| value.wrapping_add(17));

        group.bench_with_input(
            BenchmarkId::new("for_each", size),
            &sequence,
            |bencher, sequence| {
                bencher.iter(|| {
                    let mut sum = 0_i64;
                    sequence.for_each(|value| sum = sum.wrapping_add(value));
                    black_box(sum)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("iterator", size),
            &sequence,
            |bencher, sequence| {
                bencher.iter(|| {
                    let sum: i64 = sequence.iter().fold(0, i64::wrapping_add);
                    black_box(sum)
                });
            },
        );
    }

    group.finish();
}

fn bench_recursive_split(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("recursive_split");

    for size in SIZES {
        let sequence = build_sequence(size).map(|value| value.wrapping_add(17));

        group.bench_with_input(
            BenchmarkId::new("split_to_leaves_and_drain", size),
            &sequence,
            |bencher, sequence| {
                bencher.iter(|| {
                    let mut sum = 0_i64;
                    let mut stack = vec![sequence.partition()];
                    while let Some(mut partition) = stack.pop() {
                        if let Some(front) = partition.try_split() {
                            stack.push(partition);
                            stack.push(front);
                        } else {
                            partition.for_each_remaining(|value| {
                                sum = sum.wrapping_add(value);
                            });
                        }
                    }
                    black_box(sum)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_sequential_traversal, bench_recursive_split);
criterion_main!(benches);
