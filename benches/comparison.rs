//! Benchmark comparison between `BitArray` and bitvec

use bitvec::prelude::*;
use core::hint::black_box;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use smol_bitarray::BitArray;

// Widths on both sides of the inline capacity
const SIZES: &[usize] = &[10, 64, 100, 500, 1000, 5000, 10000];

fn smol_pattern(size: usize, step: usize) -> BitArray {
    (0..size).map(|i| i % step == 0).collect()
}

fn bitvec_pattern(size: usize, step: usize) -> BitVec<u64, Lsb0> {
    (0..size).map(|i| i % step == 0).collect()
}

fn bench_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("creation");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("BitArray", size), &size, |b, &size| {
            b.iter(|| {
                let mut array = BitArray::<1>::new(size);
                black_box(&mut array);
            });
        });

        group.bench_with_input(BenchmarkId::new("BitVec", size), &size, |b, &size| {
            b.iter(|| {
                let mut bitvec = bitvec![u64, Lsb0; 0; size];
                black_box(&mut bitvec);
            });
        });
    }

    group.finish();
}

fn bench_bitwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("xor_assign");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        let smol_rhs = smol_pattern(size, 3);
        let bv_rhs = bitvec_pattern(size, 3);

        group.bench_with_input(BenchmarkId::new("BitArray", size), &smol_rhs, |b, rhs| {
            let mut acc = smol_pattern(size, 2);
            b.iter(|| {
                acc ^= rhs;
                black_box(&acc);
            });
        });

        group.bench_with_input(BenchmarkId::new("BitVec", size), &bv_rhs, |b, rhs| {
            let mut acc = bitvec_pattern(size, 2);
            b.iter(|| {
                acc ^= rhs.as_bitslice();
                black_box(&acc);
            });
        });
    }

    group.finish();
}

fn bench_not(c: &mut Criterion) {
    let mut group = c.benchmark_group("not");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        let smol = smol_pattern(size, 2);
        let bv = bitvec_pattern(size, 2);

        group.bench_with_input(BenchmarkId::new("BitArray", size), &smol, |b, array| {
            b.iter(|| black_box(!array));
        });

        group.bench_with_input(BenchmarkId::new("BitVec", size), &bv, |b, bitvec| {
            b.iter(|| black_box(!bitvec.clone()));
        });
    }

    group.finish();
}

fn bench_shift(c: &mut Criterion) {
    let mut group = c.benchmark_group("shift_left");

    for &size in &[100, 1000, 10000] {
        group.throughput(Throughput::Elements(size as u64));

        let smol = smol_pattern(size, 5);
        let bv = bitvec_pattern(size, 5);

        group.bench_with_input(BenchmarkId::new("BitArray", size), &smol, |b, array| {
            b.iter_batched_ref(
                || array.clone(),
                |array| {
                    black_box(array.shift_left(7));
                },
                criterion::BatchSize::SmallInput,
            );
        });

        // bitvec's shift_right moves bits toward higher indices
        group.bench_with_input(BenchmarkId::new("BitVec", size), &bv, |b, bitvec| {
            b.iter_batched_ref(
                || bitvec.clone(),
                |bitvec| {
                    bitvec.shift_right(7);
                    black_box(bitvec);
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_get_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_bit");

    for &size in &[100, 1000, 10000] {
        group.throughput(Throughput::Elements(1000));

        let smol = smol_pattern(size, 3);
        let bv = bitvec_pattern(size, 3);
        let test_indices: Vec<usize> = (0..1000).map(|i| i % size).collect();

        group.bench_with_input(
            BenchmarkId::new("BitArray", size),
            &(&smol, &test_indices),
            |b, (array, indices)| {
                b.iter(|| {
                    let mut sum = 0;
                    for &i in *indices {
                        if array.get(i) {
                            sum += 1;
                        }
                    }
                    black_box(sum);
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BitVec", size),
            &(&bv, &test_indices),
            |b, (bitvec, indices)| {
                b.iter(|| {
                    let mut sum = 0;
                    for &i in *indices {
                        if bitvec[i] {
                            sum += 1;
                        }
                    }
                    black_box(sum);
                });
            },
        );
    }

    group.finish();
}

fn bench_count_ones(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_ones");

    for &size in &[100, 1000, 10000] {
        let smol = smol_pattern(size, 2);
        let bv = bitvec_pattern(size, 2);

        group.bench_with_input(BenchmarkId::new("BitArray", size), &smol, |b, array| {
            b.iter(|| black_box(array.count_ones()));
        });

        group.bench_with_input(BenchmarkId::new("BitVec", size), &bv, |b, bitvec| {
            b.iter(|| black_box(bitvec.count_ones()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_creation,
    bench_bitwise,
    bench_not,
    bench_shift,
    bench_get_operations,
    bench_count_ones,
);
criterion_main!(benches);
