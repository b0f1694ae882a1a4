use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use growable_bitset::Bitset;
use std::collections::BTreeSet;

/// Simple LCG for reproducible "random" indices
fn lcg_indices(count: usize, max: usize) -> Vec<usize> {
    let a = 1664525u64;
    let c = 1013904223u64;
    let mut state = 42u64;
    (0..count)
        .map(|_| {
            state = a.wrapping_mul(state).wrapping_add(c);
            (state >> 16) as usize % max
        })
        .collect()
}

/// Benchmark building from sequential indices
fn bench_build_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_sequential");

    for size in [1_000, 10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::new("Bitset", size), size, |b, &size| {
            b.iter(|| {
                let mut bits = Bitset::new();
                for i in 0..size {
                    bits.set_bit(i);
                }
                black_box(bits)
            });
        });

        group.bench_with_input(BenchmarkId::new("Bitset_presized", size), size, |b, &size| {
            b.iter(|| {
                let mut bits = Bitset::with_width(size);
                for i in 0..size {
                    bits.set_existing_bit(i);
                }
                black_box(bits)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), size, |b, &size| {
            b.iter(|| {
                let mut btree = BTreeSet::new();
                for i in 0..size {
                    btree.insert(i);
                }
                black_box(btree)
            });
        });
    }

    group.finish();
}

/// Benchmark full iteration over set bits
fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");
    let indices = lcg_indices(10_000, 1_000_000);

    let bits: Bitset = indices.iter().copied().collect();
    let btree: BTreeSet<usize> = indices.iter().copied().collect();

    group.bench_function("Bitset_ones", |b| {
        b.iter(|| black_box(bits.ones().sum::<usize>()));
    });

    group.bench_function("Bitset_next_set_chain", |b| {
        b.iter(|| {
            let mut sum = 0usize;
            let mut i = bits.next_set_bit(0);
            while i != growable_bitset::NON_INDEX {
                sum += i;
                i = bits.next_set_bit(i + 1);
            }
            black_box(sum)
        });
    });

    group.bench_function("BTreeSet", |b| {
        b.iter(|| black_box(btree.iter().sum::<usize>()));
    });

    group.finish();
}

/// Benchmark OR / AND / AND-NOT with borrowed vs owned operands
fn bench_set_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_algebra");

    for width in [1_024, 65_536, 1_048_576].iter() {
        let x: Bitset = lcg_indices(width / 8, *width).into_iter().collect();
        let y: Bitset = lcg_indices(width / 8, width / 2).into_iter().collect();

        group.bench_with_input(BenchmarkId::new("or_borrowed", width), width, |b, _| {
            b.iter(|| black_box(&x | &y));
        });

        group.bench_with_input(BenchmarkId::new("or_owned_lhs", width), width, |b, _| {
            b.iter_batched(
                || x.clone(),
                |lhs| black_box(lhs | &y),
                criterion::BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("and_borrowed", width), width, |b, _| {
            b.iter(|| black_box(&x & &y));
        });

        group.bench_with_input(BenchmarkId::new("and_not_borrowed", width), width, |b, _| {
            b.iter(|| black_box(x.and_not(&y)));
        });

        group.bench_with_input(BenchmarkId::new("and_not_assign", width), width, |b, _| {
            b.iter_batched(
                || x.clone(),
                |mut lhs| {
                    lhs.and_not_assign(&y);
                    black_box(lhs)
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

/// Benchmark width-insensitive equality
fn bench_equality(c: &mut Criterion) {
    let mut group = c.benchmark_group("equality");

    let x: Bitset = lcg_indices(1_000, 100_000).into_iter().collect();
    let mut padded = x.clone();
    padded.ensure_width(x.width() * 4);

    group.bench_function("same_width", |b| {
        let y = x.clone();
        b.iter(|| black_box(x == y));
    });

    group.bench_function("trailing_zero_words", |b| {
        b.iter(|| black_box(x == padded));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_build_sequential,
    bench_iterate,
    bench_set_algebra,
    bench_equality
);
criterion_main!(benches);
