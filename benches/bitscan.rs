use bitops_kernel::{bit_scan_forward, iter_bitscan_forward, popcount};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Words from sparse (one set bit) to dense (every bit set)
const MASKS: [(&str, u64); 4] = [
    ("1_bit", 0x0000_0000_0000_0010),
    ("8_bits", 0x0000_0000_0000_FF00),
    ("32_bits", 0xFFFF_0000_0000_FFFF),
    ("64_bits", 0xFFFF_FFFF_FFFF_FFFF),
];

/// De Bruijn scan against the hardware trailing-zero count
fn bench_bit_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("bit_scan_forward");

    for (name, mask) in MASKS {
        group.bench_with_input(BenchmarkId::new("debruijn", name), &mask, |b, &mask| {
            b.iter(|| bit_scan_forward(black_box(mask)));
        });
        group.bench_with_input(BenchmarkId::new("trailing_zeros", name), &mask, |b, &mask| {
            b.iter(|| black_box(mask).trailing_zeros());
        });
    }

    group.finish();
}

/// Sparse-loop popcount against the POPCNT instruction
fn bench_popcount(c: &mut Criterion) {
    let mut group = c.benchmark_group("popcount");

    for (name, mask) in MASKS {
        group.bench_with_input(BenchmarkId::new("clear_lowest", name), &mask, |b, &mask| {
            b.iter(|| popcount(black_box(mask)));
        });
        group.bench_with_input(BenchmarkId::new("count_ones", name), &mask, |b, &mask| {
            b.iter(|| black_box(mask).count_ones());
        });
    }

    group.finish();
}

/// Visiting every set bit of a word
fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate_bits");

    for (name, mask) in MASKS {
        group.bench_with_input(BenchmarkId::new("iter_bitscan_forward", name), &mask, |b, &mask| {
            b.iter(|| iter_bitscan_forward(black_box(mask)).sum::<u32>());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_bit_scan, bench_popcount, bench_iterate);
criterion_main!(benches);
