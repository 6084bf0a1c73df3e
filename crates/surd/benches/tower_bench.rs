//! Benchmarks for the numeric tower.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use surd::prelude::*;

/// Harmonic partial sum 1/1 + 1/2 + ... + 1/n, which keeps denominators growing.
fn harmonic(n: i64) -> Fraction {
    (1..=n).fold(Fraction::zero(), |acc, k| acc + Fraction::from_i64(1, k))
}

fn bench_fraction_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("fraction_add");

    for size in [16, 64, 256] {
        group.bench_with_input(BenchmarkId::new("harmonic", size), &size, |b, &n| {
            b.iter(|| black_box(harmonic(n)))
        });
    }

    group.finish();
}

fn bench_fraction_compare(c: &mut Criterion) {
    let a = harmonic(200);
    let b = harmonic(199) + Fraction::from_i64(1, 201);

    c.bench_function("fraction_cmp_large", |bench| {
        bench.iter(|| black_box(a.cmp(&b)))
    });
}

fn bench_prime_divisors(c: &mut Criterion) {
    let mut group = c.benchmark_group("prime_divisors");

    // 999_983 is prime, so the wheel runs up to its square root.
    for n in [360i64, 720_720, 999_983, 1_000_003 * 999_983] {
        let value = Integer::new(n);
        group.bench_with_input(BenchmarkId::new("factor", n), &value, |b, v| {
            b.iter(|| black_box(v.prime_divisors().count()))
        });
    }

    group.finish();
}

fn bench_root_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("root_new");

    for degree in [2i64, 12, 60, 720] {
        let radicand = Fraction::from_i64(3, 7).raise_to_integer(&Integer::new(degree));
        group.bench_with_input(
            BenchmarkId::new("perfect_power", degree),
            &degree,
            |b, &d| b.iter(|| black_box(Root::new(Integer::new(d), radicand.clone()))),
        );
    }

    group.finish();
}

fn bench_root_multiplication(c: &mut Criterion) {
    let sqrt2 = Root::new(Integer::new(2), Fraction::from(2));
    let cbrt3 = Root::new(Integer::new(3), Fraction::from(3));
    let fifth = Root::new(Integer::new(5), Fraction::from_i64(2, 3));

    c.bench_function("root_mul_mixed_degrees", |b| {
        b.iter(|| black_box(&(&sqrt2 * &cbrt3) * &fifth))
    });
}

criterion_group!(
    benches,
    bench_fraction_arithmetic,
    bench_fraction_compare,
    bench_prime_divisors,
    bench_root_construction,
    bench_root_multiplication
);
criterion_main!(benches);
