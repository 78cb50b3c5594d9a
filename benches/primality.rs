//! Primality predicate benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use primecheck::is_prime;

fn bench_is_prime(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_prime");

    // Smallest prime: the divisor loop never runs
    group.bench_function("smallest_prime", |b| b.iter(|| is_prime(black_box(2))));

    // Even composite: rejected by the first divisor
    group.bench_function("even_composite", |b| {
        b.iter(|| is_prime(black_box(1_000_000)))
    });

    // Prime square: worst case for the inclusive bound
    group.bench_function("prime_square", |b| {
        b.iter(|| is_prime(black_box(104_729 * 104_729)))
    });

    // Mid-size prime: full O(sqrt n) divisor sweep
    group.bench_function("mid_prime", |b| {
        b.iter(|| is_prime(black_box(1_000_000_007)))
    });

    group.finish();
}

criterion_group!(benches, bench_is_prime);
criterion_main!(benches);
