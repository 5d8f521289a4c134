use criterion::{Criterion, criterion_group, criterion_main};
use num_bigint::BigInt;
use std::hint::black_box;
use threshold_recovery::primitives::decode;
use threshold_recovery::recovery::shamirsecretsharing::{
    Polynomial, interpolate_constant_term, split,
};

pub fn bench_interpolation(c: &mut Criterion) {
    let coeffs = (1..=16)
        .map(|i| BigInt::from(i) * BigInt::from(u64::MAX) + BigInt::from(i * 7919))
        .collect();
    let points = split(&Polynomial::new(coeffs), 16).unwrap();

    c.bench_function("interpolate 16 points", |b| {
        b.iter(|| interpolate_constant_term(black_box(&points)))
    });
}

pub fn bench_decode(c: &mut Criterion) {
    let value = "z".repeat(256);

    c.bench_function("decode 256 base-36 digits", |b| {
        b.iter(|| decode(black_box(&value), 36))
    });
}

criterion_group!(benches, bench_interpolation, bench_decode);
criterion_main!(benches);
