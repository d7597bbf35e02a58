use criterion::{criterion_group, criterion_main, Criterion};
use sparkle_suite::permutation::sparkle;
use std::hint::black_box;

pub fn bench_sparkle256(c: &mut Criterion) {
    let mut state = [0u32; 8];
    c.bench_function("sparkle256 7 steps", |b| {
        b.iter(|| sparkle(black_box(&mut state), black_box(7)))
    });
}

pub fn bench_sparkle512(c: &mut Criterion) {
    let mut state = [0u32; 16];
    c.bench_function("sparkle512 12 steps", |b| {
        b.iter(|| sparkle(black_box(&mut state), black_box(12)))
    });
}

criterion_group!(benches, bench_sparkle256, bench_sparkle512);
criterion_main!(benches);
