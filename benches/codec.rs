use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use float8::core::f8::{F8E4M3, F8E5M2};

fn inputs() -> Vec<f32> {
    // Mixed magnitudes spanning the subnormal, normal, and overflow ranges
    (0..4096)
        .map(|i| {
            let x = (i as f32 - 2048.0) * 0.173;
            x * (1.0 + (i % 17) as f32)
        })
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let values = inputs();

    c.bench_function("encode_e4m3", |b| {
        b.iter(|| {
            for &v in &values {
                black_box(F8E4M3::from_f32(black_box(v)));
            }
        })
    });

    c.bench_function("encode_e5m2", |b| {
        b.iter(|| {
            for &v in &values {
                black_box(F8E5M2::from_f32(black_box(v)));
            }
        })
    });
}

fn bench_decode(c: &mut Criterion) {
    let bytes: Vec<u8> = (0..=255).collect();

    c.bench_function("decode_e4m3", |b| {
        b.iter(|| {
            for &byte in &bytes {
                black_box(F8E4M3::from_bits(black_box(byte)).to_f32());
            }
        })
    });

    c.bench_function("decode_e5m2", |b| {
        b.iter(|| {
            for &byte in &bytes {
                black_box(F8E5M2::from_bits(black_box(byte)).to_f32());
            }
        })
    });
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
