//! Benchmarks for block gain.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use stompbox::dsp::amplify;

use crate::BLOCK_SIZES;

pub fn bench_amplify(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/amplify");

    for &size in BLOCK_SIZES {
        let signal: Vec<f32> = (0..size)
            .map(|i| (i as f32 / size as f32) * 2.0 - 1.0)
            .collect();

        let mut buffer = signal.clone();
        group.bench_with_input(BenchmarkId::new("apply_gain", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&signal);
                amplify::apply_gain(black_box(&mut buffer), black_box(0.5))
            })
        });
    }

    group.finish();
}
