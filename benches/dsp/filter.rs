//! Benchmarks for the one-pole high pass.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use stompbox::dsp::HighPass;

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in BLOCK_SIZES {
        // Ramp with a DC offset
        let input: Vec<f32> = (0..size)
            .map(|i| (i as f32 / size as f32) * 2.0 - 0.5)
            .collect();

        let mut filter = HighPass::new(SAMPLE_RATE, 250.0);
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("high_pass", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                filter.render(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
