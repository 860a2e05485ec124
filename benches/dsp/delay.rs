//! Benchmarks for the feedback delay line.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use stompbox::dsp::Delay;

use crate::BLOCK_SIZES;

pub fn bench_delay(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/delay");

    // Buffer lengths in samples
    let capacities: &[usize] = &[
        480,   // 10ms at 48kHz
        4800,  // 100ms at 48kHz, the default
        48000, // 1 second at 48kHz
    ];

    for &size in BLOCK_SIZES {
        let input: Vec<f32> = (0..size).map(|i| (i as f32 * 0.1).sin()).collect();

        for &capacity in capacities {
            let mut delay = Delay::with_capacity(capacity);
            let mut buffer = input.clone();
            group.bench_with_input(
                BenchmarkId::new(format!("render_{}", capacity), size),
                &size,
                |b, _| {
                    b.iter(|| {
                        buffer.copy_from_slice(&input);
                        delay.render(black_box(&mut buffer));
                    })
                },
            );
        }
    }

    group.finish();
}
