//! Benchmarks for buffer mixing.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use stompbox::dsp::mix;

use crate::BLOCK_SIZES;

pub fn bench_mix(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/mix");

    for &size in BLOCK_SIZES {
        let signal_a: Vec<f32> = (0..size).map(|i| (i as f32 * 0.1).sin()).collect();
        let signal_b: Vec<f32> = (0..size).map(|i| (i as f32 * 0.15).cos()).collect();
        let mut output = vec![0.0f32; size];

        // Wet/dry crossfade
        group.bench_with_input(BenchmarkId::new("crossfade", size), &size, |b, _| {
            b.iter(|| {
                mix::mix(
                    black_box(&signal_a),
                    black_box(&signal_b),
                    black_box(0.5),
                    black_box(&mut output),
                );
            })
        });

        group.bench_with_input(BenchmarkId::new("sum", size), &size, |b, _| {
            b.iter(|| {
                mix::sum(
                    black_box(&signal_a),
                    black_box(&signal_b),
                    black_box(&mut output),
                );
            })
        });

        group.bench_with_input(BenchmarkId::new("max", size), &size, |b, _| {
            b.iter(|| {
                mix::max(
                    black_box(&signal_a),
                    black_box(&signal_b),
                    black_box(&mut output),
                );
            })
        });
    }

    group.finish();
}
