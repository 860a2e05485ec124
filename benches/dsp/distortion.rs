//! Benchmarks for fuzz, clip and compression.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use stompbox::dsp::distortion::{self, Compressor};

use crate::BLOCK_SIZES;

pub fn bench_distortion(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/distortion");

    for &size in BLOCK_SIZES {
        // Overdriven sine so clip has something to do
        let input: Vec<f32> = (0..size).map(|i| (i as f32 * 0.1).sin() * 1.5).collect();

        // powf per sample, the most expensive of the three
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("fuzz", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                for sample in buffer.iter_mut() {
                    *sample = distortion::fuzz(black_box(*sample));
                }
            })
        });

        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("clip", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                for sample in buffer.iter_mut() {
                    *sample = distortion::clip(black_box(*sample));
                }
            })
        });

        let mut compressor = Compressor::new(0.5);
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("compress", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                for sample in buffer.iter_mut() {
                    *sample = compressor.next_sample(black_box(*sample));
                }
            })
        });
    }

    group.finish();
}
