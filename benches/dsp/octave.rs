//! Benchmarks for the pitch shifters.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use stompbox::dsp::octave::{self, OctaveDown};

use crate::BLOCK_SIZES;

pub fn bench_octave(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/octave");

    for &size in BLOCK_SIZES {
        let input: Vec<f32> = (0..size).map(|i| (i as f32 * 0.1).sin()).collect();
        let mut output = vec![0.0f32; size];

        for octaves in [1, 3] {
            let mut divider = OctaveDown::ring_modulated(octaves);
            let mut buffer = input.clone();
            group.bench_with_input(
                BenchmarkId::new(format!("down_{}", octaves), size),
                &size,
                |b, _| {
                    b.iter(|| {
                        buffer.copy_from_slice(&input);
                        divider.render(black_box(&mut buffer));
                    })
                },
            );
        }

        group.bench_with_input(BenchmarkId::new("up_box", size), &size, |b, _| {
            b.iter(|| octave::octave_up(black_box(&input), black_box(&mut output)))
        });

        group.bench_with_input(BenchmarkId::new("down_stretch", size), &size, |b, _| {
            b.iter(|| {
                octave::linear_resample(black_box(&input[..size / 2]), black_box(&mut output))
            })
        });
    }

    group.finish();
}
