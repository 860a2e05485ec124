//! Benchmarks for the driven string.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use stompbox::dsp::Drone;

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_drone(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/drone");

    for &size in BLOCK_SIZES {
        let input: Vec<f32> = (0..size).map(|i| (i as f32 * 0.05).sin()).collect();

        let mut drone = Drone::new(SAMPLE_RATE);
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("render", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                drone.render(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
