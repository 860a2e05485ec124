//! Benchmarks for the default pedal board.

use std::{hint::black_box, sync::Arc};

use criterion::{BenchmarkId, Criterion};
use stompbox::{
    combine,
    control::ControlBridge,
    dsp::{
        distortion::{clip, fuzz},
        mix::sum,
        Delay, Drone, HighPass, OctaveDown,
    },
    graph::{
        amplify::ParamGain,
        meter::{HiLowTap, VolumeTap},
        node::Identity,
        pitch::OctaveUp,
        Chain, SampleFnExt, Transform, TransformExt,
    },
    io::SoundLoop,
    BlockProcessor,
};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

fn pedal(bridge: &Arc<ControlBridge>) -> impl Transform + 'static {
    combine!(
        HighPass::new(SAMPLE_RATE, 250.0),
        Delay::new(SAMPLE_RATE),
        fuzz,
        clip,
    )
    .iterate()
    .through(
        OctaveDown::ring_modulated(1)
            .iterate()
            .wet_dry(bridge.wet_mix_source()),
    )
    .through(Identity.split(Drone::new(SAMPLE_RATE).iterate(), sum))
    .through(
        Chain::new()
            .with(ParamGain::new(bridge.gain_source()))
            .with(clip.iterate())
            .with(VolumeTap::new(bridge.volume_publisher()))
            .with(HiLowTap::new(bridge.hi_low_publisher())),
    )
}

fn guitar_loop() -> SoundLoop {
    let samples = (0..SAMPLE_RATE as usize)
        .map(|i| (std::f32::consts::TAU * 110.0 * i as f32 / SAMPLE_RATE).sin() * 0.6)
        .collect();
    SoundLoop::from_samples(samples, SAMPLE_RATE as u32).expect("loop is not empty")
}

pub fn bench_pedal(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/pedal");

    for &size in BLOCK_SIZES {
        // Transform only, block already in hand
        let bridge = Arc::new(ControlBridge::new());
        let mut board = pedal(&bridge);
        let input: Vec<f32> = (0..size).map(|i| (i as f32 * 0.05).sin()).collect();
        let mut output = vec![0.0f32; size];
        group.bench_with_input(BenchmarkId::new("transform", size), &size, |b, _| {
            b.iter(|| board.process(black_box(&input), black_box(&mut output)))
        });

        // With octave up appended
        let bridge = Arc::new(ControlBridge::new());
        let mut board = pedal(&bridge).through(OctaveUp);
        group.bench_with_input(BenchmarkId::new("transform_octave_up", size), &size, |b, _| {
            b.iter(|| board.process(black_box(&input), black_box(&mut output)))
        });

        // Full callback body: stereo device buffer, 64 frame blocks
        let bridge = Arc::new(ControlBridge::new());
        let mut processor =
            BlockProcessor::new(64, pedal(&bridge), guitar_loop(), Arc::clone(&bridge));
        let mut device_buffer = vec![0.0f32; size * 2];
        group.bench_with_input(BenchmarkId::new("callback_stereo", size), &size, |b, _| {
            b.iter(|| processor.fill_interleaved(black_box(&mut device_buffer), 2))
        });
    }

    group.finish();
}
