//! The default pedal board.

use std::sync::Arc;

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
        Chain, SampleFnExt, Transform, TransformExt,
    },
};

/// Removes rumble below roughly 40Hz before the drive stage.
const HIGH_PASS_AMOUNT: f32 = 250.0;

/// Signal path:
///
///   high pass → slapback delay → fuzz → clip
///   → sub octave (wet/dry from the control plane)
///   → + string drone
///   → master gain → clip → meters
pub fn build(bridge: &Arc<ControlBridge>, sample_rate: f32) -> impl Transform + 'static {
    let drive = combine!(
        HighPass::new(sample_rate, HIGH_PASS_AMOUNT),
        Delay::new(sample_rate),
        fuzz,
        clip,
    )
    .iterate();

    let sub_octave = OctaveDown::ring_modulated(1)
        .iterate()
        .wet_dry(bridge.wet_mix_source());

    let drone = Identity.split(Drone::new(sample_rate).iterate(), sum);

    let output = Chain::new()
        .with(ParamGain::new(bridge.gain_source()))
        .with(clip.iterate())
        .with(VolumeTap::new(bridge.volume_publisher()))
        .with(HiLowTap::new(bridge.hi_low_publisher()));

    drive.through(sub_octave).through(drone).through(output)
}
