use crate::{
    dsp::meter::{hi_low, rms, rms_centered},
    graph::node::Transform,
};

/*
Telemetry Taps
==============

A tap is transparent to the audio: it copies its input block to the output
untouched, and as a side effect measures the block and hands the result to
a publisher. The publisher is normally a closure from `ControlBridge` that
stores into a lock-free cell, so publishing never blocks the audio thread.

    input ──┬──────────────────────────→ output
            └──→ measure ──→ publish(value)

Taps sit anywhere in a chain. Put them last to meter what the listener
hears. Empty blocks carry nothing to measure and publish nothing.
*/

/// Publishes the RMS level of each block.
pub struct VolumeTap<P> {
    publish: P,
    measure: fn(&[f32]) -> f32,
}

impl<P> VolumeTap<P>
where
    P: FnMut(f32) + Send,
{
    /// RMS of the raw samples, DC included.
    pub fn new(publish: P) -> Self {
        Self {
            publish,
            measure: rms,
        }
    }

    /// RMS after removing the block mean.
    pub fn centered(publish: P) -> Self {
        Self {
            publish,
            measure: rms_centered,
        }
    }
}

impl<P> Transform for VolumeTap<P>
where
    P: FnMut(f32) + Send,
{
    fn process(&mut self, input: &[f32], output: &mut [f32]) {
        output[..input.len()].copy_from_slice(input);
        if !input.is_empty() {
            (self.publish)((self.measure)(input));
        }
    }
}

/// Publishes the largest and smallest sample of each block.
pub struct HiLowTap<P> {
    publish: P,
}

impl<P> HiLowTap<P>
where
    P: FnMut(f32, f32) + Send,
{
    pub fn new(publish: P) -> Self {
        Self { publish }
    }
}

impl<P> Transform for HiLowTap<P>
where
    P: FnMut(f32, f32) + Send,
{
    fn process(&mut self, input: &[f32], output: &mut [f32]) {
        output[..input.len()].copy_from_slice(input);
        if let Some((hi, low)) = hi_low(input) {
            (self.publish)(hi, low);
        }
    }
}
