//! Pitch shifters as block transforms.

use crate::{
    dsp::{
        filter::HighPass,
        octave::{abs_octave_up, linear_resample, octave_up, OctaveDown},
    },
    graph::{
        combine::{iterate, Combine, Iterate},
        node::{SampleFn, Transform},
    },
};

/// One octave up by box downsampling the block into both halves of the
/// output, the second half phase-flipped, with the seam smoothed.
#[derive(Clone, Copy, Debug, Default)]
pub struct OctaveUp;

impl Transform for OctaveUp {
    fn process(&mut self, input: &[f32], output: &mut [f32]) {
        octave_up(input, &mut output[..input.len()]);
    }
}

/// Octave down by time-stretching: the first half of each block is
/// linearly resampled across the whole output block. The second half of
/// the input is discarded.
#[derive(Clone, Copy, Debug, Default)]
pub struct StretchOctaveDown;

impl Transform for StretchOctaveDown {
    fn process(&mut self, input: &[f32], output: &mut [f32]) {
        let output = &mut output[..input.len()];
        let half = (input.len() / 2).max(1).min(input.len());
        linear_resample(&input[..half], output);
    }
}

/// Full-wave rectifier as a per-sample function.
///
/// Rectifying leaves a DC offset, so this must be followed by a high pass.
/// `AbsOctaveUp::with_high_pass` builds that pairing.
#[derive(Clone, Copy, Debug, Default)]
pub struct AbsOctaveUp;

impl AbsOctaveUp {
    pub fn with_high_pass(sample_rate: f32, cutoff_amount: f32) -> Combine<Self, HighPass> {
        Combine::new(Self, HighPass::new(sample_rate, cutoff_amount))
    }
}

impl SampleFn for AbsOctaveUp {
    #[inline]
    fn tick(&mut self, x: f32) -> f32 {
        abs_octave_up(x)
    }
}

/// Zero-crossing octave down applied across the block.
pub fn octave_down(octaves: u32) -> Iterate<OctaveDown> {
    iterate(OctaveDown::new(octaves))
}
