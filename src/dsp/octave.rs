//! Octave shifting primitives.

/*
Octave Down: Zero-Crossing Subdivision
======================================

A periodic input crosses zero twice per cycle. Counting those crossings and
flipping a square wave every 2^octaves crossings yields a square wave at
1 / 2^octaves of the input frequency:

    input  (period P):   +  -  +  -  +  -  +  -
    crossings:            ^  ^  ^  ^  ^  ^  ^
    octaves = 1:         [ +1  +1 ][ -1  -1 ][ +1 ...      period 2P
    octaves = 2:         [ +1  +1  +1  +1 ][ -1 ...        period 4P

State is a single signed counter: its sign is the current output polarity,
its magnitude the number of crossings left before the next flip. The counter
is seeded from the sign of the first non-zero input. Exact zeros are not a
sign, so a signal resting on zero does not produce crossings.

The bare square wave is full scale regardless of input level. The ring
modulated variant multiplies it by the input sample instead, so the sub
octave follows the player's dynamics.

Octave Up: Box Downsample + Phase Flip
======================================

Averaging adjacent pairs squeezes a whole block into half a block, which
plays the same material back twice as fast (one octave up):

    in:   [ a  b  c  d  e  f  g  h ]
    half: [ (a+b)/2  (c+d)/2  (e+f)/2  (g+h)/2 ]
    out:  [ half..., -half... ]

The second copy is negated for effect. Where the two copies meet there is a
jump, so the two samples just after the seam are replaced by a linear ramp
between their outer neighbours (weights 2/3,1/3 and 1/3,2/3).

Full-wave rectification (|x|) is a cheaper octave-up: folding the negative
half cycles up doubles the fundamental. It adds a DC offset, so a high pass
has to follow it.
*/

use crate::dsp::distortion::sign;

const MAX_OCTAVES: u32 = 8;

pub struct OctaveDown {
    span: i32,
    state: i32,
    last_sign: f32,
    ring_modulated: bool,
}

impl OctaveDown {
    /// Bare ±1 square wave `octaves` below the input. Clamped to 1..=8.
    pub fn new(octaves: u32) -> Self {
        let octaves = octaves.clamp(1, MAX_OCTAVES);
        Self {
            span: 1 << octaves,
            state: 0,
            last_sign: 0.0,
            ring_modulated: false,
        }
    }

    /// Square wave multiplied by the input sample.
    pub fn ring_modulated(octaves: u32) -> Self {
        Self {
            ring_modulated: true,
            ..Self::new(octaves)
        }
    }

    pub fn octaves(&self) -> u32 {
        self.span.trailing_zeros()
    }

    /// Signed crossing counter; positive while the output is high.
    pub fn state(&self) -> i32 {
        self.state
    }

    #[inline]
    pub fn next_sample(&mut self, input: f32) -> f32 {
        let s = sign(input);
        if s != 0.0 {
            if self.state == 0 {
                self.state = s as i32 * self.span;
            } else if self.last_sign != 0.0 && s != self.last_sign {
                let polarity = self.state.signum();
                self.state -= polarity;
                if self.state == 0 {
                    self.state = -polarity * self.span;
                }
            }
            self.last_sign = s;
        }

        let square = if self.state > 0 { 1.0 } else { -1.0 };
        if self.ring_modulated {
            square * input
        } else {
            square
        }
    }

    pub fn render(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample(*sample);
        }
    }

    pub fn reset(&mut self) {
        self.state = 0;
        self.last_sign = 0.0;
    }
}

/// Full-wave rectifier. Follow with a high pass to remove the DC it adds.
#[inline]
pub fn abs_octave_up(x: f32) -> f32 {
    x.abs()
}

/// 2:1 box filter, `output[i] = (input[2i] + input[2i+1]) / 2`.
///
/// # Panics
/// Panics unless `input.len() == 2 * output.len()`. Buffer sizes are fixed
/// when a chain is wired, so this can only fire during construction/testing.
pub fn box_downsample(input: &[f32], output: &mut [f32]) {
    assert_eq!(
        input.len(),
        2 * output.len(),
        "box_downsample needs exactly two input samples per output sample"
    );
    for (o, pair) in output.iter_mut().zip(input.chunks_exact(2)) {
        *o = 0.5 * (pair[0] + pair[1]);
    }
}

/// Pitch the block up one octave: box downsample into both halves, negate
/// the second half and smooth the seam. Works for any length.
pub fn octave_up(input: &[f32], output: &mut [f32]) {
    debug_assert_eq!(input.len(), output.len());
    let len = input.len().min(output.len());
    let half = len / 2;
    if half == 0 {
        output[..len].copy_from_slice(&input[..len]);
        return;
    }

    box_downsample(&input[..2 * half], &mut output[..half]);
    let (first, rest) = output.split_at_mut(half);
    for (o, &s) in rest[..half].iter_mut().zip(first.iter()) {
        *o = -s;
    }
    if len % 2 == 1 {
        output[len - 1] = output[len - 2];
    }

    if half >= 3 {
        let before = output[half - 1];
        let after = output[half + 2];
        output[half] = before * (2.0 / 3.0) + after * (1.0 / 3.0);
        output[half + 1] = before * (1.0 / 3.0) + after * (2.0 / 3.0);
    }
}

/// Linear interpolation resampler. Output index `i` reads the input at
/// `i * in_len / out_len`, clamping the upper neighbour to the last sample.
pub fn linear_resample(input: &[f32], output: &mut [f32]) {
    if input.is_empty() {
        output.fill(0.0);
        return;
    }
    if output.is_empty() {
        return;
    }

    let last = input.len() - 1;
    let step = input.len() as f32 / output.len() as f32;
    for (i, o) in output.iter_mut().enumerate() {
        let position = i as f32 * step;
        let index = (position as usize).min(last);
        let next = (index + 1).min(last);
        let frac = (position - index as f32).clamp(0.0, 1.0);
        *o = input[index] + (input[next] - input[index]) * frac;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_input(period: usize, periods: usize) -> Vec<f32> {
        (0..period * periods)
            .map(|i| if i % period < period / 2 { 1.0 } else { -1.0 })
            .collect()
    }

    fn rising_edges(signal: &[f32]) -> Vec<usize> {
        signal
            .windows(2)
            .enumerate()
            .filter(|(_, w)| w[0] < 0.0 && w[1] > 0.0)
            .map(|(i, _)| i + 1)
            .collect()
    }

    #[test]
    fn test_octave_down_period_multiplies() {
        let period = 8;
        for octaves in 1..=3u32 {
            let mut shifter = OctaveDown::new(octaves);
            let mut signal = square_input(period, 64);
            shifter.render(&mut signal);

            let edges = rising_edges(&signal);
            assert!(edges.len() >= 2, "octaves {octaves}: no full cycle");
            for pair in edges.windows(2) {
                assert_eq!(
                    pair[1] - pair[0],
                    period << octaves,
                    "octaves {octaves}"
                );
            }
        }
    }

    #[test]
    fn test_octave_down_seeds_from_input_sign() {
        let mut shifter = OctaveDown::new(1);
        assert_eq!(shifter.next_sample(-0.3), -1.0);
        assert_eq!(shifter.state(), -2);

        let mut shifter = OctaveDown::new(2);
        assert_eq!(shifter.next_sample(0.3), 1.0);
        assert_eq!(shifter.state(), 4);
    }

    #[test]
    fn test_octave_down_idle_before_signal() {
        let mut shifter = OctaveDown::new(1);
        assert_eq!(shifter.next_sample(0.0), -1.0);
        assert_eq!(shifter.state(), 0);
    }

    #[test]
    fn test_zeros_are_not_crossings() {
        let mut shifter = OctaveDown::new(1);
        shifter.next_sample(1.0);
        for _ in 0..10 {
            shifter.next_sample(0.0);
        }
        shifter.next_sample(1.0);
        assert_eq!(shifter.state(), 2);
    }

    #[test]
    fn test_ring_modulated_follows_envelope() {
        let mut shifter = OctaveDown::ring_modulated(1);
        let out = shifter.next_sample(0.25);
        assert_eq!(out, 0.25);
        assert_eq!(shifter.next_sample(0.0), 0.0);
    }

    #[test]
    fn test_octaves_clamped() {
        assert_eq!(OctaveDown::new(0).octaves(), 1);
        assert_eq!(OctaveDown::new(3).octaves(), 3);
        assert_eq!(OctaveDown::new(40).octaves(), MAX_OCTAVES);
    }

    #[test]
    fn test_box_downsample_ramp() {
        let input: Vec<f32> = (0..8).map(|i| i as f32).collect();
        let mut output = [0.0; 4];
        box_downsample(&input, &mut output);
        assert_eq!(output, [0.5, 2.5, 4.5, 6.5]);
    }

    #[test]
    #[should_panic]
    fn test_box_downsample_rejects_mismatch() {
        let input = [0.0; 6];
        let mut output = [0.0; 4];
        box_downsample(&input, &mut output);
    }

    #[test]
    fn test_octave_up_ramp_with_seam() {
        let input: Vec<f32> = (0..8).map(|i| i as f32).collect();
        let mut output = [0.0; 8];
        octave_up(&input, &mut output);

        assert_eq!(&output[..4], &[0.5, 2.5, 4.5, 6.5]);
        // Seam: ramp from 6.5 to -4.5.
        assert!((output[4] - (6.5 * 2.0 / 3.0 - 4.5 / 3.0)).abs() < 1e-5);
        assert!((output[5] - (6.5 / 3.0 - 4.5 * 2.0 / 3.0)).abs() < 1e-5);
        assert_eq!(&output[6..], &[-4.5, -6.5]);
    }

    #[test]
    fn test_octave_up_short_blocks() {
        let mut output = [9.0; 1];
        octave_up(&[0.4], &mut output);
        assert_eq!(output, [0.4]);

        let mut output = [0.0; 4];
        octave_up(&[1.0, 3.0, 5.0, 7.0], &mut output);
        assert_eq!(output, [2.0, 6.0, -2.0, -6.0]);

        let mut output = [0.0; 5];
        octave_up(&[1.0, 3.0, 5.0, 7.0, 9.0], &mut output);
        assert_eq!(output, [2.0, 6.0, -2.0, -6.0, -6.0]);
    }

    #[test]
    fn test_linear_resample_stretch() {
        let input = [0.0, 1.0, 2.0, 3.0];
        let mut output = [0.0; 8];
        linear_resample(&input, &mut output);
        assert_eq!(output, [0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.0]);
    }

    #[test]
    fn test_linear_resample_identity_and_empty() {
        let input = [0.3, -0.1, 0.8];
        let mut output = [0.0; 3];
        linear_resample(&input, &mut output);
        assert_eq!(output, input);

        let mut output = [1.0; 3];
        linear_resample(&[], &mut output);
        assert_eq!(output, [0.0; 3]);
    }

    #[test]
    fn test_abs_octave_up() {
        assert_eq!(abs_octave_up(-0.5), 0.5);
        assert_eq!(abs_octave_up(0.25), 0.25);
    }
}
