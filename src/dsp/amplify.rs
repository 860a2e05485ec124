//! Gain and signal multiplication.

/*
Gain
====

  gain > 1.0  →  louder
  gain = 1.0  →  unchanged (unity)
  gain < 1.0  →  quieter
  gain = 0.0  →  silence

Every halving of amplitude is about -6 dB, every doubling about +6 dB.

A block-rate gain (one value held for the whole block) is applied with
`apply_gain`, which is what the parameter-driven gain node runs on.

Gain is not a limiter: a gain above 1 can push samples past full scale, so a
clip stage normally follows it at the end of the chain.
*/

/// Fixed per-sample gain, `x * g`.
#[derive(Clone, Copy, Debug)]
pub struct Gain {
    pub gain: f32,
}

impl Gain {
    pub fn new(gain: f32) -> Self {
        Self { gain }
    }

    #[inline]
    pub fn next_sample(&self, x: f32) -> f32 {
        x * self.gain
    }
}

/// Multiply a signal by a constant gain factor (in-place).
#[inline]
pub fn apply_gain(signal: &mut [f32], gain: f32) {
    for sample in signal.iter_mut() {
        *sample *= gain;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gain_scales_sample() {
        let gain = Gain::new(0.5);
        assert_eq!(gain.next_sample(0.8), 0.4);
        assert_eq!(gain.next_sample(-1.0), -0.5);
    }

    #[test]
    fn test_apply_gain() {
        let mut signal = [1.0, 0.5, -0.5, -1.0];
        apply_gain(&mut signal, 0.5);
        assert_eq!(signal, [0.5, 0.25, -0.25, -0.5]);
    }

    #[test]
    fn test_zero_gain_silences() {
        let mut signal = [0.3, -0.7, 0.5];
        apply_gain(&mut signal, 0.0);
        assert!(signal.iter().all(|&s| s == 0.0));
    }
}
