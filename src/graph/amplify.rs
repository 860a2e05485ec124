use crate::{dsp::amplify::apply_gain, graph::node::Transform};

/*
Parameter-Driven Gain
=====================

ParamGain scales a block by a gain read from a parameter source. The source
is polled once at the start of each block, so the gain is constant within a
block and a control-plane change lands on the next block boundary:

    g = gain_fn()            (once per block)
    out[i] = in[i] × g

A NaN gain is treated as silence. For a fixed gain use
`iterate(Gain::new(g))` instead.
*/

pub struct ParamGain<F> {
    gain_fn: F,
}

impl<F> ParamGain<F>
where
    F: FnMut() -> f32 + Send,
{
    pub fn new(gain_fn: F) -> Self {
        Self { gain_fn }
    }
}

impl<F> Transform for ParamGain<F>
where
    F: FnMut() -> f32 + Send,
{
    fn process(&mut self, input: &[f32], output: &mut [f32]) {
        let gain = (self.gain_fn)();
        let gain = if gain.is_nan() { 0.0 } else { gain };

        let len = input.len().min(output.len());
        output[..len].copy_from_slice(&input[..len]);
        apply_gain(&mut output[..len], gain);
    }
}
