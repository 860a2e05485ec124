use crate::{
    dsp::mix::mix,
    graph::{
        node::{Combiner, Identity, Transform},
        split::SplitCombine,
    },
};

/*
Parameter-Driven Mixing
=======================

`Mixer` is a combiner whose balance comes from a parameter source, polled
once per block:

    mix = clamp(mix_fn(), 0, 1)
    out[i] = in1[i] × mix + in0[i] × (1 - mix)

By convention in0 is the dry path and in1 the wet one. The source is
usually `ControlBridge::wet_mix_source`, so the knob on the control plane
moves the blend without touching the audio thread's data structures. A
NaN from the source is treated as fully dry.

`wet_dry_mix(effect, combiner)` is a split/combine whose first path is the
untouched input:

             ┌──→ [Identity] ──→ dry ──┐
    input ───┤                         ├──→ [Mixer] ──→ output
             └──→ [Effect]   ──→ wet ──┘
*/

pub struct Mixer<F> {
    mix_fn: F,
}

impl<F> Mixer<F>
where
    F: FnMut() -> f32 + Send,
{
    pub fn new(mix_fn: F) -> Self {
        Self { mix_fn }
    }

    fn balance(&mut self) -> f32 {
        let mix = (self.mix_fn)();
        if mix.is_nan() {
            0.0
        } else {
            mix.clamp(0.0, 1.0)
        }
    }
}

/// Mixer with a constant balance.
pub fn fixed_mix(balance: f32) -> Mixer<impl FnMut() -> f32 + Send> {
    Mixer::new(move || balance)
}

impl<F> Combiner for Mixer<F>
where
    F: FnMut() -> f32 + Send,
{
    fn combine(&mut self, dry: &[f32], wet: &[f32], out: &mut [f32]) {
        let balance = self.balance();
        mix(dry, wet, balance, out);
    }
}

pub type WetDryMix<E, C> = SplitCombine<Identity, E, C>;

/// Blend the untouched input (dry) with `effect`'s output (wet).
pub fn wet_dry_mix<E, C>(effect: E, combiner: C) -> WetDryMix<E, C>
where
    E: Transform,
    C: Combiner,
{
    SplitCombine::new(Identity, effect, combiner)
}
