use crate::{
    graph::node::{Combiner, Transform},
    MAX_BLOCK_SIZE,
};

/*
Parallel Split / Combine
========================

Both paths see the same input block. Each renders into its own scratch
buffer and the combiner merges the two into the destination:

             ┌──→ [Path A] ──→ buf_a ──┐
    input ───┤                         ├──→ [Combiner] ──→ output
             └──→ [Path B] ──→ buf_b ──┘

The combiner can be anything with the `(a, b, out)` shape: a crossfade
(`Mixer`), a plain sum, a sample-wise min/max.
*/

pub struct SplitCombine<A, B, C> {
    pub path_a: A,
    pub path_b: B,
    pub combiner: C,
    buf_a: Vec<f32>,
    buf_b: Vec<f32>,
}

impl<A, B, C> SplitCombine<A, B, C> {
    pub fn new(path_a: A, path_b: B, combiner: C) -> Self {
        Self {
            path_a,
            path_b,
            combiner,
            buf_a: vec![0.0; MAX_BLOCK_SIZE],
            buf_b: vec![0.0; MAX_BLOCK_SIZE],
        }
    }
}

/// Run two paths on the same input and merge them with `combiner`.
pub fn split_combine<A, B, C>(path_a: A, path_b: B, combiner: C) -> SplitCombine<A, B, C>
where
    A: Transform,
    B: Transform,
    C: Combiner,
{
    SplitCombine::new(path_a, path_b, combiner)
}

impl<A: Transform, B: Transform, C: Combiner> Transform for SplitCombine<A, B, C> {
    fn process(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(input.len(), output.len());

        for (inp, out) in input.chunks(MAX_BLOCK_SIZE).zip(output.chunks_mut(MAX_BLOCK_SIZE)) {
            let len = inp.len();
            let buf_a = &mut self.buf_a[..len];
            let buf_b = &mut self.buf_b[..len];

            self.path_a.process(inp, buf_a);
            self.path_b.process(inp, buf_b);
            self.combiner.combine(buf_a, buf_b, out);
        }
    }
}
