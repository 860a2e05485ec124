use crate::{graph::node::Transform, MAX_BLOCK_SIZE};

/*
Serial Two-Stage Chain (Through)
================================

Through connects two block transforms in series: the first reads the input
block and writes a scratch buffer, the second reads the scratch buffer and
writes the output block.

  Through: [input] ──→ [First] ──→ scratch ──→ [Second] ──→ output

This is the statically dispatched counterpart of `Chain`. Nesting Throughs
builds chains of any length with no boxing, at the cost of one scratch
buffer per link:

    let pedal = iterate(high_pass)
        .through(OctaveUp)
        .through(iterate(clip));

Use `Chain` when the stages are only known at run time.
*/

pub struct Through<A, B> {
    first: A,
    second: B,
    scratch: Vec<f32>,
}

impl<A, B> Through<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            scratch: vec![0.0; MAX_BLOCK_SIZE],
        }
    }
}

impl<A: Transform, B: Transform> Transform for Through<A, B> {
    fn process(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(input.len(), output.len());

        for (inp, out) in input.chunks(MAX_BLOCK_SIZE).zip(output.chunks_mut(MAX_BLOCK_SIZE)) {
            let scratch = &mut self.scratch[..inp.len()];
            self.first.process(inp, scratch);
            self.second.process(scratch, out);
        }
    }
}
