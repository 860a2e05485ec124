use crate::{graph::node::Transform, MAX_BLOCK_SIZE};

/*
Dynamic Chain with Ping-Pong Buffers
====================================

A Chain runs a list of boxed transforms strictly in order. Each stage has
to read the previous stage's output and write somewhere that is not being
read, so two scratch buffers alternate as destinations:

    stage 0:  input ──→ ping
    stage 1:  ping  ──→ pong
    stage 2:  pong  ──→ ping
    ...
    last:     (ping|pong) ──→ output

The last stage always writes straight into the destination block, so a
one-stage chain touches no scratch memory at all. Both buffers are
allocated when the chain is built and never resized.

An empty chain writes nothing: the destination keeps whatever it already
held.
*/

pub struct Chain {
    stages: Vec<Box<dyn Transform>>,
    ping: Vec<f32>,
    pong: Vec<f32>,
}

impl Chain {
    pub fn new() -> Self {
        Self {
            stages: Vec::new(),
            ping: vec![0.0; MAX_BLOCK_SIZE],
            pong: vec![0.0; MAX_BLOCK_SIZE],
        }
    }

    /// Append a stage (builder style).
    pub fn with<T: Transform + 'static>(mut self, stage: T) -> Self {
        self.push(stage);
        self
    }

    /// Append a stage. Call before the chain is handed to the engine.
    pub fn push<T: Transform + 'static>(&mut self, stage: T) {
        self.stages.push(Box::new(stage));
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    fn process_slice(&mut self, input: &[f32], output: &mut [f32]) {
        let len = input.len();
        let last = self.stages.len() - 1;
        let Self { stages, ping, pong } = self;

        for (i, stage) in stages.iter_mut().enumerate() {
            match (i == 0, i == last) {
                (true, true) => stage.process(input, output),
                (true, false) => stage.process(input, &mut ping[..len]),
                (false, true) => {
                    // Previous stage wrote ping if its index was even.
                    let source = if (i - 1) % 2 == 0 { &ping[..len] } else { &pong[..len] };
                    stage.process(source, output);
                }
                (false, false) => {
                    if i % 2 == 0 {
                        stage.process(&pong[..len], &mut ping[..len]);
                    } else {
                        stage.process(&ping[..len], &mut pong[..len]);
                    }
                }
            }
        }
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a chain from already boxed stages.
pub fn chain(stages: Vec<Box<dyn Transform>>) -> Chain {
    Chain {
        stages,
        ..Chain::new()
    }
}

impl Transform for Chain {
    fn process(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(input.len(), output.len());
        if self.stages.is_empty() {
            return;
        }

        for (inp, out) in input.chunks(MAX_BLOCK_SIZE).zip(output.chunks_mut(MAX_BLOCK_SIZE)) {
            self.process_slice(inp, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{combine::iterate, node::Identity};

    fn add(amount: f32) -> Box<dyn Transform> {
        Box::new(iterate(move |x: f32| x + amount))
    }

    fn ramp(len: usize) -> Vec<f32> {
        (0..len).map(|i| i as f32 / len as f32).collect()
    }

    #[test]
    fn empty_chain_leaves_destination_untouched() {
        let mut node = Chain::new();
        let input = [1.0; 4];
        let mut output = [7.0; 4];
        node.process(&input, &mut output);
        assert_eq!(output, [7.0; 4]);
    }

    #[test]
    fn single_stage_writes_destination() {
        let mut node = chain(vec![add(1.0)]);
        let mut output = [0.0; 3];
        node.process(&[0.0, 1.0, 2.0], &mut output);
        assert_eq!(output, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn order_is_preserved() {
        let mut node = Chain::new()
            .with(iterate(|x: f32| x * 2.0))
            .with(iterate(|x: f32| x + 1.0))
            .with(iterate(|x: f32| x * 10.0));
        let mut output = [0.0; 2];
        node.process(&[1.0, 2.0], &mut output);
        assert_eq!(output, [30.0, 50.0]);
    }

    #[test]
    fn long_chains_alternate_correctly() {
        for stages in 1..8 {
            let mut node = chain((0..stages).map(|_| add(1.0)).collect());
            let input = ramp(64);
            let mut output = vec![0.0; 64];
            node.process(&input, &mut output);

            for (o, i) in output.iter().zip(input.iter()) {
                assert!((o - (i + stages as f32)).abs() < 1e-5, "{stages} stages");
            }
        }
    }

    #[test]
    fn equals_nested_application() {
        let mut a = iterate(|x: f32| x * x);
        let mut b = iterate(|x: f32| 1.0 - x);
        let input = ramp(32);

        let mut mid = vec![0.0; 32];
        let mut expected = vec![0.0; 32];
        a.process(&input, &mut mid);
        b.process(&mid, &mut expected);

        let mut node = Chain::new()
            .with(iterate(|x: f32| x * x))
            .with(iterate(|x: f32| 1.0 - x));
        let mut output = vec![0.0; 32];
        node.process(&input, &mut output);

        assert_eq!(output, expected);
    }

    #[test]
    fn len_and_push() {
        let mut node = Chain::default();
        assert!(node.is_empty());
        node.push(Identity);
        node.push(Identity);
        assert_eq!(node.len(), 2);

        let input = ramp(16);
        let mut output = vec![0.0; 16];
        node.process(&input, &mut output);
        assert_eq!(output, input);
    }
}
