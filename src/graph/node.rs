use crate::dsp::{
    amplify::Gain, delay::Delay, distortion::Compressor, drone::Drone, filter::HighPass,
    octave::OctaveDown,
};

/// A function applied once per sample, in order.
///
/// State (delay cursors, filter memory, crossing counters) lives inside the
/// implementor and carries over from one call to the next, including across
/// block boundaries. Plain functions and closures qualify automatically:
///
/// ```
/// use stompbox::{dsp::distortion::fuzz, graph::SampleFn};
///
/// let mut f = fuzz;
/// assert_eq!(f.tick(0.0), 0.0);
/// ```
pub trait SampleFn: Send {
    fn tick(&mut self, x: f32) -> f32;
}

impl<F> SampleFn for F
where
    F: FnMut(f32) -> f32 + Send,
{
    #[inline]
    fn tick(&mut self, x: f32) -> f32 {
        self(x)
    }
}

/// Core trait for block transforms.
///
/// `process` is called from the device callback with an input block and an
/// output block of the same length. It must not allocate, block or panic,
/// and must only write `output[..input.len()]`.
///
/// Blocks are at most [`MAX_BLOCK_SIZE`](crate::MAX_BLOCK_SIZE) samples long;
/// the engine rejects larger block lengths. Composites that own scratch
/// buffers (`Through`, `Chain`, `SplitCombine`) feed a longer input to their
/// stages in `MAX_BLOCK_SIZE` slices, so a stage whose output depends on the
/// block length, such as `OctaveUp`, sees each slice as its own block.
pub trait Transform: Send {
    fn process(&mut self, input: &[f32], output: &mut [f32]);
}

/// Allow boxed transforms to be used as transforms (for dynamic dispatch)
impl Transform for Box<dyn Transform> {
    fn process(&mut self, input: &[f32], output: &mut [f32]) {
        (**self).process(input, output)
    }
}

/// Merges two processed paths into one output block.
pub trait Combiner: Send {
    fn combine(&mut self, a: &[f32], b: &[f32], out: &mut [f32]);
}

impl<F> Combiner for F
where
    F: FnMut(&[f32], &[f32], &mut [f32]) + Send,
{
    #[inline]
    fn combine(&mut self, a: &[f32], b: &[f32], out: &mut [f32]) {
        self(a, b, out)
    }
}

/// Pass-through, both per sample and per block.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl SampleFn for Identity {
    #[inline]
    fn tick(&mut self, x: f32) -> f32 {
        x
    }
}

impl Transform for Identity {
    fn process(&mut self, input: &[f32], output: &mut [f32]) {
        output[..input.len()].copy_from_slice(input);
    }
}

impl SampleFn for Gain {
    #[inline]
    fn tick(&mut self, x: f32) -> f32 {
        self.next_sample(x)
    }
}

impl SampleFn for Compressor {
    #[inline]
    fn tick(&mut self, x: f32) -> f32 {
        self.next_sample(x)
    }
}

impl SampleFn for Delay {
    #[inline]
    fn tick(&mut self, x: f32) -> f32 {
        self.next_sample(x)
    }
}

impl SampleFn for HighPass {
    #[inline]
    fn tick(&mut self, x: f32) -> f32 {
        self.next_sample(x)
    }
}

impl SampleFn for Drone {
    #[inline]
    fn tick(&mut self, x: f32) -> f32 {
        self.next_sample(x)
    }
}

impl SampleFn for OctaveDown {
    #[inline]
    fn tick(&mut self, x: f32) -> f32 {
        self.next_sample(x)
    }
}
