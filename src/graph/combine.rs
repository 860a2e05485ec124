use crate::graph::node::{SampleFn, Transform};

/*
Sequential Composition
======================

`Combine` glues per-sample functions together so that a whole effects
chain runs sample by sample inside one loop:

    combine!(high_pass, delay, fuzz)   ≡   x ↦ fuzz(delay(high_pass(x)))

The first argument runs first. `combine!()` is the identity and
`combine!(f)` is just `f`.

`Iterate` lifts any per-sample function to a block transform by running it
over the block in order. The function's state simply carries on into the
next block.

Everything is statically dispatched: a combined chain is a nested struct,
no boxing and no closures allocated on the audio thread.
*/

/// `second(first(x))`.
pub struct Combine<A, B> {
    first: A,
    second: B,
}

impl<A, B> Combine<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: SampleFn, B: SampleFn> SampleFn for Combine<A, B> {
    #[inline]
    fn tick(&mut self, x: f32) -> f32 {
        self.second.tick(self.first.tick(x))
    }
}

/// Compose per-sample functions left to right.
///
/// ```
/// use stompbox::{combine, dsp::distortion::{clip, fuzz}, graph::SampleFn};
///
/// let mut f = combine!(|x: f32| x * 4.0, clip, fuzz);
/// assert_eq!(f.tick(0.5), 1.0);
/// ```
#[macro_export]
macro_rules! combine {
    () => {
        $crate::graph::node::Identity
    };
    ($f:expr $(,)?) => {
        $f
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::graph::combine::Combine::new($first, $crate::combine!($($rest),+))
    };
}

/// Per-sample function applied across a block.
pub struct Iterate<F> {
    func: F,
}

impl<F> Iterate<F> {
    pub fn new(func: F) -> Self {
        Self { func }
    }

    pub fn inner(&self) -> &F {
        &self.func
    }

    pub fn inner_mut(&mut self) -> &mut F {
        &mut self.func
    }
}

/// Lift a per-sample function to a block transform.
pub fn iterate<F: SampleFn>(func: F) -> Iterate<F> {
    Iterate::new(func)
}

impl<F: SampleFn> Transform for Iterate<F> {
    fn process(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(input.len(), output.len());

        for (o, &x) in output.iter_mut().zip(input.iter()) {
            *o = self.func.tick(x);
        }
    }
}
