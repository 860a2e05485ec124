use crate::graph::{
    combine::{Combine, Iterate},
    mix::{wet_dry_mix, Mixer, WetDryMix},
    node::{Combiner, SampleFn, Transform},
    split::SplitCombine,
    through::Through,
};

pub trait TransformExt: Transform + Sized {
    fn through<T: Transform>(self, next: T) -> Through<Self, T> {
        Through::new(self, next)
    }

    fn split<T: Transform, C: Combiner>(self, other: T, combiner: C) -> SplitCombine<Self, T, C> {
        SplitCombine::new(self, other, combiner)
    }

    fn wet_dry<M>(self, mix_fn: M) -> WetDryMix<Self, Mixer<M>>
    where
        M: FnMut() -> f32 + Send,
    {
        wet_dry_mix(self, Mixer::new(mix_fn))
    }

    fn boxed(self) -> Box<dyn Transform>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<T: Transform> TransformExt for T {}

pub trait SampleFnExt: SampleFn + Sized {
    fn then<N: SampleFn>(self, next: N) -> Combine<Self, N> {
        Combine::new(self, next)
    }

    fn iterate(self) -> Iterate<Self> {
        Iterate::new(self)
    }
}

impl<F: SampleFn> SampleFnExt for F {}
