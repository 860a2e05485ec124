//! Composable block transforms for building effect chains.
//!
//! The `dsp` primitives are plain per-sample functions. This module turns
//! them into things that can be wired together: `SampleFn` and `Transform`
//! are the two shapes, and the combinators (`combine!`, `iterate`, `Chain`,
//! `SplitCombine`, `wet_dry_mix`) build larger transforms out of smaller
//! ones. The `extensions` module adds fluent helpers so a pedal reads
//! left to right.

/// Parameter-driven gain.
pub mod amplify;
/// Dynamic chain of boxed transforms with ping-pong buffers.
pub mod chain;
/// Sequential per-sample composition and `iterate`.
pub mod combine;
/// Fluent combinators (`.through()`, `.wet_dry()`, `.then()`, etc.).
pub mod extensions;
/// Telemetry taps (volume, hi/low).
pub mod meter;
/// Mixer combiner and wet/dry blending.
pub mod mix;
/// Core traits shared by all transforms.
pub mod node;
/// Octave up/down block transforms.
pub mod pitch;
/// Parallel split/combine.
pub mod split;
/// Serial chaining of two transforms.
pub mod through;

pub use chain::{chain, Chain};
pub use combine::{iterate, Combine, Iterate};
pub use extensions::{SampleFnExt, TransformExt};
pub use mix::{wet_dry_mix, Mixer};
pub use node::{Combiner, Identity, SampleFn, Transform};
pub use split::{split_combine, SplitCombine};
