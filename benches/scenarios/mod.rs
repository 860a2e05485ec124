//! Whole-chain benchmarks.
//!
//! These run the default pedal board the way the output callback does,
//! including re-blocking and the bridge traffic from the meters.

mod pedal;

pub use pedal::bench_pedal;
