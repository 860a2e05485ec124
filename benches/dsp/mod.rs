//! Benchmarks for the per-sample and per-block primitives.

mod amplify;
mod delay;
mod distortion;
mod drone;
mod filter;
mod mix;
mod octave;

pub use amplify::bench_amplify;
pub use delay::bench_delay;
pub use distortion::bench_distortion;
pub use drone::bench_drone;
pub use filter::bench_filter;
pub use mix::bench_mix;
pub use octave::bench_octave;
