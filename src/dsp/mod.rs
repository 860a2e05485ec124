//! Low-level DSP primitives used by the block transforms in `graph`.
//!
//! Everything here is allocation-free once constructed and never fails, so it
//! can run directly inside the device callback. Stateful primitives own their
//! state exclusively; nothing is shared between instances.

/// Constant gain and signal multiplication.
pub mod amplify;
/// Feedback delay line over a fixed circular buffer.
pub mod delay;
/// Fuzz, hard clip and power-law compression.
pub mod distortion;
/// Mass-spring-damper string driven by the input ("drone").
pub mod drone;
/// One-pole high pass.
pub mod filter;
/// Block statistics published by the telemetry taps.
pub mod meter;
/// Crossfading and summing of buffers.
pub mod mix;
/// Zero-crossing octave-down, box-downsample octave-up and resampling.
pub mod octave;

pub use delay::Delay;
pub use drone::{Drone, DroneParams};
pub use filter::HighPass;
pub use octave::OctaveDown;
