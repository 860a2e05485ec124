//! Lock-free bridge between the audio thread and the control plane.

pub mod bridge;
pub mod cell;

pub use bridge::{ControlBridge, ControlHandle};
pub use cell::{AtomicF32, AtomicHiLow};
