pub mod control; // Lock-free cells shared with the control plane
pub mod dsp;
pub mod engine; // Device lifecycle and the per-block callback body
pub mod graph; // Composable block transforms
pub mod io;

pub use engine::{AudioEngine, BlockProcessor, EngineConfig};

/// Largest block any transform is asked to process in one call.
pub const MAX_BLOCK_SIZE: usize = 2048;
/// Block length the engine uses when none is configured.
pub const DEFAULT_BLOCK_LEN: usize = 64;
/// Sample rate the engine uses when none is configured.
pub const DEFAULT_SAMPLE_RATE: u32 = 48_000;
