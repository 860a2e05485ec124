use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    engine::error::{EngineError, EngineResult},
    DEFAULT_BLOCK_LEN, DEFAULT_SAMPLE_RATE, MAX_BLOCK_SIZE,
};

pub const MIN_SAMPLE_RATE: u32 = 8_000;
pub const MAX_SAMPLE_RATE: u32 = 192_000;
pub const DEFAULT_INPUT_RING_BLOCKS: usize = 8;

/// Stream parameters fixed for the lifetime of an engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Frames per second, shared by input and output.
    pub sample_rate: u32,
    /// Frames handed to the transform per call.
    pub block_len: usize,
    /// Capacity of the capture ring, in blocks.
    pub input_ring_blocks: usize,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_block_len(mut self, block_len: usize) -> Self {
        self.block_len = block_len;
        self
    }

    pub fn with_input_ring_blocks(mut self, blocks: usize) -> Self {
        self.input_ring_blocks = blocks;
        self
    }

    pub fn validate(&self) -> EngineResult<()> {
        if !(MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&self.sample_rate) {
            return Err(EngineError::InvalidConfig(format!(
                "sample rate {}Hz outside {}..={}Hz",
                self.sample_rate, MIN_SAMPLE_RATE, MAX_SAMPLE_RATE
            )));
        }
        if !(2..=MAX_BLOCK_SIZE).contains(&self.block_len) {
            return Err(EngineError::InvalidConfig(format!(
                "block length {} outside 2..={}",
                self.block_len, MAX_BLOCK_SIZE
            )));
        }
        if self.input_ring_blocks < 2 {
            return Err(EngineError::InvalidConfig(format!(
                "input ring of {} blocks, need at least 2",
                self.input_ring_blocks
            )));
        }
        Ok(())
    }

    /// Capture ring capacity in samples.
    pub fn ring_capacity(&self) -> usize {
        self.block_len * self.input_ring_blocks
    }

    /// Time budget for one block.
    pub fn block_duration(&self) -> Duration {
        Duration::from_secs_f64(self.block_len as f64 / self.sample_rate as f64)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            block_len: DEFAULT_BLOCK_LEN,
            input_ring_blocks: DEFAULT_INPUT_RING_BLOCKS,
        }
    }
}
