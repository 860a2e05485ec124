use std::sync::Arc;

use rtrb::Producer;

use crate::{control::ControlBridge, graph::node::Transform, io::SampleSource};

/*
The Callback Body
=================

Device drivers hand out buffers of whatever size suits them, but the
transform has to see blocks of exactly `block_len` frames (the octave-up
kernel, for one, depends on the block length). BlockProcessor re-blocks:

    device buffer:  |----- 100 frames -----|----- 100 frames -----|
    blocks (64):    |-- 64 --|-- 64 --|-- 64 --|-- 64 --|
                              ^ refilled whenever the last one runs dry

Each time a new block is needed it pulls `block_len` mono samples from the
input source, runs the transform into its output block, and then hands the
result out frame by frame, copying the mono sample to every channel of the
interleaved device buffer.

A source that cannot deliver a full block (the capture ring ran dry) is
zero-filled for the rest of the block and the shortfall is counted on the
bridge. All buffers are allocated in `new`.
*/

pub struct BlockProcessor<T, S> {
    transform: T,
    source: S,
    bridge: Arc<ControlBridge>,
    input: Vec<f32>,
    output: Vec<f32>,
    position: usize,
}

impl<T, S> BlockProcessor<T, S>
where
    T: Transform,
    S: SampleSource,
{
    pub fn new(block_len: usize, transform: T, source: S, bridge: Arc<ControlBridge>) -> Self {
        let block_len = block_len.max(1);
        Self {
            transform,
            source,
            bridge,
            input: vec![0.0; block_len],
            output: vec![0.0; block_len],
            position: block_len,
        }
    }

    pub fn block_len(&self) -> usize {
        self.output.len()
    }

    pub fn transform(&self) -> &T {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut T {
        &mut self.transform
    }

    /// Pull one block of input and run the transform over it.
    pub fn process_block(&mut self) {
        let got = self.source.read(&mut self.input);
        if got < self.input.len() {
            self.input[got..].fill(0.0);
            self.bridge.record_underrun();
        }

        self.transform.process(&self.input, &mut self.output);
        self.position = 0;
    }

    /// The most recently processed block.
    pub fn last_block(&self) -> &[f32] {
        &self.output
    }

    /// Fill an interleaved device buffer, processing new blocks as needed.
    /// Every channel of a frame gets the same mono sample.
    pub fn fill_interleaved(&mut self, data: &mut [f32], channels: usize) {
        for frame in data.chunks_mut(channels.max(1)) {
            if self.position == self.output.len() {
                self.process_block();
            }
            frame.fill(self.output[self.position]);
            self.position += 1;
        }
    }

    /// Fill a mono buffer.
    pub fn render(&mut self, out: &mut [f32]) {
        self.fill_interleaved(out, 1);
    }
}

/// Capture side: pushes the first channel of each input frame into the
/// ring that feeds the `BlockProcessor`.
pub struct CaptureWriter {
    producer: Producer<f32>,
    bridge: Arc<ControlBridge>,
}

impl CaptureWriter {
    pub fn new(producer: Producer<f32>, bridge: Arc<ControlBridge>) -> Self {
        Self { producer, bridge }
    }

    /// Push as many frames as fit. Frames that do not fit are dropped and
    /// counted as one overrun.
    pub fn push_interleaved(&mut self, data: &[f32], channels: usize) {
        let channels = channels.max(1);
        let frames = data.len() / channels;
        let room = self.producer.slots().min(frames);
        if room < frames {
            self.bridge.record_overrun();
        }

        if let Ok(chunk) = self.producer.write_chunk_uninit(room) {
            chunk.fill_from_iter(data.chunks_exact(channels).map(|frame| frame[0]));
        }
    }
}
