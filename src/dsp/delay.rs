//! Feedback delay (echo).
//!
//! A fixed circular buffer of past *output* samples. Each call advances the
//! cursor, mixes the stored sample into the output and writes the output
//! back one slot behind the cursor, so the stored signal is heard again
//! `capacity - 1` samples later at half the level:
//!
//! ```text
//! output = 0.9 * input + 0.5 * buffer[cursor]
//! buffer[cursor - 1 mod capacity] = output
//! ```
//!
//! Feedback is 0.5 < 1, so echoes always decay.

const DELAY_SECONDS: f32 = 0.1;
const MIN_CAPACITY: usize = 2;
const DRY_LEVEL: f32 = 0.9;
const FEEDBACK: f32 = 0.5;

pub struct Delay {
    buffer: Vec<f32>,
    cursor: usize,
}

impl Delay {
    /// 100 ms of history at `sample_rate`.
    pub fn new(sample_rate: f32) -> Self {
        Self::with_capacity((sample_rate * DELAY_SECONDS).max(0.0) as usize)
    }

    /// Capacities below 2 are raised to 2.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: vec![0.0; capacity.max(MIN_CAPACITY)],
            cursor: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn next_sample(&mut self, input: f32) -> f32 {
        let len = self.buffer.len();
        self.cursor = (self.cursor + 1) % len;
        let write_pos = (self.cursor + len - 1) % len;

        let output = DRY_LEVEL * input + FEEDBACK * self.buffer[self.cursor];
        self.buffer[write_pos] = output;
        output
    }

    pub fn render(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample(*sample);
        }
    }

    pub fn reset(&mut self) {
        self.buffer.fill(0.0);
        self.cursor = 0;
    }
}
