//! Input sources that stand in for, or carry, captured audio.

pub mod error;
pub mod sound_loop;

use rtrb::Consumer;

pub use error::{SourceError, SourceResult};
pub use sound_loop::SoundLoop;

/// Something that produces mono input samples on demand.
///
/// `read` is called from the audio thread once per block, so implementations
/// must not block, allocate or touch the filesystem. It returns how many
/// samples were written to the front of `buffer`; the caller deals with a
/// short read.
pub trait SampleSource: Send {
    fn read(&mut self, buffer: &mut [f32]) -> usize;
}

impl SampleSource for Box<dyn SampleSource> {
    fn read(&mut self, buffer: &mut [f32]) -> usize {
        (**self).read(buffer)
    }
}

/// The capture side of the engine: whatever the input callback has pushed.
impl SampleSource for Consumer<f32> {
    fn read(&mut self, buffer: &mut [f32]) -> usize {
        let wanted = self.slots().min(buffer.len());
        let Ok(chunk) = self.read_chunk(wanted) else {
            return 0;
        };

        let (first, second) = chunk.as_slices();
        let split = first.len();
        buffer[..split].copy_from_slice(first);
        buffer[split..wanted].copy_from_slice(second);
        chunk.commit_all();
        wanted
    }
}
