use std::path::Path;

use hound::{SampleFormat, WavReader};

use crate::io::{
    error::{SourceError, SourceResult},
    SampleSource,
};

/*
Looping File Source
===================

SoundLoop plays a mono WAV file over and over, standing in for the capture
device so a chain can be auditioned or tested against a known recording.

The whole file is decoded into memory when it is opened. Reading is then a
copy out of a Vec with a wrapping cursor, which is safe on the audio
thread; streaming from disk in the callback would not be.

    samples: [ s0 s1 s2 ... sN-1 ]
                     ^cursor
    read(8): copies to the end, wraps to s0, carries on until 8 are filled

Integer formats are scaled into [-1, 1) by 2^(bits-1). Float files are
taken as they are.

The file must be mono and seekable (probed by rewinding once before
decoding). A file with no samples at all cannot fill a buffer and is
rejected as unreadable. The file's sample rate is recorded but not
converted; a file recorded at another rate plays back pitched.
*/

pub struct SoundLoop {
    samples: Vec<f32>,
    cursor: usize,
    sample_rate: u32,
}

impl SoundLoop {
    pub fn open(path: impl AsRef<Path>) -> SourceResult<Self> {
        let path = path.as_ref();
        let unreadable = |reason: String| SourceError::UnreadableFile {
            path: path.to_path_buf(),
            reason,
        };

        let mut reader = WavReader::open(path).map_err(|e| unreadable(e.to_string()))?;
        let spec = reader.spec();

        if spec.channels != 1 {
            return Err(SourceError::NonMonoFile {
                path: path.to_path_buf(),
                channels: spec.channels,
            });
        }

        reader.seek(0).map_err(|e| SourceError::UnseekableFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let samples: Vec<f32> = match spec.sample_format {
            SampleFormat::Float => reader
                .samples::<f32>()
                .collect::<Result<_, _>>()
                .map_err(|e| unreadable(e.to_string()))?,
            SampleFormat::Int => {
                let scale = 1.0 / (1u64 << (spec.bits_per_sample.saturating_sub(1))) as f32;
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|v| v as f32 * scale))
                    .collect::<Result<_, _>>()
                    .map_err(|e| unreadable(e.to_string()))?
            }
        };

        if samples.is_empty() {
            return Err(unreadable("file contains no samples".to_string()));
        }

        log::info!(
            "Loaded sound loop {}: {} samples at {}Hz",
            path.display(),
            samples.len(),
            spec.sample_rate
        );

        Ok(Self {
            samples,
            cursor: 0,
            sample_rate: spec.sample_rate,
        })
    }

    /// Loop over samples already in memory. Returns `None` when `samples`
    /// is empty.
    pub fn from_samples(samples: Vec<f32>, sample_rate: u32) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        Some(Self {
            samples,
            cursor: 0,
            sample_rate,
        })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample rate the file was recorded at.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Position of the next sample `read` will produce.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn rewind(&mut self) {
        self.cursor = 0;
    }
}

impl SampleSource for SoundLoop {
    /// Always fills the whole buffer, wrapping to the start as needed.
    fn read(&mut self, buffer: &mut [f32]) -> usize {
        let mut filled = 0;
        while filled < buffer.len() {
            let available = &self.samples[self.cursor..];
            let count = available.len().min(buffer.len() - filled);
            buffer[filled..filled + count].copy_from_slice(&available[..count]);
            filled += count;
            self.cursor += count;
            if self.cursor == self.samples.len() {
                self.cursor = 0;
            }
        }
        filled
    }
}
