use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while opening a file-backed input source.
///
/// All of these happen at construction; a source that opened successfully
/// cannot fail while it is being read.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file could not be opened or decoded, or holds no samples
    #[error("Cannot read sound file {path}: {reason}")]
    UnreadableFile { path: PathBuf, reason: String },

    /// The file has more than one channel
    #[error("Sound file {path} has {channels} channels, expected mono")]
    NonMonoFile { path: PathBuf, channels: u16 },

    /// Seeking back to the start failed
    #[error("Sound file {path} is not seekable: {reason}")]
    UnseekableFile { path: PathBuf, reason: String },
}

impl SourceError {
    /// The file the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            SourceError::UnreadableFile { path, .. }
            | SourceError::NonMonoFile { path, .. }
            | SourceError::UnseekableFile { path, .. } => path,
        }
    }
}

/// Result type for input source operations
pub type SourceResult<T> = Result<T, SourceError>;
