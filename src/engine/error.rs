use thiserror::Error;

/// Startup errors for the audio engine.
///
/// Every variant is fatal: the engine never reaches the real-time state and
/// nothing is retried.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration values out of range
    #[error("Invalid engine config: {0}")]
    InvalidConfig(String),

    /// No default input or output device
    #[error("No default {0} device available")]
    DeviceUnavailable(&'static str),

    /// Device offers no f32 configuration at the requested rate
    #[error("Unsupported {direction} config: {reason}")]
    UnsupportedConfig {
        direction: &'static str,
        reason: String,
    },

    /// Driver refused to build the stream
    #[error("Failed to open {direction} stream: {reason}")]
    StreamOpenFailed {
        direction: &'static str,
        reason: String,
    },

    /// Driver refused to start the stream
    #[error("Failed to start {direction} stream: {reason}")]
    StreamStartFailed {
        direction: &'static str,
        reason: String,
    },
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
