//! Error types for waveform decode and rendering

use thiserror::Error;

/// Waveform errors
#[derive(Debug, Error)]
pub enum WaveformError {
    /// The audio byte stream could not be fetched
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The byte stream could not be decoded into samples
    #[error("decode failed: {0}")]
    Decode(String),
}

/// Result type for waveform operations
pub type Result<T> = std::result::Result<T, WaveformError>;
