//! Error types for the playback controller

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlayerError {
    /// No track is currently loaded
    #[error("No track loaded")]
    NoTrackLoaded,

    /// The output device rejected an operation
    #[error("Output device error: {0}")]
    Output(#[from] crate::output::OutputError),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlayerError>;
