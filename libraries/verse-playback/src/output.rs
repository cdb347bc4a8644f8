//! Platform-agnostic audio output abstraction
//!
//! Models the single media element the browser deployment wraps. Exactly one
//! implementation is live per process and it is owned exclusively by
//! [`crate::PlaybackController`]; no other component mutates its source or
//! transport state directly.
//!
//! Commands are synchronous calls on the trait. Notifications travel the
//! other way as [`OutputEvent`]s which the host feeds into
//! `PlaybackController::handle_output_event` from its event loop.

use thiserror::Error;

/// Failure reported by the output device
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutputError {
    /// A play request was superseded before it settled, typically because a
    /// source swap interrupted it. Benign; callers log and move on.
    #[error("play request superseded")]
    Aborted,

    /// Any other device failure
    #[error("device error: {0}")]
    Device(String),
}

impl OutputError {
    /// Whether this failure is the expected source-swap race
    pub fn is_benign(&self) -> bool {
        matches!(self, OutputError::Aborted)
    }
}

/// Single audio output device
///
/// The contract mirrors a browser media element: `set_source` + `load`
/// begin an asynchronous load that eventually produces
/// [`OutputEvent::Loaded`]; `play` may fail immediately or report a late
/// rejection via [`OutputEvent::PlayRejected`].
pub trait AudioOutput: Send {
    /// Point the device at a new source URL
    fn set_source(&mut self, url: &str);

    /// Begin loading the current source
    fn load(&mut self);

    /// Start or resume playback
    fn play(&mut self) -> Result<(), OutputError>;

    /// Pause playback
    fn pause(&mut self);

    /// Move the playhead, in seconds from the start of the track
    fn set_position(&mut self, seconds: f64);

    /// Current playhead position in seconds
    fn position(&self) -> f64;

    /// Total duration in seconds, when the device knows it
    fn duration(&self) -> Option<f64>;

    /// Set the output gain, 0.0 (silent) to 1.0 (unity)
    fn set_gain(&mut self, gain: f64);
}

/// Notification from the output device
///
/// Delivered by the host event loop to the controller, in the order the
/// device emitted them.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputEvent {
    /// The current source finished loading and is ready to play
    Loaded {
        /// Duration in seconds, when already known at load time
        duration: Option<f64>,
    },

    /// The device learned or revised the track duration
    DurationChanged(f64),

    /// Periodic playhead progress tick
    TimeUpdate(f64),

    /// Playback started (device-confirmed)
    Played,

    /// Playback paused (device-confirmed)
    Paused,

    /// The track reached its natural end
    Ended,

    /// An earlier play request settled with a failure
    PlayRejected(OutputError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aborted_is_benign() {
        assert!(OutputError::Aborted.is_benign());
        assert!(!OutputError::Device("no codec".into()).is_benign());
    }
}
