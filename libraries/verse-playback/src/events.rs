//! Player events
//!
//! Event-based UI synchronization. The controller queues an event for every
//! observable state change; the UI drains the queue once per frame (or per
//! host event-loop turn) and re-renders from the canonical state.

use serde::{Deserialize, Serialize};
use verse_core::types::TrackId;

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Transport started or stopped
    StateChanged {
        /// Whether the transport is now running
        is_playing: bool,
    },

    /// The current track changed
    TrackChanged {
        /// ID of the newly selected track
        track_id: TrackId,
    },

    /// The device reported a (new) duration for the current track
    DurationChanged {
        /// Duration in seconds
        duration: f64,
    },

    /// Periodic playhead progress
    PositionUpdate {
        /// Elapsed seconds
        position: f64,
        /// Track duration in seconds (0 while unknown)
        duration: f64,
    },

    /// Volume changed
    VolumeChanged {
        /// New gain in [0, 1]
        volume: f64,
    },

    /// The current track reached its natural end
    TrackFinished {
        /// ID of the finished track
        track_id: TrackId,
    },
}
