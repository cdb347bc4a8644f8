//! Core types for the playback controller

use serde::{Deserialize, Serialize};
use verse_core::types::{LoopMode, Track};

/// Per-track load/transport phase
///
/// `Loading -> Ready` fires on the device's loaded notification, at which
/// point the saved position is restored and any pending auto-play runs.
/// `Ended` is reached only through the device's natural end-of-media signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackPhase {
    /// No track selected
    #[default]
    Idle,

    /// Source assigned, waiting for the device to finish loading
    Loading,

    /// Loaded and seekable, not yet started
    Ready,

    /// Playing
    Playing,

    /// Paused mid-track
    Paused,

    /// Reached natural end of media
    Ended,
}

/// One-shot auto-play coordination flag
///
/// Armed ahead of the asynchronous load and consumed exactly once when the
/// device reports loaded. A superseding track switch overwrites it
/// (cancel-and-replace), so a stale arm can never fire for the wrong track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AutoPlay {
    /// Nothing pending
    #[default]
    None,

    /// Start playback once the current source reports loaded
    Pending,
}

/// Canonical player state
///
/// Owned exclusively by [`crate::PlaybackController`]; every other
/// subsystem observes it and requests changes through the controller's
/// operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    /// Currently selected track
    pub current_track: Option<Track>,

    /// Active playback queue
    pub track_list: Vec<Track>,

    /// Snapshot of `[current_track]` while loop mode is `One`
    pub looped_track_list: Vec<Track>,

    /// Whether transport is running
    pub is_playing: bool,

    /// Playback continuation policy
    pub loop_mode: LoopMode,

    /// Elapsed seconds into the current track
    pub current_time: f64,

    /// Duration of the current track in seconds (0 until reported)
    pub track_duration: f64,

    /// Output gain in [0, 1]
    pub volume: f64,

    /// Whether the volume popup is showing
    pub is_volume_visible: bool,

    /// Resolved source URL for the current track
    pub shared_audio_url: String,

    /// Load/transport phase of the current track
    pub phase: TrackPhase,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            current_track: None,
            track_list: Vec::new(),
            looped_track_list: Vec::new(),
            is_playing: false,
            loop_mode: LoopMode::default(),
            current_time: 0.0,
            track_duration: 0.0,
            volume: 1.0,
            is_volume_visible: false,
            shared_audio_url: String::new(),
            phase: TrackPhase::Idle,
        }
    }
}

impl PlayerState {
    /// Fraction of the track played, in [0, 1]; 0 when duration is unknown
    pub fn playback_fraction(&self) -> f64 {
        if self.track_duration > 0.0 && self.track_duration.is_finite() {
            (self.current_time / self.track_duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}
