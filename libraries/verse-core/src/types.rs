//! Core domain types for Verse

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Track identifier
///
/// Opaque identifier assigned by the catalog. Playback code never inspects
/// its contents, only forwards it (persistence keys, events).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    /// Create a new track ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random track ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Audio track
///
/// Owned by the catalog; the playback core only holds references to it.
/// `file` is the playable-file reference the controller resolves into a
/// fetchable source URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: Option<String>,

    /// Genre
    pub genre: Option<String>,

    /// Tempo in beats per minute
    pub tempo_bpm: Option<u32>,

    /// Musical key (e.g. "A min")
    pub music_key: Option<String>,

    /// Playable file reference (resolved to a URL by the controller)
    pub file: String,

    /// Track duration in seconds, when known from catalog metadata
    pub duration_secs: Option<f64>,
}

impl Track {
    /// Create a new track with minimal metadata
    pub fn new(id: TrackId, title: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist: None,
            genre: None,
            tempo_bpm: None,
            music_key: None,
            file: file.into(),
            duration_secs: None,
        }
    }
}

/// Loop mode
///
/// Playback continuation policy applied when a track ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopMode {
    /// Stop at the end of the queue
    Off,

    /// Repeat the current track
    One,

    /// Wrap around to the start of the queue
    #[default]
    All,
}

impl LoopMode {
    /// String form used in persisted state and events
    pub fn as_str(&self) -> &'static str {
        match self {
            LoopMode::Off => "off",
            LoopMode::One => "one",
            LoopMode::All => "all",
        }
    }

    /// Parse from the string form
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "off" => Some(LoopMode::Off),
            "one" => Some(LoopMode::One),
            "all" => Some(LoopMode::All),
            _ => None,
        }
    }

    /// Next mode in the cycle `off -> one -> all -> off`
    pub fn next(self) -> Self {
        match self {
            LoopMode::Off => LoopMode::One,
            LoopMode::One => LoopMode::All,
            LoopMode::All => LoopMode::Off,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_creation() {
        let track = Track::new(TrackId::new("7"), "Test Song", "test-song.mp3");
        assert_eq!(track.id.as_str(), "7");
        assert_eq!(track.title, "Test Song");
        assert_eq!(track.file, "test-song.mp3");
        assert!(track.artist.is_none());
        assert!(track.duration_secs.is_none());
    }

    #[test]
    fn track_id_display() {
        let id = TrackId::new("abc-123");
        assert_eq!(id.to_string(), "abc-123");
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(TrackId::generate(), TrackId::generate());
    }

    #[test]
    fn loop_mode_cycle() {
        assert_eq!(LoopMode::Off.next(), LoopMode::One);
        assert_eq!(LoopMode::One.next(), LoopMode::All);
        assert_eq!(LoopMode::All.next(), LoopMode::Off);
    }

    #[test]
    fn loop_mode_round_trip() {
        for mode in [LoopMode::Off, LoopMode::One, LoopMode::All] {
            assert_eq!(LoopMode::from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(LoopMode::from_str("bogus"), None);
    }

    #[test]
    fn default_loop_mode_is_all() {
        assert_eq!(LoopMode::default(), LoopMode::All);
    }
}
