//! Verse - Playback Management
//!
//! Playback core for the Verse music catalog.
//!
//! This crate provides:
//! - A single [`PlaybackController`] owning the audio output device and the
//!   canonical [`PlayerState`]
//! - Track navigation with loop modes and preserved play-intent
//!   ([`navigation`])
//! - Volume popup gestures, wheel, and mute ([`volume`])
//! - Per-track position persistence with expiry-near-end ([`position`])
//! - Keyboard shortcut translation ([`shortcuts`])
//!
//! # Architecture
//!
//! `verse-playback` is platform-agnostic. The host supplies the output
//! device behind the [`AudioOutput`] trait (a browser media element, a
//! native pipeline, a scripted fake in tests) and a key-value backend for
//! positions. Device notifications are fed into
//! [`PlaybackController::handle_output_event`]; UI state synchronization
//! happens by draining [`PlayerEvent`]s.
//!
//! # Example
//!
//! ```rust,no_run
//! use verse_core::storage::MemoryStore;
//! use verse_core::types::{Track, TrackId};
//! use verse_playback::output::{AudioOutput, OutputError};
//! use verse_playback::{navigation, PlaybackController};
//!
//! struct BrowserAudio;
//! impl AudioOutput for BrowserAudio {
//!     fn set_source(&mut self, _url: &str) {}
//!     fn load(&mut self) {}
//!     fn play(&mut self) -> Result<(), OutputError> { Ok(()) }
//!     fn pause(&mut self) {}
//!     fn set_position(&mut self, _seconds: f64) {}
//!     fn position(&self) -> f64 { 0.0 }
//!     fn duration(&self) -> Option<f64> { None }
//!     fn set_gain(&mut self, _gain: f64) {}
//! }
//!
//! let mut controller =
//!     PlaybackController::new(Box::new(BrowserAudio), Box::new(MemoryStore::new()));
//! controller.register_end_handler(navigation::handle_track_end);
//!
//! let tracks = vec![Track::new(TrackId::new("1"), "First", "first.mp3")];
//! controller.initialize_tracks(tracks);
//! ```

#![forbid(unsafe_code)]

pub mod controller;
pub mod error;
pub mod events;
pub mod navigation;
pub mod output;
pub mod position;
pub mod shortcuts;
pub mod types;
pub mod volume;

// Public exports
pub use controller::{resolve_audio_url, EndHandler, PlaybackController};
pub use error::{PlayerError, Result};
pub use events::PlayerEvent;
pub use output::{AudioOutput, OutputError, OutputEvent};
pub use position::{PositionStore, RESUME_EXPIRY_SECS};
pub use types::{AutoPlay, PlayerState, TrackPhase};
pub use volume::{VolumeControl, WheelOutcome};
