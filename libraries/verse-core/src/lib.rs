//! Verse Core
//!
//! Platform-agnostic core types, traits, and error handling for the Verse
//! playback libraries.
//!
//! This crate provides the foundational building blocks shared by the
//! playback controller and the waveform renderer:
//! - **Domain Types**: [`Track`], [`TrackId`], [`LoopMode`]
//! - **Storage Trait**: [`KeyValueStore`] (abstract key-value persistence)
//! - **Display Helpers**: [`time::format_clock`]
//!
//! # Example
//!
//! ```rust
//! use verse_core::types::{Track, TrackId};
//!
//! let track = Track::new(TrackId::new("42"), "Night Drive", "night-drive.mp3");
//! assert_eq!(track.id.as_str(), "42");
//! ```

#![forbid(unsafe_code)]

pub mod storage;
pub mod time;
pub mod types;

// Re-export commonly used types
pub use storage::{KeyValueStore, MemoryStore};
pub use types::{LoopMode, Track, TrackId};
