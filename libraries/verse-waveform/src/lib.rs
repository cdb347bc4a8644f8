//! Verse - Waveform Renderer & Seek Surface
//!
//! Decodes a track's audio byte stream offline, renders it as a bar-chart
//! waveform with played/unplayed coloring, and implements the drag-to-seek
//! protocol with a two-stage fade-out of the transient indicators.
//!
//! This crate provides:
//! - Offline fetch + decode into planar samples ([`decode`])
//! - RMS bar computation ([`bars`])
//! - Raster rendering onto an RGBA surface ([`render`], [`theme`])
//! - The pointer protocol and fade state machine ([`scrub`], [`fade`])
//!
//! # Example
//!
//! ```rust,no_run
//! use tokio::time::Instant;
//! use verse_waveform::{decode, ScrubState, WaveformRenderer};
//!
//! # async fn example(
//! #     ctrl: &mut verse_playback::PlaybackController,
//! # ) -> Result<(), verse_waveform::WaveformError> {
//! let samples = decode::fetch_and_decode("/audio/tracks/night-drive.mp3").await?;
//!
//! let renderer = WaveformRenderer::new(200);
//! let mut scrub = ScrubState::new(200.0);
//!
//! scrub.pointer_down(ctrl, 60.0);
//! let frame = renderer.render(
//!     &samples,
//!     ctrl.state().playback_fraction() as f32,
//!     scrub.hover_px().map(|x| x as f32),
//! );
//! scrub.pointer_up(ctrl, Instant::now());
//! # let _ = frame;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod bars;
pub mod decode;
pub mod error;
pub mod fade;
pub mod render;
pub mod scrub;
pub mod theme;

// Public exports
pub use decode::{decode_bytes, fetch_and_decode, load_waveform, SampleBuffer, DECODE_CEILING_SECS};
pub use error::{Result, WaveformError};
pub use fade::{FadePhase, FadeTimer, FADE_DURATION, FADE_HOLD};
pub use render::{WaveformRenderer, HEIGHT_SCALE, TRANSITION_WIDTH};
pub use scrub::{Indicator, ScrubState};
pub use theme::Theme;
