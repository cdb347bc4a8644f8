//! Playback controller - core orchestration
//!
//! Owns the single audio output device and the canonical [`PlayerState`].
//! Transport commands, volume, and seeking all funnel through here; the
//! host event loop feeds device notifications into
//! [`PlaybackController::handle_output_event`] and drains [`PlayerEvent`]s
//! for the UI.
//!
//! Loop and next-track policy lives in [`crate::navigation`], wired in via
//! the registered end handler. The controller itself only reports that a
//! track ended.

use crate::error::{PlayerError, Result};
use crate::events::PlayerEvent;
use crate::output::{AudioOutput, OutputEvent};
use crate::position::PositionStore;
use crate::types::{AutoPlay, PlayerState, TrackPhase};
use verse_core::storage::KeyValueStore;
use verse_core::types::Track;

/// Handler invoked when the current track reaches its natural end
///
/// Registered by the navigation layer; receives the controller so it can
/// advance the queue according to the active loop mode.
pub type EndHandler = fn(&mut PlaybackController);

/// Central playback controller
pub struct PlaybackController {
    output: Box<dyn AudioOutput>,
    state: PlayerState,
    positions: PositionStore,
    auto_play: AutoPlay,
    end_handler: Option<EndHandler>,
    pending_events: Vec<PlayerEvent>,
}

impl PlaybackController {
    /// Create a controller over the process's audio output device
    pub fn new(output: Box<dyn AudioOutput>, store: Box<dyn KeyValueStore>) -> Self {
        Self {
            output,
            state: PlayerState::default(),
            positions: PositionStore::new(store),
            auto_play: AutoPlay::None,
            end_handler: None,
            pending_events: Vec::new(),
        }
    }

    // ===== Track Selection =====

    /// Select a track, optionally arming auto-play for when it loads
    ///
    /// No-op when the requested track is already current. Otherwise resolves
    /// the new source URL, resets time/duration, and hands the source to the
    /// device. Overwrites any previously armed auto-play flag, so a
    /// superseding switch cancels the previous load's play intent.
    pub fn set_current_track(&mut self, track: Track, auto_play: bool) {
        if self
            .state
            .current_track
            .as_ref()
            .is_some_and(|current| current.id == track.id)
        {
            return;
        }

        let url = resolve_audio_url(&track.file);
        tracing::debug!(track = %track.id, %url, auto_play, "switching track");

        self.state.shared_audio_url = url.clone();
        self.state.current_time = 0.0;
        self.state.track_duration = 0.0;
        self.state.is_playing = false;
        self.state.phase = TrackPhase::Loading;
        self.auto_play = if auto_play {
            AutoPlay::Pending
        } else {
            AutoPlay::None
        };

        let track_id = track.id.clone();
        self.state.current_track = Some(track);

        self.output.pause();
        self.output.set_source(&url);
        self.output.load();

        self.emit(PlayerEvent::TrackChanged { track_id });
        self.emit(PlayerEvent::StateChanged { is_playing: false });
    }

    /// Replace the active playback queue
    pub fn set_track_list(&mut self, tracks: Vec<Track>) {
        self.state.track_list = tracks;
    }

    /// Seed the player from the catalog's first delivery
    ///
    /// Selects the first track without auto-play. Does nothing when a track
    /// is already selected or the list is empty.
    pub fn initialize_tracks(&mut self, tracks: Vec<Track>) {
        if self.state.current_track.is_none() {
            if let Some(first) = tracks.first().cloned() {
                self.set_current_track(first, false);
            }
        }
        self.set_track_list(tracks);
    }

    // ===== Transport =====

    /// Start or resume playback
    ///
    /// Fails with [`PlayerError::NoTrackLoaded`] when no track is selected.
    /// A benign `Aborted` rejection (a source swap interrupted the request)
    /// is logged and swallowed; other device failures surface to the caller.
    pub fn play(&mut self) -> Result<()> {
        if self.state.current_track.is_none() {
            return Err(PlayerError::NoTrackLoaded);
        }
        match self.output.play() {
            Ok(()) => {
                self.state.is_playing = true;
                self.state.phase = TrackPhase::Playing;
                self.emit(PlayerEvent::StateChanged { is_playing: true });
                Ok(())
            }
            Err(err) if err.is_benign() => {
                tracing::debug!("play request superseded, ignoring");
                Ok(())
            }
            Err(err) => Err(PlayerError::Output(err)),
        }
    }

    /// Pause playback
    pub fn pause(&mut self) {
        self.output.pause();
        if self.state.is_playing {
            self.state.is_playing = false;
            self.state.phase = TrackPhase::Paused;
            self.emit(PlayerEvent::StateChanged { is_playing: false });
        }
    }

    /// Toggle between playing and paused
    pub fn toggle_play(&mut self) -> Result<()> {
        if self.state.is_playing {
            self.pause();
            Ok(())
        } else {
            self.play()
        }
    }

    // ===== Seek =====

    /// Move the playhead, clamped to `[0, duration]`
    ///
    /// The only sanctioned way to change the device position; waveform
    /// drags, progress-bar clicks, and keyboard jumps all route through
    /// here.
    pub fn seek_to(&mut self, seconds: f64) {
        let duration = self.state.track_duration;
        let clamped = if duration.is_finite() && duration > 0.0 {
            seconds.clamp(0.0, duration)
        } else {
            seconds.max(0.0)
        };

        self.output.set_position(clamped);
        self.state.current_time = clamped;
        self.emit(PlayerEvent::PositionUpdate {
            position: clamped,
            duration,
        });
    }

    /// Seek by fraction of the track, for progress-bar clicks
    pub fn seek_to_fraction(&mut self, fraction: f64) {
        let fraction = fraction.clamp(0.0, 1.0);
        self.seek_to(fraction * self.state.track_duration);
    }

    // ===== Volume =====

    /// Set the output gain, clamped to [0, 1] and mirrored onto the device
    pub fn set_volume(&mut self, volume: f64) {
        let clamped = volume.clamp(0.0, 1.0);
        self.output.set_gain(clamped);
        self.state.volume = clamped;
        self.emit(PlayerEvent::VolumeChanged { volume: clamped });
    }

    // ===== End-of-track dispatch =====

    /// Register the handler invoked on natural end of media
    pub fn register_end_handler(&mut self, handler: EndHandler) {
        self.end_handler = Some(handler);
    }

    // ===== Persistence =====

    /// Save the current track's position, applying the expiry rule
    ///
    /// Called by navigation before every track switch and by the host on
    /// unload.
    pub fn persist_current_position(&mut self) {
        if let Some(track) = &self.state.current_track {
            let id = track.id.clone();
            self.positions
                .save(&id, self.state.current_time, self.state.track_duration);
        }
    }

    // ===== Device notifications =====

    /// Apply a notification from the output device
    pub fn handle_output_event(&mut self, event: OutputEvent) {
        match event {
            OutputEvent::Loaded { duration } => self.handle_loaded(duration),
            OutputEvent::DurationChanged(duration) => {
                if duration.is_finite() && duration > 0.0 {
                    self.state.track_duration = duration;
                    self.emit(PlayerEvent::DurationChanged { duration });
                }
            }
            OutputEvent::TimeUpdate(position) => {
                self.state.current_time = position;
                if let Some(track) = &self.state.current_track {
                    let id = track.id.clone();
                    self.positions.record_tick(&id, position);
                }
                self.emit(PlayerEvent::PositionUpdate {
                    position,
                    duration: self.state.track_duration,
                });
            }
            OutputEvent::Played => {
                if !self.state.is_playing {
                    self.state.is_playing = true;
                    self.state.phase = TrackPhase::Playing;
                    self.emit(PlayerEvent::StateChanged { is_playing: true });
                }
            }
            OutputEvent::Paused => {
                if self.state.is_playing {
                    self.state.is_playing = false;
                    self.state.phase = TrackPhase::Paused;
                    self.emit(PlayerEvent::StateChanged { is_playing: false });
                }
            }
            OutputEvent::Ended => {
                self.state.is_playing = false;
                self.state.phase = TrackPhase::Ended;
                if let Some(track) = &self.state.current_track {
                    self.emit(PlayerEvent::TrackFinished {
                        track_id: track.id.clone(),
                    });
                }
                self.emit(PlayerEvent::StateChanged { is_playing: false });
                if let Some(handler) = self.end_handler {
                    handler(self);
                }
            }
            OutputEvent::PlayRejected(err) => {
                if err.is_benign() {
                    tracing::debug!("late play rejection after source swap, ignoring");
                } else {
                    tracing::warn!(%err, "play request failed");
                    self.state.is_playing = false;
                    self.emit(PlayerEvent::StateChanged { is_playing: false });
                }
            }
        }
    }

    /// Loaded notification: restore saved position, then run pending auto-play
    fn handle_loaded(&mut self, duration: Option<f64>) {
        self.state.phase = TrackPhase::Ready;

        if let Some(duration) = duration {
            if duration.is_finite() && duration > 0.0 {
                self.state.track_duration = duration;
                self.emit(PlayerEvent::DurationChanged { duration });
            }
        }

        if let Some(track) = &self.state.current_track {
            let id = track.id.clone();
            let saved = self.positions.load(&id);
            let duration = self.state.track_duration;
            if saved > 0.0 && duration > 0.0 && saved < duration {
                self.seek_to(saved);
            }
        }

        // Consume the one-shot at most once
        if self.auto_play == AutoPlay::Pending {
            self.auto_play = AutoPlay::None;
            if let Err(err) = self.play() {
                tracing::warn!(%err, "auto-play after load failed");
            }
        }
    }

    // ===== State Queries =====

    /// Canonical player state
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// Currently selected track
    pub fn current_track(&self) -> Option<&Track> {
        self.state.current_track.as_ref()
    }

    /// Whether transport is running
    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    /// Current gain in [0, 1]
    pub fn volume(&self) -> f64 {
        self.state.volume
    }

    /// Position store, for save/restore beyond the controller's own hooks
    pub fn position_store(&self) -> &PositionStore {
        &self.positions
    }

    pub(crate) fn position_store_mut(&mut self) -> &mut PositionStore {
        &mut self.positions
    }

    pub(crate) fn state_mut(&mut self) -> &mut PlayerState {
        &mut self.state
    }

    // ===== Events =====

    /// Drain all pending UI events
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    fn emit(&mut self, event: PlayerEvent) {
        self.pending_events.push(event);
    }
}

/// Resolve a track's playable-file reference to a fetchable URL
pub fn resolve_audio_url(file: &str) -> String {
    format!("/audio/tracks/{file}")
}
