//! Per-track listening position persistence
//!
//! Positions are stored as stringified seconds under `track-{id}-time`.
//! Raw ticks are written as playback progresses; deliberate saves (track
//! switches, unload) apply the expiry rule: a track with 45 seconds or less
//! remaining is treated as finished and its saved position resets to zero,
//! so it restarts from the top next time instead of resuming into the outro.

use verse_core::storage::KeyValueStore;
use verse_core::types::TrackId;

/// Remaining time at or below which a track counts as finished, in seconds
pub const RESUME_EXPIRY_SECS: f64 = 45.0;

/// Position store over an abstract key-value backend
pub struct PositionStore {
    backend: Box<dyn KeyValueStore>,
}

impl PositionStore {
    /// Create a store over the given backend
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    fn key(track_id: &TrackId) -> String {
        format!("track-{track_id}-time")
    }

    /// Record a raw progress tick
    pub fn record_tick(&mut self, track_id: &TrackId, seconds: f64) {
        self.backend
            .set(&Self::key(track_id), &seconds.to_string());
    }

    /// Save a position on track switch or unload, applying the expiry rule
    ///
    /// Requires a known finite duration and a positive elapsed time;
    /// otherwise nothing is written.
    pub fn save(&mut self, track_id: &TrackId, seconds: f64, duration: f64) {
        if !duration.is_finite() || duration <= 0.0 || seconds <= 0.0 {
            return;
        }
        if duration - seconds <= RESUME_EXPIRY_SECS {
            self.reset(track_id);
        } else {
            self.record_tick(track_id, seconds);
        }
    }

    /// Reset a track's saved position to zero
    pub fn reset(&mut self, track_id: &TrackId) {
        self.backend.set(&Self::key(track_id), "0");
    }

    /// Load a track's saved position
    ///
    /// Malformed, negative, or non-finite stored values are treated as
    /// absent and yield zero.
    pub fn load(&self, track_id: &TrackId) -> f64 {
        let Some(raw) = self.backend.get(&Self::key(track_id)) else {
            return 0.0;
        };
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => value,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verse_core::storage::MemoryStore;

    fn store() -> PositionStore {
        PositionStore::new(Box::new(MemoryStore::new()))
    }

    #[test]
    fn round_trip() {
        let mut positions = store();
        let id = TrackId::new("7");

        positions.save(&id, 42.5, 180.0);
        assert_eq!(positions.load(&id), 42.5);
    }

    #[test]
    fn near_end_save_resets_to_zero() {
        let mut positions = store();
        let id = TrackId::new("7");

        // 30s remaining of a 180s track counts as finished
        positions.save(&id, 150.0, 180.0);
        assert_eq!(positions.load(&id), 0.0);

        // Exactly on the boundary also resets
        positions.save(&id, 135.0, 180.0);
        assert_eq!(positions.load(&id), 0.0);

        // Just inside the window persists
        positions.save(&id, 134.9, 180.0);
        assert_eq!(positions.load(&id), 134.9);
    }

    #[test]
    fn save_ignores_unknown_duration_and_zero_time() {
        let mut positions = store();
        let id = TrackId::new("9");

        positions.save(&id, 30.0, 0.0);
        positions.save(&id, 30.0, f64::NAN);
        positions.save(&id, 0.0, 180.0);
        assert_eq!(positions.load(&id), 0.0);
    }

    #[test]
    fn malformed_value_reads_as_absent() {
        let mut backend = MemoryStore::new();
        backend.set("track-3-time", "not-a-number");
        backend.set("track-4-time", "-12");
        backend.set("track-5-time", "inf");
        let positions = PositionStore::new(Box::new(backend));

        assert_eq!(positions.load(&TrackId::new("3")), 0.0);
        assert_eq!(positions.load(&TrackId::new("4")), 0.0);
        assert_eq!(positions.load(&TrackId::new("5")), 0.0);
    }

    #[test]
    fn tick_overwrites_previous_value() {
        let mut positions = store();
        let id = TrackId::new("1");

        positions.record_tick(&id, 1.25);
        positions.record_tick(&id, 2.5);
        assert_eq!(positions.load(&id), 2.5);
    }
}
