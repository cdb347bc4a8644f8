//! Shared test doubles and helpers for the playback test suites

use std::sync::{Arc, Mutex};
use verse_core::storage::MemoryStore;
use verse_core::types::{Track, TrackId};
use verse_playback::output::{AudioOutput, OutputError};
use verse_playback::PlaybackController;

/// One recorded call on the fake device
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCall {
    SetSource(String),
    Load,
    Play,
    Pause,
    SetPosition(f64),
    SetGain(f64),
}

pub type DeviceLog = Arc<Mutex<Vec<DeviceCall>>>;

/// Scripted stand-in for the browser media element
///
/// Records every call; `play` answers with a configurable result so tests
/// can exercise the benign-abort path.
pub struct FakeOutput {
    log: DeviceLog,
    play_error: Option<OutputError>,
    position: f64,
    duration: Option<f64>,
}

impl FakeOutput {
    pub fn create() -> (Self, DeviceLog) {
        let log: DeviceLog = Arc::default();
        (
            Self {
                log: log.clone(),
                play_error: None,
                position: 0.0,
                duration: None,
            },
            log,
        )
    }

    pub fn rejecting_play(error: OutputError) -> (Self, DeviceLog) {
        let (mut fake, log) = Self::create();
        fake.play_error = Some(error);
        (fake, log)
    }
}

impl AudioOutput for FakeOutput {
    fn set_source(&mut self, url: &str) {
        self.log
            .lock()
            .unwrap()
            .push(DeviceCall::SetSource(url.to_string()));
    }

    fn load(&mut self) {
        self.log.lock().unwrap().push(DeviceCall::Load);
    }

    fn play(&mut self) -> Result<(), OutputError> {
        self.log.lock().unwrap().push(DeviceCall::Play);
        match &self.play_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn pause(&mut self) {
        self.log.lock().unwrap().push(DeviceCall::Pause);
    }

    fn set_position(&mut self, seconds: f64) {
        self.position = seconds;
        self.log
            .lock()
            .unwrap()
            .push(DeviceCall::SetPosition(seconds));
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn set_gain(&mut self, gain: f64) {
        self.log.lock().unwrap().push(DeviceCall::SetGain(gain));
    }
}

pub fn create_track(id: &str, duration_secs: f64) -> Track {
    let mut track = Track::new(
        TrackId::new(id),
        format!("Track {id}"),
        format!("track-{id}.mp3"),
    );
    track.artist = Some("Test Artist".to_string());
    track.duration_secs = Some(duration_secs);
    track
}

/// Controller over a fake device and an in-memory position store
pub fn create_controller() -> (PlaybackController, DeviceLog) {
    let (output, log) = FakeOutput::create();
    let controller = PlaybackController::new(Box::new(output), Box::new(MemoryStore::new()));
    (controller, log)
}

/// Count the seeks issued to the device
pub fn seek_calls(log: &DeviceLog) -> Vec<f64> {
    log.lock()
        .unwrap()
        .iter()
        .filter_map(|call| match call {
            DeviceCall::SetPosition(seconds) => Some(*seconds),
            _ => None,
        })
        .collect()
}

/// Last source URL handed to the device
pub fn last_source(log: &DeviceLog) -> Option<String> {
    log.lock()
        .unwrap()
        .iter()
        .rev()
        .find_map(|call| match call {
            DeviceCall::SetSource(url) => Some(url.clone()),
            _ => None,
        })
}
