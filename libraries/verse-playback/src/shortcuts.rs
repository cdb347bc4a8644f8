//! Keyboard shortcut translation
//!
//! The host owns key-event dispatch (and suppression while a form field is
//! focused); this module only maps an accepted key press onto controller
//! operations:
//!
//! - Space: play/pause
//! - Arrow Left/Right: jump -/+ 10 s (with modifier: previous/next track)
//! - Arrow Up/Down: volume +/- one step (with modifier: jump to the bound)

use crate::controller::PlaybackController;
use crate::navigation;

/// Volume change per arrow-key press
pub const VOLUME_KEY_STEP: f64 = 0.05;

/// Keys the player responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Play/pause toggle
    Space,
    /// Jump back / previous track
    ArrowLeft,
    /// Jump forward / next track
    ArrowRight,
    /// Volume up / to max
    ArrowUp,
    /// Volume down / to silent
    ArrowDown,
}

/// A key press with its modifier state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// Which key
    pub key: Key,
    /// Whether the track-switch/bound modifier was held
    pub shift: bool,
}

impl KeyPress {
    /// Plain key press
    pub fn plain(key: Key) -> Self {
        Self { key, shift: false }
    }

    /// Modified key press
    pub fn shifted(key: Key) -> Self {
        Self { key, shift: true }
    }
}

/// Apply a key press to the controller
pub fn apply(press: KeyPress, ctrl: &mut PlaybackController) {
    match (press.key, press.shift) {
        (Key::Space, _) => {
            if let Err(err) = ctrl.toggle_play() {
                tracing::warn!(%err, "play/pause shortcut failed");
            }
        }
        (Key::ArrowLeft, false) => navigation::jump_backward(ctrl, navigation::JUMP_STEP_SECS),
        (Key::ArrowLeft, true) => navigation::previous_track(ctrl),
        (Key::ArrowRight, false) => navigation::jump_forward(ctrl, navigation::JUMP_STEP_SECS),
        (Key::ArrowRight, true) => navigation::next_track(ctrl),
        (Key::ArrowUp, false) => ctrl.set_volume(ctrl.volume() + VOLUME_KEY_STEP),
        (Key::ArrowUp, true) => ctrl.set_volume(1.0),
        (Key::ArrowDown, false) => ctrl.set_volume(ctrl.volume() - VOLUME_KEY_STEP),
        (Key::ArrowDown, true) => ctrl.set_volume(0.0),
    }
}
