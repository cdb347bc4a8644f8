//! Track navigation
//!
//! Derived operations over the controller: queue stepping, second-jumps,
//! loop-mode cycling, and the end-of-track policy. The controller itself is
//! policy-free; [`handle_track_end`] is registered as its end handler.
//!
//! Play-intent is preserved across switches: navigating away from a playing
//! track auto-plays the destination, navigating away from a paused track
//! does not. Every switch first persists the outgoing track's position.

use crate::controller::PlaybackController;
use verse_core::types::{LoopMode, Track};

/// Default jump distance for the arrow-key shortcuts, in seconds
pub const JUMP_STEP_SECS: f64 = 10.0;

fn current_index(ctrl: &PlaybackController) -> Option<usize> {
    let current = ctrl.current_track()?;
    ctrl.state()
        .track_list
        .iter()
        .position(|track| track.id == current.id)
}

/// Advance to the next track in the queue
///
/// Silent no-op at the last index; natural wraparound only happens through
/// [`handle_track_end`] under loop-all.
pub fn next_track(ctrl: &mut PlaybackController) {
    if ctrl.state().track_list.is_empty() {
        return;
    }
    ctrl.persist_current_position();

    let was_playing = ctrl.is_playing();
    if let Some(index) = current_index(ctrl) {
        if let Some(next) = ctrl.state().track_list.get(index + 1).cloned() {
            ctrl.set_current_track(next, was_playing);
        }
    }
}

/// Step back to the previous track in the queue
///
/// Silent no-op at index zero.
pub fn previous_track(ctrl: &mut PlaybackController) {
    if ctrl.state().track_list.is_empty() {
        return;
    }
    ctrl.persist_current_position();

    let was_playing = ctrl.is_playing();
    if let Some(index) = current_index(ctrl) {
        if index > 0 {
            let previous = ctrl.state().track_list[index - 1].clone();
            ctrl.set_current_track(previous, was_playing);
        }
    }
}

/// Select a track and play it immediately
pub fn play_track(ctrl: &mut PlaybackController, track: Track) {
    ctrl.persist_current_position();
    ctrl.set_current_track(track, true);
}

/// Select a track without starting playback
pub fn select_track(ctrl: &mut PlaybackController, track: Track) {
    ctrl.persist_current_position();
    ctrl.set_current_track(track, false);
}

/// Jump forward within the current track
pub fn jump_forward(ctrl: &mut PlaybackController, seconds: f64) {
    let target = ctrl.state().current_time + seconds;
    ctrl.seek_to(target);
}

/// Jump backward within the current track
pub fn jump_backward(ctrl: &mut PlaybackController, seconds: f64) {
    let target = ctrl.state().current_time - seconds;
    ctrl.seek_to(target);
}

/// Cycle the loop mode `off -> one -> all -> off`
///
/// Entering `One` snapshots the current track into the looped list;
/// entering `All` or returning to `Off` clears it.
pub fn loop_track(ctrl: &mut PlaybackController) {
    let Some(current) = ctrl.current_track().cloned() else {
        return;
    };

    let next_mode = ctrl.state().loop_mode.next();
    let state = ctrl.state_mut();
    state.loop_mode = next_mode;
    state.looped_track_list = match next_mode {
        LoopMode::One => vec![current],
        LoopMode::All | LoopMode::Off => Vec::new(),
    };
}

/// End-of-track policy, registered as the controller's end handler
///
/// `One` replays the same track from the top; `All` advances with wrap from
/// the last index back to zero; `Off` advances only when a next track
/// exists, otherwise playback stays stopped.
pub fn handle_track_end(ctrl: &mut PlaybackController) {
    let Some(current) = ctrl.current_track().cloned() else {
        return;
    };
    ctrl.position_store_mut().reset(&current.id);

    if ctrl.state().loop_mode == LoopMode::One {
        ctrl.seek_to(0.0);
        if let Err(err) = ctrl.play() {
            tracing::warn!(%err, "failed to replay looped track");
        }
        return;
    }

    let Some(index) = current_index(ctrl) else {
        return;
    };
    let last = ctrl.state().track_list.len().saturating_sub(1);

    if index == last {
        if ctrl.state().loop_mode == LoopMode::All {
            let first = ctrl.state().track_list[0].clone();
            ctrl.set_current_track(first, true);
        }
        // Loop off at the end of the queue: stay stopped
    } else {
        let next = ctrl.state().track_list[index + 1].clone();
        ctrl.set_current_track(next, true);
    }
}
