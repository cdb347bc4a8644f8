//! Drag-to-seek surface
//!
//! Pointer protocol over the rendered waveform. Pointer-down enters drag
//! mode immediately and cancels any pending fade; pointer-move tracks the
//! clamped hover position and its time label; pointer-up seeks exactly once
//! through the controller, freezes the indicators where they were, and arms
//! the hold-then-fade timer.
//!
//! Two indicators render during and after a drag: the hover line following
//! the pointer and a fixed line at the live playback position. They are
//! independent value objects with their own opacity, so a new gesture that
//! starts mid-fade never makes the old one jump.

use crate::fade::{FadePhase, FadeTimer};
use tokio::time::Instant;
use verse_core::time::format_clock;
use verse_playback::PlaybackController;

/// One seek indicator: a vertical line plus its time label
#[derive(Debug, Clone, PartialEq)]
pub struct Indicator {
    /// Horizontal position on the surface, in pixels
    pub position_px: f64,
    /// `m:ss` time label
    pub label: String,
    /// Opacity in [0, 1]
    pub opacity: f64,
}

#[derive(Debug, Clone)]
struct DragSnapshot {
    position_px: f64,
    label: String,
}

/// Pointer/drag state for the seek surface
#[derive(Debug)]
pub struct ScrubState {
    width: f64,
    dragging: bool,
    hover_px: f64,
    hover_label: String,
    last_drag: Option<DragSnapshot>,
    fade: FadeTimer,
    transition_disabled: bool,
}

impl ScrubState {
    /// State for a surface of the given pixel width
    pub fn new(width: f64) -> Self {
        Self {
            width,
            dragging: false,
            hover_px: 0.0,
            hover_label: String::new(),
            last_drag: None,
            fade: FadeTimer::new(),
            transition_disabled: false,
        }
    }

    /// Whether a drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Hover position while dragging, for the renderer's highlight region
    pub fn hover_px(&self) -> Option<f64> {
        self.dragging.then_some(self.hover_px)
    }

    /// Whether the indicator should move without its CSS transition
    ///
    /// True from pointer-down until the hold period expires, so the line
    /// snaps to the pointer instead of gliding.
    pub fn transition_disabled(&self) -> bool {
        self.transition_disabled
    }

    /// Enter drag mode
    ///
    /// Cancels any pending fade so a gesture started mid-fade begins from a
    /// fully visible indicator.
    pub fn pointer_down(&mut self, ctrl: &PlaybackController, x: f64) {
        self.fade.cancel();
        self.last_drag = None;
        self.dragging = true;
        self.transition_disabled = true;
        self.pointer_move(ctrl, x);
    }

    /// Track the pointer during a drag
    pub fn pointer_move(&mut self, ctrl: &PlaybackController, x: f64) {
        if !self.dragging {
            return;
        }
        self.hover_px = x.clamp(0.0, self.width);
        let duration = ctrl.state().track_duration;
        self.hover_label = format_clock(self.hover_fraction() * duration);
    }

    /// Release the drag: seek exactly once and start the fade-out
    pub fn pointer_up(&mut self, ctrl: &mut PlaybackController, now: Instant) {
        if !self.dragging {
            return;
        }
        self.dragging = false;

        let target = self.hover_fraction() * ctrl.state().track_duration;
        self.last_drag = Some(DragSnapshot {
            position_px: self.hover_px,
            label: self.hover_label.clone(),
        });
        ctrl.seek_to(target);

        self.fade.arm(now);
    }

    /// Advance the fade machine
    ///
    /// Call once per frame (or on timer wakeups). Re-enables the snap
    /// transition when the hold expires and clears the frozen indicators
    /// once the fade completes.
    pub fn poll(&mut self, now: Instant) {
        match self.fade.poll(now) {
            FadePhase::Fading => {
                self.transition_disabled = false;
            }
            FadePhase::Cleared => {
                self.transition_disabled = false;
                self.last_drag = None;
                self.hover_label.clear();
            }
            FadePhase::Idle | FadePhase::Holding => {}
        }
    }

    /// The indicator following the pointer, frozen in place after release
    pub fn hover_indicator(&self, now: Instant) -> Option<Indicator> {
        if self.dragging {
            return Some(Indicator {
                position_px: self.hover_px,
                label: self.hover_label.clone(),
                opacity: 1.0,
            });
        }
        self.last_drag.as_ref().map(|snapshot| Indicator {
            position_px: snapshot.position_px,
            label: snapshot.label.clone(),
            opacity: self.fade.opacity(now),
        })
    }

    /// The fixed indicator at the live playback position
    pub fn anchor_indicator(
        &self,
        ctrl: &PlaybackController,
        now: Instant,
    ) -> Option<Indicator> {
        if !self.dragging && self.last_drag.is_none() {
            return None;
        }
        let state = ctrl.state();
        Some(Indicator {
            position_px: state.playback_fraction() * self.width,
            label: format_clock(state.current_time),
            opacity: if self.dragging {
                1.0
            } else {
                self.fade.opacity(now)
            },
        })
    }

    fn hover_fraction(&self) -> f64 {
        if self.width > 0.0 {
            self.hover_px / self.width
        } else {
            0.0
        }
    }
}
