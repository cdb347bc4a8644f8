//! Volume popup and gesture translation
//!
//! The canonical gain value lives in [`crate::PlayerState`] and is mirrored
//! onto the device by `PlaybackController::set_volume`. This module owns
//! only the popup's view state (visibility, drag flag, remembered pre-mute
//! level) and translates pointer/wheel gestures into `set_volume` calls.
//! None of it depends on transport state; everything works while paused.

use crate::controller::PlaybackController;

/// Gain change per wheel notch
pub const WHEEL_STEP: f64 = 0.05;

/// Level restored by unmute when no previous level is remembered
const UNMUTE_FALLBACK: f64 = 0.5;

/// Icon tier for the volume button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeIcon {
    /// Volume is zero
    Muted,
    /// Below 70%
    Low,
    /// 70% and up
    High,
}

/// Pick the icon tier for a gain value
pub fn icon_for(volume: f64) -> VolumeIcon {
    let percent = (volume * 100.0).round() as i64;
    if percent == 0 {
        VolumeIcon::Muted
    } else if percent >= 70 {
        VolumeIcon::High
    } else {
        VolumeIcon::Low
    }
}

/// Vertical extent of the slider track element, in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderBounds {
    /// Top edge of the track
    pub top: f64,
    /// Track height
    pub height: f64,
}

impl SliderBounds {
    /// Gain for a pointer at `y`: top of the track is full volume
    fn level_at(&self, y: f64) -> f64 {
        if self.height <= 0.0 {
            return 0.0;
        }
        (1.0 - (y - self.top) / self.height).clamp(0.0, 1.0)
    }
}

/// Rectangular popup bounds, for outside-click dismissal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupBounds {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl PopupBounds {
    fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Outcome of a wheel gesture over the popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Volume was adjusted by one step
    Adjusted,
    /// The gesture ran out of room at a bound and dismissed the popup
    Dismissed,
}

/// Volume popup controller
#[derive(Debug, Default)]
pub struct VolumeControl {
    visible: bool,
    dragging: bool,
    previous_level: Option<f64>,
}

impl VolumeControl {
    /// Create with the popup hidden
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the popup is showing
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether a slider drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Toggle the popup, mirroring into the shared state
    pub fn toggle_visibility(&mut self, ctrl: &mut PlaybackController) {
        self.visible = !self.visible;
        ctrl.state_mut().is_volume_visible = self.visible;
    }

    /// Mute, or restore the remembered level
    pub fn toggle_mute(&mut self, ctrl: &mut PlaybackController) {
        let volume = ctrl.volume();
        if volume > 0.0 {
            self.previous_level = Some(volume);
            ctrl.set_volume(0.0);
        } else {
            ctrl.set_volume(self.previous_level.unwrap_or(UNMUTE_FALLBACK));
        }
    }

    /// Begin a slider drag and apply the initial position
    pub fn drag_start(&mut self, ctrl: &mut PlaybackController, y: f64, bounds: SliderBounds) {
        self.dragging = true;
        ctrl.set_volume(bounds.level_at(y));
    }

    /// Track the pointer during a drag
    pub fn drag_move(&mut self, ctrl: &mut PlaybackController, y: f64, bounds: SliderBounds) {
        if self.dragging {
            ctrl.set_volume(bounds.level_at(y));
        }
    }

    /// Finish a slider drag
    pub fn drag_end(&mut self) {
        self.dragging = false;
    }

    /// Apply a wheel notch
    ///
    /// `delta_y > 0` scrolls down (quieter). With the popup visible and the
    /// volume already at the bound in the direction of motion, the popup is
    /// dismissed instead of clamping silently.
    pub fn wheel(&mut self, ctrl: &mut PlaybackController, delta_y: f64) -> WheelOutcome {
        let volume = ctrl.volume();
        if self.visible {
            if volume >= 1.0 && delta_y < 0.0 {
                self.dismiss(ctrl);
                return WheelOutcome::Dismissed;
            }
            if volume <= 0.0 && delta_y > 0.0 {
                self.dismiss(ctrl);
                return WheelOutcome::Dismissed;
            }
        }

        ctrl.set_volume(volume - delta_y.signum() * WHEEL_STEP);
        WheelOutcome::Adjusted
    }

    /// Dismiss the popup on a click outside its bounds
    pub fn click_outside(
        &mut self,
        ctrl: &mut PlaybackController,
        x: f64,
        y: f64,
        popup: PopupBounds,
    ) {
        if self.visible && !popup.contains(x, y) {
            self.dismiss(ctrl);
        }
    }

    fn dismiss(&mut self, ctrl: &mut PlaybackController) {
        self.visible = false;
        ctrl.state_mut().is_volume_visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_maps_top_to_full_and_bottom_to_zero() {
        let bounds = SliderBounds {
            top: 20.0,
            height: 80.0,
        };
        assert_eq!(bounds.level_at(20.0), 1.0);
        assert_eq!(bounds.level_at(100.0), 0.0);
        assert_eq!(bounds.level_at(60.0), 0.5);
        // Pointer outside the track clamps
        assert_eq!(bounds.level_at(0.0), 1.0);
        assert_eq!(bounds.level_at(500.0), 0.0);
    }

    #[test]
    fn icon_tiers() {
        assert_eq!(icon_for(0.0), VolumeIcon::Muted);
        assert_eq!(icon_for(0.3), VolumeIcon::Low);
        assert_eq!(icon_for(0.69), VolumeIcon::Low);
        assert_eq!(icon_for(0.7), VolumeIcon::High);
        assert_eq!(icon_for(1.0), VolumeIcon::High);
    }

    #[test]
    fn popup_bounds_containment() {
        let popup = PopupBounds {
            x: 10.0,
            y: 10.0,
            width: 30.0,
            height: 100.0,
        };
        assert!(popup.contains(10.0, 10.0));
        assert!(popup.contains(40.0, 110.0));
        assert!(!popup.contains(41.0, 50.0));
        assert!(!popup.contains(20.0, 111.0));
    }
}
