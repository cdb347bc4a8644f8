//! Bar-chart waveform rendering
//!
//! Renders the decoded buffer as vertical-gradient bars onto an RGBA
//! surface. Coloring splits at the playback position: bars strictly left of
//! `position - transition` are played, bars at or right of the position are
//! unplayed, and the transition band blends the two so the edge moves
//! smoothly. During a drag a translucent highlight marks the pending region
//! between the live position and the hover position, on whichever side the
//! hover sits.

use crate::bars::{self, BAR_WIDTH, GAP_WIDTH};
use crate::decode::SampleBuffer;
use crate::theme::{Palette, Theme};
use image::{Rgba, RgbaImage};

/// Width in pixels of the played/unplayed blend band
pub const TRANSITION_WIDTH: f32 = 5.0;

/// Scale factor from RMS amplitude to bar height (fraction of surface height)
pub const HEIGHT_SCALE: f32 = 6.0;

/// Default surface height in pixels
pub const DEFAULT_HEIGHT: u32 = 50;

/// How one bar is filled
#[derive(Debug, Clone, Copy, PartialEq)]
enum Fill {
    Played,
    Unplayed,
    /// Played drawn over unplayed at the given alpha
    Blend(f32),
    Highlight,
}

/// Waveform renderer for a fixed surface size
#[derive(Debug, Clone)]
pub struct WaveformRenderer {
    width: u32,
    height: u32,
    amplitude: f32,
    theme: Theme,
}

impl WaveformRenderer {
    /// Renderer for the given surface width, at the default height
    pub fn new(width: u32) -> Self {
        Self {
            width,
            height: DEFAULT_HEIGHT,
            amplitude: 1.0,
            theme: Theme::default(),
        }
    }

    /// Override the surface height
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Override the amplitude multiplier
    pub fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Pick the color theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Surface dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Render the waveform
    ///
    /// `playback_fraction` is elapsed/duration in [0, 1]. `drag_hover_px` is
    /// the pointer's clamped x while a drag is in progress, `None`
    /// otherwise. An empty buffer renders an empty (fully transparent)
    /// surface.
    pub fn render(
        &self,
        samples: &SampleBuffer,
        playback_fraction: f32,
        drag_hover_px: Option<f32>,
    ) -> RgbaImage {
        let mut surface = RgbaImage::new(self.width.max(1), self.height.max(1));
        let palette = self.theme.palette();

        let Some(channel) = samples.channel(0) else {
            return surface;
        };
        if channel.is_empty() {
            return surface;
        }

        let num_bars = bars::bar_count(self.width) as usize;
        let heights = bars::compute_bars(channel, num_bars);
        let playback_px = playback_fraction.clamp(0.0, 1.0) * self.width as f32;

        for (index, &rms) in heights.iter().enumerate() {
            let bar_x = index as u32 * (BAR_WIDTH + GAP_WIDTH);
            let bar_height = (rms * self.amplitude * self.height as f32 * HEIGHT_SCALE)
                .min(self.height as f32) as u32;
            if bar_height == 0 {
                continue;
            }
            let offset_y = (self.height - bar_height) / 2;

            let fill = classify(bar_x as f32, playback_px, drag_hover_px);
            self.fill_bar(&mut surface, &palette, bar_x, offset_y, bar_height, fill);
        }

        surface
    }

    fn fill_bar(
        &self,
        surface: &mut RgbaImage,
        palette: &Palette,
        bar_x: u32,
        offset_y: u32,
        bar_height: u32,
        fill: Fill,
    ) {
        for dy in 0..bar_height {
            let t = if bar_height > 1 {
                dy as f32 / (bar_height - 1) as f32
            } else {
                0.0
            };
            let color = match fill {
                Fill::Played => palette.played.at(t),
                Fill::Unplayed => palette.unplayed.at(t),
                Fill::Blend(alpha) => blend(palette.unplayed.at(t), palette.played.at(t), alpha),
                Fill::Highlight => palette.highlight,
            };
            for dx in 0..BAR_WIDTH {
                let x = bar_x + dx;
                if x < self.width {
                    surface.put_pixel(x, offset_y + dy, color);
                }
            }
        }
    }
}

/// Decide how the bar at `bar_x` is filled
fn classify(bar_x: f32, playback_px: f32, drag_hover_px: Option<f32>) -> Fill {
    let base = |x: f32| {
        if x < playback_px - TRANSITION_WIDTH {
            Fill::Played
        } else if x < playback_px {
            Fill::Blend((playback_px - x) / TRANSITION_WIDTH)
        } else {
            Fill::Unplayed
        }
    };

    let Some(hover_px) = drag_hover_px else {
        return base(bar_x);
    };

    if hover_px > playback_px {
        // Dragging forward: pending region sits ahead of the anchor
        if bar_x >= playback_px && bar_x < hover_px {
            Fill::Highlight
        } else {
            base(bar_x)
        }
    } else if hover_px < playback_px {
        // Dragging backward: pending region trails the anchor
        if bar_x >= hover_px && bar_x < playback_px {
            Fill::Highlight
        } else if bar_x < hover_px {
            base(bar_x)
        } else {
            Fill::Unplayed
        }
    } else {
        base(bar_x)
    }
}

/// Alpha-composite `over` onto `under`
fn blend(under: Rgba<u8>, over: Rgba<u8>, alpha: f32) -> Rgba<u8> {
    let alpha = alpha.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (f32::from(a) * (1.0 - alpha) + f32::from(b) * alpha) as u8;
    Rgba([
        mix(under[0], over[0]),
        mix(under[1], over[1]),
        mix(under[2], over[2]),
        mix(under[3], over[3]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_regions_without_drag() {
        assert_eq!(classify(0.0, 100.0, None), Fill::Played);
        assert_eq!(classify(94.9, 100.0, None), Fill::Played);
        assert_eq!(classify(97.0, 100.0, None), Fill::Blend(0.6));
        assert_eq!(classify(100.0, 100.0, None), Fill::Unplayed);
        assert_eq!(classify(150.0, 100.0, None), Fill::Unplayed);
    }

    #[test]
    fn classify_forward_drag_highlight() {
        // Hover ahead of the anchor: [playback, hover) highlighted
        assert_eq!(classify(110.0, 100.0, Some(140.0)), Fill::Highlight);
        assert_eq!(classify(100.0, 100.0, Some(140.0)), Fill::Highlight);
        assert_eq!(classify(140.0, 100.0, Some(140.0)), Fill::Unplayed);
        assert_eq!(classify(50.0, 100.0, Some(140.0)), Fill::Played);
    }

    #[test]
    fn classify_backward_drag_highlight() {
        // Hover behind the anchor: [hover, playback) highlighted
        assert_eq!(classify(80.0, 100.0, Some(60.0)), Fill::Highlight);
        assert_eq!(classify(60.0, 100.0, Some(60.0)), Fill::Highlight);
        assert_eq!(classify(30.0, 100.0, Some(60.0)), Fill::Played);
        assert_eq!(classify(120.0, 100.0, Some(60.0)), Fill::Unplayed);
    }

    #[test]
    fn hover_on_anchor_behaves_like_no_drag() {
        assert_eq!(classify(50.0, 100.0, Some(100.0)), Fill::Played);
        assert_eq!(classify(120.0, 100.0, Some(100.0)), Fill::Unplayed);
    }
}
