//! Pixel-level rendering tests
//!
//! Verifies the played/unplayed color split, the drag highlight, and theme
//! awareness against actual rendered pixels.

use image::Rgba;
use verse_waveform::bars::{BAR_WIDTH, GAP_WIDTH};
use verse_waveform::{SampleBuffer, Theme, WaveformRenderer, TRANSITION_WIDTH};

const WIDTH: u32 = 200;
const HEIGHT: u32 = 50;

/// Constant full-scale signal: every bar reaches full height
fn loud_buffer() -> SampleBuffer {
    SampleBuffer::from_channels(vec![vec![1.0f32; 20_000]], 44_100)
}

/// Probe the pixel at a bar's left edge, mid-height
fn probe(surface: &image::RgbaImage, bar_index: u32) -> Rgba<u8> {
    let x = bar_index * (BAR_WIDTH + GAP_WIDTH);
    *surface.get_pixel(x, HEIGHT / 2)
}

fn is_played(pixel: Rgba<u8>) -> bool {
    // Accent blue: strong blue channel, mid green, no red
    pixel[0] == 0 && pixel[2] == 255 && pixel[3] == 255
}

fn is_unplayed_dark(pixel: Rgba<u8>) -> bool {
    // Grey gradient: equal channels in the 100..=150 range
    pixel[0] == pixel[1] && pixel[1] == pixel[2] && (100..=150).contains(&pixel[0])
}

#[test]
fn test_color_split_at_playback_position() {
    let renderer = WaveformRenderer::new(WIDTH).with_height(HEIGHT);
    let fraction = 0.5;
    let surface = renderer.render(&loud_buffer(), fraction, None);
    let playback_px = fraction * WIDTH as f32;

    let bar_stride = BAR_WIDTH + GAP_WIDTH;
    for bar in 0..(WIDTH / bar_stride) {
        let left_edge = (bar * bar_stride) as f32;
        let right_edge = left_edge + BAR_WIDTH as f32;
        let pixel = probe(&surface, bar);

        if right_edge < playback_px - TRANSITION_WIDTH {
            assert!(
                is_played(pixel),
                "bar {bar} at x={left_edge} should be played, got {pixel:?}"
            );
        } else if left_edge > playback_px {
            assert!(
                is_unplayed_dark(pixel),
                "bar {bar} at x={left_edge} should be unplayed, got {pixel:?}"
            );
        }
    }
}

#[test]
fn test_zero_fraction_renders_everything_unplayed() {
    let renderer = WaveformRenderer::new(WIDTH).with_height(HEIGHT);
    let surface = renderer.render(&loud_buffer(), 0.0, None);

    for bar in 0..10 {
        assert!(is_unplayed_dark(probe(&surface, bar)));
    }
}

#[test]
fn test_full_fraction_renders_everything_played() {
    let renderer = WaveformRenderer::new(WIDTH).with_height(HEIGHT);
    let surface = renderer.render(&loud_buffer(), 1.0, None);

    let last_bar = WIDTH / (BAR_WIDTH + GAP_WIDTH) - 1;
    for bar in [0, 10, 30, last_bar] {
        assert!(is_played(probe(&surface, bar)));
    }
}

#[test]
fn test_forward_drag_highlights_pending_region() {
    let renderer = WaveformRenderer::new(WIDTH).with_height(HEIGHT);
    // Playing at 25%, hover at 150px
    let surface = renderer.render(&loud_buffer(), 0.25, Some(150.0));

    // Between playback (50px) and hover (150px): translucent highlight
    let pixel = probe(&surface, 25); // x = 75
    assert_eq!(pixel, Rgba([0, 120, 255, 128]));

    // Left of playback stays played, right of hover stays unplayed
    assert!(is_played(probe(&surface, 10)));
    assert!(is_unplayed_dark(probe(&surface, 55)));
}

#[test]
fn test_backward_drag_highlights_trailing_region() {
    let renderer = WaveformRenderer::new(WIDTH).with_height(HEIGHT);
    // Playing at 75%, hover at 50px
    let surface = renderer.render(&loud_buffer(), 0.75, Some(50.0));

    let pixel = probe(&surface, 30); // x = 90, between hover and playback
    assert_eq!(pixel, Rgba([0, 120, 255, 128]));
    assert!(is_played(probe(&surface, 10)));
    assert!(is_unplayed_dark(probe(&surface, 55)));
}

#[test]
fn test_light_theme_uses_lighter_greys() {
    let dark = WaveformRenderer::new(WIDTH).with_height(HEIGHT);
    let light = WaveformRenderer::new(WIDTH)
        .with_height(HEIGHT)
        .with_theme(Theme::Light);

    let dark_pixel = probe(&dark.render(&loud_buffer(), 0.0, None), 5);
    let light_pixel = probe(&light.render(&loud_buffer(), 0.0, None), 5);

    assert!(light_pixel[0] > dark_pixel[0]);
    assert!((180..=190).contains(&light_pixel[0]));
}

#[test]
fn test_empty_buffer_renders_transparent_surface() {
    let renderer = WaveformRenderer::new(WIDTH).with_height(HEIGHT);
    let surface = renderer.render(&SampleBuffer::empty(), 0.5, None);

    assert!(surface.pixels().all(|pixel| pixel[3] == 0));
}

#[test]
fn test_quiet_signal_leaves_vertical_margins() {
    let renderer = WaveformRenderer::new(WIDTH).with_height(HEIGHT);
    // RMS 0.02 -> bar height 6px of 50, centered
    let quiet = SampleBuffer::from_channels(vec![vec![0.02f32; 20_000]], 44_100);
    let surface = renderer.render(&quiet, 0.0, None);

    assert_eq!(surface.get_pixel(0, 0)[3], 0, "top margin transparent");
    assert_eq!(
        surface.get_pixel(0, HEIGHT - 1)[3],
        0,
        "bottom margin transparent"
    );
    assert_ne!(surface.get_pixel(0, HEIGHT / 2)[3], 0, "center drawn");
}
