//! RMS bar computation
//!
//! The drawing surface is partitioned into fixed-width bars separated by a
//! fixed gap; each bar's amplitude is the root-mean-square of the
//! corresponding contiguous slice of channel-0 samples.

/// Bar width in pixels
pub const BAR_WIDTH: u32 = 2;

/// Gap between bars in pixels
pub const GAP_WIDTH: u32 = 1;

/// Number of bars that fit into the given surface width
pub fn bar_count(width: u32) -> u32 {
    (width + GAP_WIDTH) / (BAR_WIDTH + GAP_WIDTH)
}

/// RMS amplitude per bar over contiguous sample slices
///
/// Slices are `samples.len() / bars` long; a short or empty input yields
/// zero-height bars rather than an error.
pub fn compute_bars(samples: &[f32], bars: usize) -> Vec<f32> {
    if bars == 0 {
        return Vec::new();
    }
    let slice_len = samples.len() / bars;
    if slice_len == 0 {
        return vec![0.0; bars];
    }

    (0..bars)
        .map(|bar| {
            let start = bar * slice_len;
            let end = start + slice_len;
            let sum_squared: f32 = samples[start..end].iter().map(|s| s * s).sum();
            (sum_squared / slice_len as f32).sqrt()
        })
        .collect()
}
