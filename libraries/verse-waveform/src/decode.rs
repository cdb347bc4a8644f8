//! Offline audio decode
//!
//! The track's byte stream is fetched once and decoded ahead of rendering
//! into planar f32 channels, capped at a generous duration ceiling. A decode
//! failure leaves the waveform empty; a fresh source URL triggers a fresh
//! decode, never a retry loop.

use crate::error::{Result, WaveformError};
use std::io::Cursor;
use symphonia::core::audio::{AudioBuffer, AudioBufferRef, Signal};
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::core::sample::Sample;

/// Decode ceiling in seconds; streams longer than this are truncated
pub const DECODE_CEILING_SECS: u64 = 600;

/// Decoded multi-channel sample buffer
///
/// Planar layout, one `Vec<f32>` per channel, samples in [-1.0, 1.0].
/// Never mutated after decode.
#[derive(Debug, Clone, Default)]
pub struct SampleBuffer {
    channels: Vec<Vec<f32>>,
    sample_rate: u32,
}

impl SampleBuffer {
    /// Buffer with no samples (the empty-waveform state)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Buffer over already-decoded planar channels
    pub fn from_channels(channels: Vec<Vec<f32>>, sample_rate: u32) -> Self {
        Self {
            channels,
            sample_rate,
        }
    }

    /// Samples for one channel
    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    /// Number of channels
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Frames per channel
    pub fn frames(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Decoded duration in seconds
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            0.0
        } else {
            self.frames() as f64 / f64::from(self.sample_rate)
        }
    }

    /// Whether any samples were decoded
    pub fn is_empty(&self) -> bool {
        self.frames() == 0
    }
}

/// Fetch the byte stream once and decode it offline
pub async fn fetch_and_decode(url: &str) -> Result<SampleBuffer> {
    let response = reqwest::get(url).await?.error_for_status()?;
    let bytes = response.bytes().await?;
    decode_bytes(bytes.to_vec())
}

/// Fetch and decode, swallowing failures into an empty waveform
///
/// Fetch and decode errors are logged and playback is unaffected; the view
/// simply shows no data until a fresh source URL triggers a fresh decode.
pub async fn load_waveform(url: &str) -> SampleBuffer {
    match fetch_and_decode(url).await {
        Ok(buffer) => buffer,
        Err(err) => {
            tracing::warn!(%err, url, "waveform decode failed");
            SampleBuffer::empty()
        }
    }
}

/// Decode an in-memory byte stream into planar samples
pub fn decode_bytes(bytes: Vec<u8>) -> Result<SampleBuffer> {
    let stream = MediaSourceStream::new(Box::new(Cursor::new(bytes)), Default::default());

    let probed = symphonia::default::get_probe()
        .format(
            &Hint::new(),
            stream,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| WaveformError::Decode(format!("failed to probe stream: {e}")))?;

    let mut format = probed.format;

    let track = format
        .default_track()
        .ok_or_else(|| WaveformError::Decode("no audio tracks found".to_string()))?;
    let track_id = track.id;
    let sample_rate = track.codec_params.sample_rate.unwrap_or(44_100);
    let channel_count = track
        .codec_params
        .channels
        .map_or(2, symphonia::core::audio::Channels::count)
        .max(1);

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| WaveformError::Decode(format!("failed to create decoder: {e}")))?;

    let max_frames = sample_rate as usize * DECODE_CEILING_SECS as usize;
    let mut channels: Vec<Vec<f32>> = vec![Vec::new(); channel_count];

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => return Err(WaveformError::Decode(format!("stream read failed: {e}"))),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(decoded) => decoded,
            Err(SymphoniaError::DecodeError(e)) => {
                tracing::debug!("skipping undecodable packet: {e}");
                continue;
            }
            Err(e) => return Err(WaveformError::Decode(format!("decode failed: {e}"))),
        };

        extend_planar(&mut channels, &decoded);

        if channels[0].len() >= max_frames {
            for channel in &mut channels {
                channel.truncate(max_frames);
            }
            break;
        }
    }

    Ok(SampleBuffer {
        channels,
        sample_rate,
    })
}

/// Append one decoded packet to the planar channel buffers
///
/// Signed integers use symmetric scaling (divide by 2^(N-1)) so the
/// [-1.0, 1.0] range is symmetric; unsigned formats are centered around
/// zero.
fn extend_planar(channels: &mut [Vec<f32>], decoded: &AudioBufferRef) {
    match decoded {
        AudioBufferRef::F32(buf) => copy_channels(channels, buf, |s| s),
        AudioBufferRef::F64(buf) => copy_channels(channels, buf, |s| s as f32),
        AudioBufferRef::S32(buf) => copy_channels(channels, buf, |s| s as f32 / 2_147_483_648.0),
        AudioBufferRef::S16(buf) => copy_channels(channels, buf, |s| f32::from(s) / 32_768.0),
        AudioBufferRef::S8(buf) => copy_channels(channels, buf, |s| f32::from(s) / 128.0),
        AudioBufferRef::S24(buf) => {
            copy_channels(channels, buf, |s| s.inner() as f32 / 8_388_608.0);
        }
        AudioBufferRef::U32(buf) => {
            copy_channels(channels, buf, |s| {
                (s as f32 / u32::MAX as f32) * 2.0 - 1.0
            });
        }
        AudioBufferRef::U16(buf) => {
            copy_channels(channels, buf, |s| {
                (f32::from(s) / f32::from(u16::MAX)) * 2.0 - 1.0
            });
        }
        AudioBufferRef::U8(buf) => {
            copy_channels(channels, buf, |s| {
                (f32::from(s) / f32::from(u8::MAX)) * 2.0 - 1.0
            });
        }
        AudioBufferRef::U24(buf) => {
            copy_channels(channels, buf, |s| {
                (s.inner() as f32 / 16_777_215.0) * 2.0 - 1.0
            });
        }
    }
}

fn copy_channels<S, F>(channels: &mut [Vec<f32>], buf: &AudioBuffer<S>, convert: F)
where
    S: Sample + Copy,
    F: Fn(S) -> f32,
{
    let available = buf.spec().channels.count();
    for (index, channel) in channels.iter_mut().enumerate() {
        if index < available {
            channel.extend(buf.chan(index).iter().map(|s| convert(*s)));
        }
    }
}
