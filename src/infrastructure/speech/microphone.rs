//! Microphone capture using cpal
//!
//! Captures a bounded listen window from the default input device, mixes it
//! down to mono, resamples to the recognizer's 16kHz, and trims surrounding
//! silence. `cpal::Stream` is not `Send`, so the whole capture runs inside
//! one blocking task.

use std::sync::{Arc, Mutex as StdMutex};

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleFormat, SampleRate, StreamConfig};
use rubato::{FftFixedIn, Resampler};

use crate::application::ports::ListenError;

use super::flac::RECOGNIZER_SAMPLE_RATE;

/// Amplitude below which a sample counts as silence
const SILENCE_THRESHOLD: i16 = 300;

/// Samples kept around the detected speech (100ms at 16kHz)
const SILENCE_MARGIN: usize = 1600;

/// Bounded microphone capture.
#[derive(Debug, Clone, Copy)]
pub struct CpalMicrophone {
    window_secs: u64,
}

impl CpalMicrophone {
    /// Create a microphone with the given listen window
    pub fn new(window_secs: u64) -> Self {
        Self { window_secs }
    }

    pub fn window_secs(&self) -> u64 {
        self.window_secs
    }

    /// Capture one listen window.
    ///
    /// Returns mono 16kHz samples with leading and trailing silence removed.
    /// An all-silent window returns an empty buffer.
    pub async fn capture(&self) -> Result<Vec<i16>, ListenError> {
        let window_secs = self.window_secs;

        tokio::task::spawn_blocking(move || capture_window(window_secs))
            .await
            .map_err(|e| ListenError::CaptureFailed(format!("Task join error: {}", e)))?
    }
}

fn capture_window(window_secs: u64) -> Result<Vec<i16>, ListenError> {
    let host = cpal::default_host();
    let device = host
        .default_input_device()
        .ok_or(ListenError::NoInputDevice)?;

    let (config, sample_format) = input_config(&device)?;
    let sample_rate = config.sample_rate.0;
    let channels = config.channels;

    let buffer: Arc<StdMutex<Vec<i16>>> = Arc::new(StdMutex::new(Vec::new()));

    let stream = match sample_format {
        SampleFormat::I16 => {
            let buffer = Arc::clone(&buffer);
            device
                .build_input_stream(
                    &config,
                    move |data: &[i16], _: &cpal::InputCallbackInfo| {
                        if let Ok(mut buffer) = buffer.lock() {
                            buffer.extend_from_slice(data);
                        }
                    },
                    |err| eprintln!("Audio stream error: {}", err),
                    None,
                )
                .map_err(|e| ListenError::CaptureFailed(e.to_string()))?
        }
        SampleFormat::F32 => {
            let buffer = Arc::clone(&buffer);
            device
                .build_input_stream(
                    &config,
                    move |data: &[f32], _: &cpal::InputCallbackInfo| {
                        let converted: Vec<i16> =
                            data.iter().map(|&s| (s * 32767.0) as i16).collect();
                        if let Ok(mut buffer) = buffer.lock() {
                            buffer.extend_from_slice(&converted);
                        }
                    },
                    |err| eprintln!("Audio stream error: {}", err),
                    None,
                )
                .map_err(|e| ListenError::CaptureFailed(e.to_string()))?
        }
        other => {
            return Err(ListenError::CaptureFailed(format!(
                "Unsupported sample format: {:?}",
                other
            )))
        }
    };

    stream
        .play()
        .map_err(|e| ListenError::CaptureFailed(e.to_string()))?;

    std::thread::sleep(std::time::Duration::from_secs(window_secs));
    drop(stream);

    let captured = {
        let buffer = buffer.lock().map_err(|_| {
            ListenError::CaptureFailed("Capture buffer poisoned".to_string())
        })?;
        buffer.clone()
    };

    if captured.is_empty() {
        return Err(ListenError::CaptureFailed(
            "No audio data captured".to_string(),
        ));
    }

    let mono = mix_to_mono(&captured, channels);
    let resampled = resample(&mono, sample_rate, RECOGNIZER_SAMPLE_RATE)?;
    Ok(trim_silence(&resampled))
}

/// Pick an i16 or f32 input config, preferring mono and the recognizer rate
fn input_config(device: &cpal::Device) -> Result<(StreamConfig, SampleFormat), ListenError> {
    let supported = device
        .supported_input_configs()
        .map_err(|e| ListenError::CaptureFailed(format!("Failed to get configs: {}", e)))?;

    let mut best: Option<cpal::SupportedStreamConfigRange> = None;
    for range in supported {
        if range.sample_format() != SampleFormat::I16
            && range.sample_format() != SampleFormat::F32
        {
            continue;
        }

        let covers_target = range.min_sample_rate().0 <= RECOGNIZER_SAMPLE_RATE
            && range.max_sample_rate().0 >= RECOGNIZER_SAMPLE_RATE;

        let better = match &best {
            None => true,
            Some(current) => {
                let fewer_channels = range.channels() < current.channels();
                let better_rate =
                    covers_target && current.min_sample_rate().0 > RECOGNIZER_SAMPLE_RATE;
                fewer_channels || better_rate
            }
        };
        if better {
            best = Some(range);
        }
    }

    let range = best.ok_or_else(|| {
        ListenError::CaptureFailed("No suitable input config found".to_string())
    })?;

    let sample_rate = if range.min_sample_rate().0 <= RECOGNIZER_SAMPLE_RATE
        && range.max_sample_rate().0 >= RECOGNIZER_SAMPLE_RATE
    {
        SampleRate(RECOGNIZER_SAMPLE_RATE)
    } else {
        range.min_sample_rate()
    };

    let sample_format = range.sample_format();
    let config = StreamConfig {
        channels: range.channels(),
        sample_rate,
        buffer_size: cpal::BufferSize::Default,
    };

    Ok((config, sample_format))
}

/// Average interleaved frames down to one channel
fn mix_to_mono(samples: &[i16], channels: u16) -> Vec<i16> {
    if channels <= 1 {
        return samples.to_vec();
    }

    samples
        .chunks(channels as usize)
        .map(|frame| {
            let sum: i32 = frame.iter().map(|&s| s as i32).sum();
            (sum / channels as i32) as i16
        })
        .collect()
}

/// Resample mono PCM between rates, passthrough when they already match
fn resample(samples: &[i16], source_rate: u32, target_rate: u32) -> Result<Vec<i16>, ListenError> {
    if source_rate == target_rate {
        return Ok(samples.to_vec());
    }

    let samples_f32: Vec<f32> = samples.iter().map(|&s| s as f32 / 32768.0).collect();
    let ratio = target_rate as f64 / source_rate as f64;
    let expected_len = (samples_f32.len() as f64 * ratio).ceil() as usize;

    let mut resampler = FftFixedIn::<f32>::new(
        source_rate as usize,
        target_rate as usize,
        1024, // chunk size
        2,    // sub-chunks
        1,    // mono
    )
    .map_err(|e| ListenError::CaptureFailed(format!("Resampler init failed: {}", e)))?;

    let mut output = Vec::with_capacity(expected_len);
    let mut position = 0;

    while position < samples_f32.len() {
        let needed = resampler.input_frames_next();
        let end = (position + needed).min(samples_f32.len());

        let mut chunk = samples_f32[position..end].to_vec();
        if chunk.len() < needed {
            chunk.resize(needed, 0.0);
        }

        let resampled = resampler
            .process(&[chunk], None)
            .map_err(|e| ListenError::CaptureFailed(format!("Resampling failed: {}", e)))?;

        output.extend(resampled[0].iter().map(|&s| (s * 32767.0) as i16));
        position = end;
    }

    output.truncate(expected_len);
    Ok(output)
}

/// Drop leading and trailing silence, keeping a short margin around speech.
/// An all-silent buffer trims to empty.
fn trim_silence(samples: &[i16]) -> Vec<i16> {
    let first = samples
        .iter()
        .position(|&s| s.unsigned_abs() > SILENCE_THRESHOLD as u16);
    let Some(first) = first else {
        return Vec::new();
    };
    let last = samples
        .iter()
        .rposition(|&s| s.unsigned_abs() > SILENCE_THRESHOLD as u16)
        .unwrap_or(first);

    let start = first.saturating_sub(SILENCE_MARGIN);
    let end = (last + SILENCE_MARGIN + 1).min(samples.len());
    samples[start..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_mono_passthrough() {
        let samples = vec![1, 2, 3];
        assert_eq!(mix_to_mono(&samples, 1), samples);
    }

    #[test]
    fn mix_stereo_averages_frames() {
        let samples = vec![100, 200, -100, -200];
        assert_eq!(mix_to_mono(&samples, 2), vec![150, -150]);
    }

    #[test]
    fn resample_passthrough_at_same_rate() {
        let samples = vec![5i16; 100];
        let out = resample(&samples, 16000, 16000).unwrap();
        assert_eq!(out, samples);
    }

    #[test]
    fn resample_halves_length() {
        let samples = vec![0i16; 32000];
        let out = resample(&samples, 32000, 16000).unwrap();
        assert_eq!(out.len(), 16000);
    }

    #[test]
    fn trim_all_silence_to_empty() {
        let samples = vec![10i16; 8000];
        assert!(trim_silence(&samples).is_empty());
    }

    #[test]
    fn trim_keeps_speech_with_margin() {
        let mut samples = vec![0i16; 48000];
        for s in samples.iter_mut().skip(16000).take(8000) {
            *s = 5000;
        }
        let trimmed = trim_silence(&samples);
        // Speech plus at most one margin on each side
        assert!(trimmed.len() >= 8000);
        assert!(trimmed.len() <= 8000 + 2 * SILENCE_MARGIN);
        assert!(trimmed.iter().any(|&s| s == 5000));
    }

    #[test]
    fn trim_speech_at_buffer_edges() {
        let samples = vec![5000i16; 1000];
        assert_eq!(trim_silence(&samples), samples);
    }

    #[tokio::test]
    #[ignore = "Requires audio hardware"]
    async fn capture_from_default_device() {
        let microphone = CpalMicrophone::new(1);
        let result = microphone.capture().await;
        assert!(result.is_ok());
    }
}
