//! FLAC encoding for the recognition upload
//!
//! The recognition endpoint accepts lossless FLAC, declared as
//! `audio/x-flac; rate=16000`. Mono, 16-bit, 16kHz.

use flacenc::bitsink::ByteSink;
use flacenc::component::BitRepr;
use flacenc::config;
use flacenc::error::Verify;
use flacenc::source::MemSource;

use crate::domain::speech::{AudioClip, ClipFormat};

/// Sample rate the recognizer expects
pub const RECOGNIZER_SAMPLE_RATE: u32 = 16000;

const BITS_PER_SAMPLE: usize = 16;
const CHANNELS: usize = 1;

/// FLAC encoding errors
#[derive(Debug, thiserror::Error)]
pub enum FlacError {
    #[error("FLAC config error: {0}")]
    Config(String),

    #[error("FLAC encoding failed: {0}")]
    Encode(String),

    #[error("FLAC write failed: {0}")]
    Write(String),
}

/// Encode mono 16kHz PCM samples into a FLAC clip.
pub fn encode_pcm(pcm_samples: &[i16]) -> Result<AudioClip, FlacError> {
    let samples_i32: Vec<i32> = pcm_samples.iter().map(|&s| s as i32).collect();

    let config = config::Encoder::default()
        .into_verified()
        .map_err(|(_, e)| FlacError::Config(format!("{:?}", e)))?;

    let source = MemSource::from_samples(
        &samples_i32,
        CHANNELS,
        BITS_PER_SAMPLE,
        RECOGNIZER_SAMPLE_RATE as usize,
    );

    let flac_stream = flacenc::encode_with_fixed_block_size(&config, source, config.block_size)
        .map_err(|e| FlacError::Encode(format!("{:?}", e)))?;

    let mut sink = ByteSink::new();
    flac_stream
        .write(&mut sink)
        .map_err(|e| FlacError::Write(e.to_string()))?;

    Ok(AudioClip::new(sink.into_inner(), ClipFormat::Flac))
}
