//! Speech synthesis port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::speech::Language;

/// Speech synthesis and playback errors
#[derive(Debug, Clone, Error)]
pub enum SpeakError {
    #[error("Synthesis request failed: {0}")]
    RequestFailed(String),

    #[error("Synthesis API error: {0}")]
    ApiError(String),

    #[error("Empty audio response")]
    EmptyClip,

    #[error("No audio output device available: {0}")]
    NoOutputDevice(String),

    #[error("Playback failed: {0}")]
    PlaybackFailed(String),

    #[error("Audio clip I/O failed: {0}")]
    Io(String),
}

/// Port for speaking a line of text aloud.
///
/// An implementation blocks until the synthesized clip has finished playing.
#[async_trait]
pub trait Speaker: Send + Sync {
    /// Synthesize `text` in `language` and play it through the default
    /// output device.
    async fn speak(&self, text: &str, language: Language) -> Result<(), SpeakError>;
}
