//! Translate-TTS speaker adapter
//!
//! Fetches a synthesized MP3 clip per utterance, spills it to a scoped temp
//! file, and plays it through the default output device. The temp file is
//! removed on every exit path, including synthesis and playback failures.

use std::io::{BufReader, Write};
use std::time::Duration;

use async_trait::async_trait;
use rodio::{Decoder, OutputStream, Sink};

use crate::application::ports::{SpeakError, Speaker};
use crate::domain::speech::{AudioClip, ClipFormat, Language};

/// Speech-synthesis API base URL
const API_BASE_URL: &str = "https://translate.google.com";

const SYNTHESIS_TIMEOUT: Duration = Duration::from_secs(10);

/// Speaker backed by the translate TTS endpoint and rodio playback
pub struct TranslateTtsSpeaker {
    base_url: String,
    client: reqwest::Client,
}

impl TranslateTtsSpeaker {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    /// Create with a custom base URL (used by tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn synthesis_url(&self) -> String {
        format!("{}/translate_tts", self.base_url)
    }

    /// Fetch one synthesized MP3 clip for `text`.
    pub async fn fetch_clip(
        &self,
        text: &str,
        language: Language,
    ) -> Result<AudioClip, SpeakError> {
        let response = self
            .client
            .get(self.synthesis_url())
            .timeout(SYNTHESIS_TIMEOUT)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language.synthesis_code()),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| SpeakError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SpeakError::ApiError(format!("HTTP {}", status)));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SpeakError::RequestFailed(e.to_string()))?;

        if bytes.is_empty() {
            return Err(SpeakError::EmptyClip);
        }

        Ok(AudioClip::new(bytes.to_vec(), ClipFormat::Mp3))
    }
}

impl Default for TranslateTtsSpeaker {
    fn default() -> Self {
        Self::new()
    }
}

/// Play a clip synchronously (called from spawn_blocking).
///
/// The clip lives in a `NamedTempFile`, dropped (and therefore deleted)
/// on every return path.
fn play_clip_sync(clip: AudioClip) -> Result<(), SpeakError> {
    let mut utterance = tempfile::Builder::new()
        .prefix("agora-utterance-")
        .suffix(clip.format().suffix())
        .tempfile()
        .map_err(|e| SpeakError::Io(e.to_string()))?;

    utterance
        .write_all(clip.data())
        .map_err(|e| SpeakError::Io(e.to_string()))?;
    utterance.flush().map_err(|e| SpeakError::Io(e.to_string()))?;

    let file = utterance
        .reopen()
        .map_err(|e| SpeakError::Io(e.to_string()))?;

    let (_stream, stream_handle) = OutputStream::try_default()
        .map_err(|e| SpeakError::NoOutputDevice(e.to_string()))?;
    let sink =
        Sink::try_new(&stream_handle).map_err(|e| SpeakError::PlaybackFailed(e.to_string()))?;

    let source =
        Decoder::new(BufReader::new(file)).map_err(|e| SpeakError::PlaybackFailed(e.to_string()))?;

    sink.append(source);
    sink.sleep_until_end();

    Ok(())
}

#[async_trait]
impl Speaker for TranslateTtsSpeaker {
    async fn speak(&self, text: &str, language: Language) -> Result<(), SpeakError> {
        let clip = self.fetch_clip(text, language).await?;

        tokio::task::spawn_blocking(move || play_clip_sync(clip))
            .await
            .map_err(|e| SpeakError::PlaybackFailed(format!("Task join error: {}", e)))?
    }
}
