//! Speech recognition port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::speech::Language;

/// Speech capture and recognition errors
#[derive(Debug, Clone, Error)]
pub enum ListenError {
    #[error("No audio input device available")]
    NoInputDevice,

    #[error("Audio capture failed: {0}")]
    CaptureFailed(String),

    #[error("Audio encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Recognition request failed: {0}")]
    RequestFailed(String),

    #[error("Recognition API error: {0}")]
    ApiError(String),

    #[error("Failed to parse recognition response: {0}")]
    ParseError(String),
}

/// Port for capturing one spoken response.
#[async_trait]
pub trait Listener: Send + Sync {
    /// Listen for a bounded window and return the best-effort lowercased
    /// transcript. `Ok(None)` means silence or unintelligible speech.
    async fn listen(&self, language: Language) -> Result<Option<String>, ListenError>;
}
