//! Audio clip value object

use std::fmt;

/// Audio formats this crate moves around: MP3 clips come back from the
/// synthesis endpoint, FLAC clips go up to the recognition endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipFormat {
    Mp3,
    Flac,
}

impl ClipFormat {
    /// Get the MIME type string
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Flac => "audio/x-flac",
        }
    }

    /// Get the file extension (with leading dot, for temp file suffixes)
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Mp3 => ".mp3",
            Self::Flac => ".flac",
        }
    }
}

impl fmt::Display for ClipFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mime_type())
    }
}

/// A single utterance worth of encoded audio.
#[derive(Debug, Clone)]
pub struct AudioClip {
    data: Vec<u8>,
    format: ClipFormat,
}

impl AudioClip {
    /// Create a clip from encoded bytes
    pub fn new(data: Vec<u8>, format: ClipFormat) -> Self {
        Self { data, format }
    }

    /// Get the encoded bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume and return the encoded bytes
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Get the clip format
    pub fn format(&self) -> ClipFormat {
        self.format
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
