//! Supported dialogue languages

use std::fmt;

/// Languages the voting dialogue can run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Hindi,
}

impl Language {
    /// Language code sent to the speech-synthesis endpoint
    pub const fn synthesis_code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
        }
    }

    /// Language hint sent to the speech-recognition endpoint
    pub const fn recognition_code(&self) -> &'static str {
        match self {
            Self::English => "en-IN",
            Self::Hindi => "hi-IN",
        }
    }

    /// Match a spoken language choice.
    ///
    /// A transcript containing "english" selects English; "hindi" or the
    /// Devanagari word selects Hindi. Anything else is no match.
    pub fn from_spoken(transcript: &str) -> Option<Self> {
        let transcript = transcript.to_lowercase();
        if transcript.contains("english") {
            Some(Self::English)
        } else if transcript.contains("hindi") || transcript.contains("हिंदी") {
            Some(Self::Hindi)
        } else {
            None
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "English"),
            Self::Hindi => write!(f, "Hindi"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes() {
        assert_eq!(Language::English.synthesis_code(), "en");
        assert_eq!(Language::Hindi.synthesis_code(), "hi");
        assert_eq!(Language::English.recognition_code(), "en-IN");
        assert_eq!(Language::Hindi.recognition_code(), "hi-IN");
    }

    #[test]
    fn spoken_english() {
        assert_eq!(Language::from_spoken("english please"), Some(Language::English));
        assert_eq!(Language::from_spoken("I want English"), Some(Language::English));
    }

    #[test]
    fn spoken_hindi() {
        assert_eq!(Language::from_spoken("hindi"), Some(Language::Hindi));
        assert_eq!(Language::from_spoken("मुझे हिंदी चाहिए"), Some(Language::Hindi));
    }

    #[test]
    fn spoken_unrecognized() {
        assert_eq!(Language::from_spoken("french"), None);
        assert_eq!(Language::from_spoken(""), None);
    }
}
