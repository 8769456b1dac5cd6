//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// News-search API key
    pub api_key: Option<String>,
    /// Speech-recognition API key
    pub speech_api_key: Option<String>,
    /// News search language code
    pub lang: Option<String>,
    /// News search country code
    pub country: Option<String>,
    /// News search result cap
    pub max_results: Option<u32>,
    /// Microphone listen window in seconds
    pub listen_secs: Option<u64>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            speech_api_key: None,
            lang: Some("en".to_string()),
            country: Some("in".to_string()),
            max_results: Some(10),
            listen_secs: Some(8),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            speech_api_key: other.speech_api_key.or(self.speech_api_key),
            lang: other.lang.or(self.lang),
            country: other.country.or(self.country),
            max_results: other.max_results.or(self.max_results),
            listen_secs: other.listen_secs.or(self.listen_secs),
        }
    }

    /// Get the search language, or "en" if not set
    pub fn lang_or_default(&self) -> &str {
        self.lang.as_deref().unwrap_or("en")
    }

    /// Get the search country, or "in" if not set
    pub fn country_or_default(&self) -> &str {
        self.country.as_deref().unwrap_or("in")
    }

    /// Get the result cap, or 10 if not set
    pub fn max_results_or_default(&self) -> u32 {
        self.max_results.unwrap_or(10)
    }

    /// Get the listen window, or 8 seconds if not set
    pub fn listen_secs_or_default(&self) -> u64 {
        self.listen_secs.unwrap_or(8)
    }
}
