//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::speech::Language;

/// Agora - local news browser and voice-guided voting assistant
#[derive(Parser, Debug)]
#[command(name = "agora")]
#[command(version)]
#[command(about = "Local news browser and voice-guided voting assistant")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse local news headlines for a detected or given location
    News {
        /// Skip auto-detection and use this location
        #[arg(short, long, value_name = "PLACE")]
        location: Option<String>,

        /// Search language code (e.g., en)
        #[arg(long, value_name = "LANG")]
        lang: Option<String>,

        /// Search country code (e.g., in)
        #[arg(long, value_name = "COUNTRY")]
        country: Option<String>,

        /// Maximum number of articles to fetch
        #[arg(short, long, value_name = "N")]
        max: Option<u32>,
    },

    /// Run the voice-guided voting dialogue
    Vote {
        /// Dialogue language (skips the spoken language selection)
        #[arg(short = 'L', long, value_enum)]
        language: Option<LanguageArg>,

        /// Microphone listen window in seconds
        #[arg(long, value_name = "SECS")]
        listen_secs: Option<u64>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create the config file with default values
    Init,
    /// Set a config value
    Set { key: String, value: String },
    /// Get a config value
    Get { key: String },
    /// List all config values
    List,
    /// Print the config file path
    Path,
}

/// Dialogue language CLI value
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageArg {
    /// English
    En,
    /// Hindi
    Hi,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::En => Language::English,
            LanguageArg::Hi => Language::Hindi,
        }
    }
}

/// Keys accepted by `config set` / `config get`
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "api_key",
    "speech_api_key",
    "lang",
    "country",
    "max_results",
    "listen_secs",
];

pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn language_arg_maps_to_domain() {
        assert_eq!(Language::from(LanguageArg::En), Language::English);
        assert_eq!(Language::from(LanguageArg::Hi), Language::Hindi);
    }

    #[test]
    fn config_key_validation() {
        assert!(is_valid_config_key("api_key"));
        assert!(is_valid_config_key("listen_secs"));
        assert!(!is_valid_config_key("unknown"));
        assert!(!is_valid_config_key(""));
    }
}
