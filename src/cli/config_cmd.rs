//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(unknown_key(key));
    }

    let mut config = store.load().await?;

    match key {
        "api_key" => config.api_key = Some(value.to_string()),
        "speech_api_key" => config.speech_api_key = Some(value.to_string()),
        "lang" => config.lang = Some(validate_code(key, value)?),
        "country" => config.country = Some(validate_code(key, value)?),
        "max_results" => {
            let parsed: u32 = value.parse().map_err(|_| ConfigError::ValidationError {
                key: key.to_string(),
                message: "Value must be a positive integer".to_string(),
            })?;
            if parsed == 0 {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must be at least 1".to_string(),
                });
            }
            config.max_results = Some(parsed);
        }
        "listen_secs" => {
            let parsed: u64 = value.parse().map_err(|_| ConfigError::ValidationError {
                key: key.to_string(),
                message: "Value must be a positive integer".to_string(),
            })?;
            if parsed == 0 || parsed > 60 {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must be between 1 and 60 seconds".to_string(),
                });
            }
            config.listen_secs = Some(parsed);
        }
        _ => unreachable!(), // Already validated
    }

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(unknown_key(key));
    }

    let config = store.load().await?;

    let value = match key {
        "api_key" => config.api_key.map(|s| mask_key(&s)),
        "speech_api_key" => config.speech_api_key.map(|s| mask_key(&s)),
        "lang" => config.lang,
        "country" => config.country,
        "max_results" => config.max_results.map(|n| n.to_string()),
        "listen_secs" => config.listen_secs.map(|n| n.to_string()),
        _ => unreachable!(),
    };

    match value {
        Some(v) => presenter.output(&v),
        None => presenter.output("(not set)"),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    let not_set = || "(not set)".to_string();
    presenter.key_value(
        "api_key",
        &config.api_key.map(|s| mask_key(&s)).unwrap_or_else(not_set),
    );
    presenter.key_value(
        "speech_api_key",
        &config
            .speech_api_key
            .map(|s| mask_key(&s))
            .unwrap_or_else(not_set),
    );
    presenter.key_value("lang", config.lang.as_deref().unwrap_or("(not set)"));
    presenter.key_value("country", config.country.as_deref().unwrap_or("(not set)"));
    presenter.key_value(
        "max_results",
        &config
            .max_results
            .map(|n| n.to_string())
            .unwrap_or_else(not_set),
    );
    presenter.key_value(
        "listen_secs",
        &config
            .listen_secs
            .map(|n| n.to_string())
            .unwrap_or_else(not_set),
    );

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().display().to_string());
    Ok(())
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    }
}

/// Language and country codes: two ASCII letters, stored lowercased
fn validate_code(key: &str, value: &str) -> Result<String, ConfigError> {
    let value = value.trim();
    if value.len() == 2 && value.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(value.to_lowercase())
    } else {
        Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: "Value must be a two-letter code (e.g., en, in)".to_string(),
        })
    }
}

/// Keep the first four characters, mask the rest
fn mask_key(key: &str) -> String {
    let total = key.chars().count();
    if total <= 4 {
        "****".to_string()
    } else {
        let prefix: String = key.chars().take(4).collect();
        format!("{}{}", prefix, "*".repeat(total - 4))
    }
}
