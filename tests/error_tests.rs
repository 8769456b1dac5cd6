//! Error scenario integration tests

use std::process::Command;

fn agora_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_agora"))
}

#[test]
fn missing_api_key_error() {
    // Without a key in env or config, the news flow must fail fast,
    // before any prompting or network access
    let output = agora_bin()
        .env_remove("GNEWS_API_KEY")
        .env("HOME", "/nonexistent")
        .env("XDG_CONFIG_HOME", "/nonexistent")
        .args(["news", "--location", "Bhubaneswar"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("API") || stderr.contains("api_key") || stderr.contains("key"),
        "Expected error about missing API key, got: {}",
        stderr
    );
}

#[test]
fn config_get_unknown_key() {
    let output = agora_bin()
        .args(["config", "get", "unknown_key"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown") || stderr.contains("Valid"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_unknown_key() {
    let output = agora_bin()
        .args(["config", "set", "unknown_key", "value"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown") || stderr.contains("Valid"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_rejects_bad_values() {
    let config_home = tempfile::tempdir().expect("temp dir");

    for (key, value) in [
        ("max_results", "zero"),
        ("max_results", "0"),
        ("listen_secs", "600"),
        ("lang", "english"),
        ("country", "x"),
    ] {
        let output = agora_bin()
            .env("XDG_CONFIG_HOME", config_home.path())
            .args(["config", "set", key, value])
            .output()
            .expect("Failed to execute command");

        assert!(
            !output.status.success(),
            "expected rejection for {} = {}",
            key,
            value
        );
    }
}

#[test]
fn config_set_get_round_trip() {
    let config_home = tempfile::tempdir().expect("temp dir");

    let output = agora_bin()
        .env("XDG_CONFIG_HOME", config_home.path())
        .args(["config", "set", "country", "US"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let output = agora_bin()
        .env("XDG_CONFIG_HOME", config_home.path())
        .args(["config", "get", "country"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    // Codes are stored lowercased
    assert!(stdout.contains("us"));
}

#[test]
fn config_get_masks_api_key() {
    let config_home = tempfile::tempdir().expect("temp dir");

    let output = agora_bin()
        .env("XDG_CONFIG_HOME", config_home.path())
        .args(["config", "set", "api_key", "abcd1234secret"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let output = agora_bin()
        .env("XDG_CONFIG_HOME", config_home.path())
        .args(["config", "get", "api_key"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("abcd"));
    assert!(!stdout.contains("secret"));
}
