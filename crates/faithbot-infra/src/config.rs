//! Configuration loader for FaithBot.
//!
//! Reads `config.toml` and deserializes it into [`RelayConfig`]. Falls back
//! to defaults when the file is missing or malformed, so the relay always
//! starts.

use std::path::{Path, PathBuf};

use secrecy::SecretString;

use faithbot_types::config::{DEFAULT_TIMEOUT_SECS, ProviderSettings, RelayConfig};

/// Resolve the data directory holding `config.toml`.
///
/// Priority:
/// 1. `FAITHBOT_HOME` environment variable
/// 2. `~/.faithbot`
/// 3. `.faithbot` in the current directory
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("FAITHBOT_HOME") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".faithbot");
    }

    PathBuf::from(".faithbot")
}

/// Load configuration from `explicit` if given, else `{data_dir}/config.toml`.
pub async fn load_relay_config(explicit: Option<&Path>) -> RelayConfig {
    match explicit {
        Some(path) => load_config_file(path).await,
        None => load_config_file(&resolve_data_dir().join("config.toml")).await,
    }
}

/// Load configuration from a single file.
///
/// - If the file does not exist, returns [`RelayConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and returns the default.
pub async fn load_config_file(config_path: &Path) -> RelayConfig {
    let content = match tokio::fs::read_to_string(config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return RelayConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return RelayConfig::default();
        }
    };

    match toml::from_str::<RelayConfig>(&content) {
        Ok(config) => {
            tracing::info!(path = %config_path.display(), "loaded configuration");
            sanitize(config)
        }
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            RelayConfig::default()
        }
    }
}

/// Replace values that would make every request fail.
///
/// A zero completion timeout expires before the provider can answer, so it
/// falls back to the default.
fn sanitize(mut config: RelayConfig) -> RelayConfig {
    if config.provider.timeout_secs == 0 {
        tracing::warn!(
            default = DEFAULT_TIMEOUT_SECS,
            "provider.timeout_secs = 0 is not usable, using the default"
        );
        config.provider.timeout_secs = DEFAULT_TIMEOUT_SECS;
    }
    config
}

/// Read the provider API key from the environment variable named in settings.
///
/// Blank values count as missing.
pub fn resolve_api_key(settings: &ProviderSettings) -> Option<SecretString> {
    api_key_from(std::env::var(&settings.api_key_env).ok())
}

fn api_key_from(value: Option<String>) -> Option<SecretString> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(SecretString::from)
}
