//! Configuration types for FaithBot.
//!
//! `RelayConfig` represents the top-level `config.toml` that controls the
//! HTTP server, the completion provider, and the persona. All fields have
//! sensible defaults so an empty file (or no file) is a valid configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the relay.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelayConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub provider: ProviderSettings,
    #[serde(default)]
    pub persona: PersonaSettings,
}

/// Where the relay listens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Path of the chat endpoint.
    #[serde(default = "default_route")]
    pub route: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_route() -> String {
    "/api/chat".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            route: default_route(),
        }
    }
}

/// Completion provider selection and call parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Human-readable name; well-known names ("openai", "gemini", "mistral")
    /// infer the base URL when `base_url` is unset.
    #[serde(default = "default_provider_name")]
    pub name: String,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Bound on a single completion call, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_provider_name() -> String {
    "openai".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> u32 {
    1024
}

/// Completion timeout used when none (or zero) is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            name: default_provider_name(),
            base_url: None,
            model: default_model(),
            api_key_env: default_api_key_env(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Persona identity and output-contract knobs baked into the system prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaSettings {
    #[serde(default = "default_persona_name")]
    pub name: String,
    /// Maximum characters of quoted text per verse.
    #[serde(default = "default_verse_text_cap")]
    pub verse_text_cap: usize,
}

fn default_persona_name() -> String {
    "FaithBot".to_string()
}

fn default_verse_text_cap() -> usize {
    220
}

impl Default for PersonaSettings {
    fn default() -> Self {
        Self {
            name: default_persona_name(),
            verse_text_cap: default_verse_text_cap(),
        }
    }
}
