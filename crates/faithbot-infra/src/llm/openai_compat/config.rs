//! Configuration and per-provider defaults for OpenAI-compatible providers.
//!
//! Each provider that speaks the OpenAI chat completions protocol gets a
//! factory function returning an [`OpenAiCompatConfig`] with its base URL.

use secrecy::SecretString;

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const MISTRAL_BASE_URL: &str = "https://api.mistral.ai/v1";

/// Configuration for an OpenAI-compatible completion provider.
///
/// Used to construct an [`super::OpenAiCompatibleProvider`].
pub struct OpenAiCompatConfig {
    /// Human-readable provider name (e.g., "openai", "gemini").
    pub provider_name: String,
    /// Base URL for the API (e.g., "https://api.openai.com/v1").
    pub base_url: String,
    pub api_key: SecretString,
    /// Default model when a request leaves `model` empty.
    pub model: String,
}

/// Base URL for a well-known provider name, if there is one.
pub fn well_known_base_url(provider_name: &str) -> Option<&'static str> {
    match provider_name {
        "openai" => Some(OPENAI_BASE_URL),
        "gemini" => Some(GEMINI_BASE_URL),
        "mistral" => Some(MISTRAL_BASE_URL),
        _ => None,
    }
}

/// OpenAI default configuration.
pub fn openai_defaults(api_key: SecretString, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "openai".into(),
        base_url: OPENAI_BASE_URL.into(),
        api_key,
        model: model.into(),
    }
}

/// Google Gemini default configuration (OpenAI-compatible beta endpoint).
pub fn gemini_defaults(api_key: SecretString, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "gemini".into(),
        base_url: GEMINI_BASE_URL.into(),
        api_key,
        model: model.into(),
    }
}

/// Mistral AI default configuration.
pub fn mistral_defaults(api_key: SecretString, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "mistral".into(),
        base_url: MISTRAL_BASE_URL.into(),
        api_key,
        model: model.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_known_base_urls() {
        assert_eq!(well_known_base_url("openai"), Some(OPENAI_BASE_URL));
        assert_eq!(well_known_base_url("gemini"), Some(GEMINI_BASE_URL));
        assert_eq!(well_known_base_url("mistral"), Some(MISTRAL_BASE_URL));
        assert_eq!(well_known_base_url("local-llama"), None);
    }

    #[test]
    fn test_defaults_set_name_and_model() {
        let config = gemini_defaults(SecretString::from("k".to_string()), "gemini-2.5-flash");
        assert_eq!(config.provider_name, "gemini");
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.base_url, GEMINI_BASE_URL);
    }
}
