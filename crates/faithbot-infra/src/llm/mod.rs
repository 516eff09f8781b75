//! Completion provider implementations.
//!
//! Contains the OpenAI-compatible implementation of the [`LlmProvider`]
//! trait defined in `faithbot-core`, and a factory ([`create_provider`])
//! that constructs it from [`ProviderSettings`].
//!
//! [`LlmProvider`]: faithbot_core::llm::provider::LlmProvider

pub mod openai_compat;

use secrecy::SecretString;

use faithbot_core::llm::box_provider::BoxLlmProvider;
use faithbot_types::config::ProviderSettings;
use faithbot_types::llm::LlmError;

use self::openai_compat::config::{OpenAiCompatConfig, well_known_base_url};
use self::openai_compat::OpenAiCompatibleProvider;

/// Create a [`BoxLlmProvider`] from [`ProviderSettings`].
///
/// An explicit `base_url` wins; otherwise well-known provider names infer
/// theirs, and unknown names default to the OpenAI endpoint.
///
/// # Errors
///
/// Returns [`LlmError::AuthenticationFailed`] if no API key is provided.
pub fn create_provider(
    settings: &ProviderSettings,
    api_key: Option<SecretString>,
) -> Result<BoxLlmProvider, LlmError> {
    let api_key = api_key.ok_or(LlmError::AuthenticationFailed)?;
    let base_url = settings
        .base_url
        .clone()
        .or_else(|| well_known_base_url(&settings.name).map(str::to_string))
        .unwrap_or_else(|| openai_compat::config::OPENAI_BASE_URL.to_string());

    tracing::debug!(provider = %settings.name, %base_url, model = %settings.model, "creating provider");

    let provider = OpenAiCompatibleProvider::new(OpenAiCompatConfig {
        provider_name: settings.name.clone(),
        base_url,
        api_key,
        model: settings.model.clone(),
    });
    Ok(BoxLlmProvider::new(provider))
}
