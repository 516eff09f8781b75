//! Application state wiring the relay together.
//!
//! AppState holds the relay service used by both the HTTP handlers and the
//! one-shot `ask` command. It is cheap to clone and holds no per-request data.

use std::sync::Arc;

use anyhow::Context;

use faithbot_core::relay::completion::{CompletionClient, CompletionSettings};
use faithbot_core::relay::service::RelayService;
use faithbot_infra::config::resolve_api_key;
use faithbot_infra::llm::create_provider;
use faithbot_types::config::RelayConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<RelayService>,
    pub config: Arc<RelayConfig>,
}

impl AppState {
    pub fn new(relay: RelayService, config: RelayConfig) -> Self {
        Self {
            relay: Arc::new(relay),
            config: Arc::new(config),
        }
    }

    /// Build the provider from configuration and wire the relay service.
    pub fn init(config: RelayConfig) -> anyhow::Result<Self> {
        let api_key = resolve_api_key(&config.provider);
        if api_key.is_none() {
            anyhow::bail!(
                "{} is not set. Export it or point `provider.api_key_env` at another variable.",
                config.provider.api_key_env
            );
        }

        let provider = create_provider(&config.provider, api_key)
            .context("failed to create completion provider")?;
        let client = CompletionClient::new(provider, CompletionSettings::from(&config.provider));
        let relay = RelayService::new(client, &config.persona);

        tracing::info!(
            provider = %config.provider.name,
            model = %config.provider.model,
            timeout_secs = config.provider.timeout_secs,
            "relay initialized"
        );

        Ok(Self::new(relay, config))
    }
}
