//! Completion Client: one bounded call to the external completion service.

use std::time::Duration;

use faithbot_types::config::ProviderSettings;
use faithbot_types::error::RelayError;
use faithbot_types::llm::{CompletionRequest, Message, OutputSchema};
use faithbot_types::reply::StructuredReply;

use crate::llm::box_provider::BoxLlmProvider;

/// Per-call parameters for the completion service.
#[derive(Debug, Clone)]
pub struct CompletionSettings {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self::from(&ProviderSettings::default())
    }
}

impl From<&ProviderSettings> for CompletionSettings {
    fn from(settings: &ProviderSettings) -> Self {
        Self {
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
            timeout: Duration::from_secs(settings.timeout_secs),
        }
    }
}

/// Sends the persona, the caller's history and the new message to a provider
/// and returns the raw completion text.
pub struct CompletionClient {
    provider: BoxLlmProvider,
    settings: CompletionSettings,
}

impl CompletionClient {
    pub fn new(provider: BoxLlmProvider, settings: CompletionSettings) -> Self {
        Self { provider, settings }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Build the provider request.
    ///
    /// `history` is copied verbatim: no reordering, deduplication or role
    /// alternation checks. The new user message is always appended last.
    pub fn build_request(
        &self,
        system_prompt: &str,
        history: &[Message],
        user_message: Option<&str>,
    ) -> CompletionRequest {
        let mut messages = history.to_vec();
        messages.push(Message::user(user_message.unwrap_or_default()));

        CompletionRequest {
            model: self.settings.model.clone(),
            messages,
            system: Some(system_prompt.to_string()),
            max_tokens: self.settings.max_tokens,
            temperature: Some(self.settings.temperature),
            output_schema: Some(OutputSchema {
                name: "StructuredReply".to_string(),
                schema: StructuredReply::json_schema(),
                strict: None,
            }),
        }
    }

    /// Run the completion and return its raw text.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Upstream`] when the provider fails, returns no
    /// choices, or does not answer within the configured timeout.
    pub async fn complete(
        &self,
        system_prompt: &str,
        history: &[Message],
        user_message: Option<&str>,
    ) -> Result<String, RelayError> {
        let request = self.build_request(system_prompt, history, user_message);

        let response = tokio::time::timeout(self.settings.timeout, self.provider.complete(&request))
            .await
            .map_err(|_| {
                RelayError::Upstream(format!(
                    "{} timed out after {}s",
                    self.provider.name(),
                    self.settings.timeout.as_secs_f64()
                ))
            })?
            .map_err(|e| RelayError::Upstream(format!("{}: {e}", self.provider.name())))?;

        tracing::debug!(
            provider = self.provider.name(),
            model = %response.model,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "completion received"
        );

        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockError, MockProvider};
    use faithbot_types::llm::MessageRole;

    fn client_with(provider: MockProvider, timeout: Duration) -> CompletionClient {
        let settings = CompletionSettings {
            timeout,
            ..CompletionSettings::default()
        };
        CompletionClient::new(BoxLlmProvider::new(provider), settings)
    }

    #[test]
    fn test_build_request_forwards_history_verbatim() {
        let client = client_with(MockProvider::replying(""), Duration::from_secs(1));
        // Two user turns in a row: not normalized.
        let history = vec![
            Message::user("one"),
            Message::user("one"),
            Message::assistant("two"),
        ];

        let request = client.build_request("persona", &history, Some("three"));

        assert_eq!(request.messages.len(), 4);
        assert_eq!(&request.messages[..3], history.as_slice());
        assert_eq!(request.messages[3], Message::user("three"));
        assert_eq!(request.system.as_deref(), Some("persona"));
        assert_eq!(request.model, "gpt-4o-mini");
        assert!(request.output_schema.is_some());
    }

    #[test]
    fn test_build_request_defaults_missing_message_to_empty() {
        let client = client_with(MockProvider::replying(""), Duration::from_secs(1));
        let request = client.build_request("persona", &[], None);
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, MessageRole::User);
        assert_eq!(request.messages[0].content, "");
    }

    #[tokio::test]
    async fn test_complete_returns_raw_text() {
        let provider = MockProvider::replying("Be still and know.");
        let seen = provider.seen.clone();
        let client = client_with(provider, Duration::from_secs(1));

        let text = client
            .complete("persona", &[Message::assistant("hello")], Some("hi"))
            .await
            .unwrap();

        assert_eq!(text, "Be still and know.");
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].messages.last().unwrap().content, "hi");
    }

    #[tokio::test]
    async fn test_complete_maps_provider_error_to_upstream() {
        let client = client_with(
            MockProvider::failing(MockError::Provider("connection refused".to_string())),
            Duration::from_secs(1),
        );
        let err = client.complete("persona", &[], Some("hi")).await.unwrap_err();
        assert!(matches!(err, RelayError::Upstream(ref m) if m.contains("connection refused")));
    }

    #[tokio::test]
    async fn test_complete_maps_no_choices_to_upstream() {
        let client = client_with(MockProvider::failing(MockError::Empty), Duration::from_secs(1));
        let err = client.complete("persona", &[], Some("hi")).await.unwrap_err();
        assert!(matches!(err, RelayError::Upstream(_)));
    }

    #[tokio::test]
    async fn test_complete_times_out() {
        let provider = MockProvider::replying("too late").with_delay(Duration::from_secs(5));
        let client = client_with(provider, Duration::from_millis(20));
        let err = client.complete("persona", &[], Some("hi")).await.unwrap_err();
        assert!(matches!(err, RelayError::Upstream(ref m) if m.contains("timed out")));
    }
}
