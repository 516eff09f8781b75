//! Relay Service: the orchestration behind `POST /api/chat`.
//!
//! Validates the request, calls the completion client once, then coerces
//! and renders synchronously. Nothing is retried and nothing is retained
//! between requests.

use faithbot_types::chat::ChatRequest;
use faithbot_types::config::PersonaSettings;
use faithbot_types::error::RelayError;
use faithbot_types::reply::RelayResult;

use super::coerce::coerce;
use super::completion::CompletionClient;
use super::prompt::build_system_prompt;
use super::render::render;

pub struct RelayService {
    client: CompletionClient,
    system_prompt: String,
}

impl RelayService {
    pub fn new(client: CompletionClient, persona: &PersonaSettings) -> Self {
        Self {
            client,
            system_prompt: build_system_prompt(persona),
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Handle one chat turn.
    ///
    /// History content is forwarded as-is; only its shape was checked when
    /// the request was deserialized.
    ///
    /// # Errors
    ///
    /// - [`RelayError::BadRequest`] if `message` is blank.
    /// - [`RelayError::Upstream`] if the completion call fails.
    pub async fn relay(&self, request: ChatRequest) -> Result<RelayResult, RelayError> {
        if request.message.trim().is_empty() {
            return Err(RelayError::BadRequest("message must not be empty".to_string()));
        }

        let raw = self
            .client
            .complete(&self.system_prompt, &request.history, Some(&request.message))
            .await?;

        let structured = coerce(&raw);
        let text = render(structured.as_ref(), &raw);

        tracing::info!(
            provider = self.client.provider_name(),
            history_len = request.history.len(),
            structured = structured.is_some(),
            "relayed chat turn"
        );

        Ok(RelayResult { text, structured })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::llm::box_provider::BoxLlmProvider;
    use crate::relay::completion::CompletionSettings;
    use crate::testing::{MockError, MockProvider};
    use faithbot_types::llm::Message;

    fn service(provider: MockProvider) -> RelayService {
        let settings = CompletionSettings {
            timeout: Duration::from_secs(2),
            ..CompletionSettings::default()
        };
        RelayService::new(
            CompletionClient::new(BoxLlmProvider::new(provider), settings),
            &PersonaSettings::default(),
        )
    }

    fn request(message: &str, history: Vec<Message>) -> ChatRequest {
        ChatRequest {
            message: message.to_string(),
            history,
        }
    }

    #[tokio::test]
    async fn test_structured_completion_is_rendered() {
        let completion = r#"{"topic":"work","guidance":["Take one day at a time"],
            "verses":[{"ref":"Philippians 4:6","text":"..."}],
            "prayers":["Lord, calm my heart"],"ask":"What specifically worries you?"}"#;
        let svc = service(MockProvider::replying(completion));

        let result = svc
            .relay(request("I'm anxious about my job", vec![]))
            .await
            .unwrap();

        assert!(result.text.starts_with("Here are a few thoughts:\n• Take one day at a time"));
        assert!(result.text.ends_with("What specifically worries you?"));
        let structured = result.structured.unwrap();
        assert_eq!(structured.verses[0].reference, "Philippians 4:6");
    }

    #[tokio::test]
    async fn test_plain_prose_passes_through() {
        let prose = "I hear you. Would you like to share more?";
        let svc = service(MockProvider::replying(prose));

        let result = svc.relay(request("hello", vec![])).await.unwrap();

        assert!(result.structured.is_none());
        assert_eq!(result.text, prose);
    }

    #[tokio::test]
    async fn test_empty_completion_uses_fallback_text() {
        let svc = service(MockProvider::replying(""));
        let result = svc.relay(request("hello", vec![])).await.unwrap();
        assert!(result.structured.is_none());
        assert_eq!(result.text, "Sorry, I could not get a response.");
    }

    #[tokio::test]
    async fn test_history_forwarded_in_order_with_message_last() {
        let provider = MockProvider::replying("ok");
        let seen = provider.seen.clone();
        let svc = service(provider);
        let history = vec![
            Message::user("I lost my job"),
            Message::assistant("I'm sorry to hear that."),
        ];

        svc.relay(request("What now?", history.clone())).await.unwrap();

        let seen = seen.lock().unwrap();
        let sent = &seen[0];
        assert_eq!(&sent.messages[..2], history.as_slice());
        assert_eq!(sent.messages[2], Message::user("What now?"));
        assert_eq!(sent.system.as_deref(), Some(svc.system_prompt()));
    }

    #[tokio::test]
    async fn test_blank_message_is_rejected_without_calling_provider() {
        let provider = MockProvider::replying("ok");
        let seen = provider.seen.clone();
        let svc = service(provider);

        let err = svc.relay(request("   ", vec![])).await.unwrap_err();

        assert!(matches!(err, RelayError::BadRequest(_)));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_failure_is_surfaced() {
        let svc = service(MockProvider::failing(MockError::Provider("503".to_string())));
        let err = svc.relay(request("hello", vec![])).await.unwrap_err();
        assert!(matches!(err, RelayError::Upstream(_)));
    }
}
