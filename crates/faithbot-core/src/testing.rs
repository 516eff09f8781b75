//! Test doubles shared by the unit tests in this crate.

use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use faithbot_types::llm::{CompletionRequest, CompletionResponse, LlmError, Usage};

use crate::llm::provider::LlmProvider;

#[derive(Clone)]
pub enum MockResult {
    Content(String),
    Error(MockError),
}

#[derive(Clone)]
pub enum MockError {
    Provider(String),
    Empty,
}

/// Provider that returns a scripted result and records every request it sees.
pub struct MockProvider {
    result: MockResult,
    delay: Option<Duration>,
    pub seen: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockProvider {
    pub fn replying(content: &str) -> Self {
        Self {
            result: MockResult::Content(content.to_string()),
            delay: None,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(error: MockError) -> Self {
        Self {
            result: MockResult::Error(error),
            delay: None,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

impl LlmProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl Future<Output = Result<CompletionResponse, LlmError>> + Send {
        self.seen.lock().unwrap().push(request.clone());
        let result = self.result.clone();
        let delay = self.delay;
        async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            match result {
                MockResult::Content(content) => Ok(CompletionResponse {
                    id: "resp-mock".to_string(),
                    content,
                    model: "mock-model".to_string(),
                    usage: Usage {
                        input_tokens: 12,
                        output_tokens: 34,
                    },
                }),
                MockResult::Error(MockError::Provider(message)) => {
                    Err(LlmError::Provider { message })
                }
                MockResult::Error(MockError::Empty) => Err(LlmError::EmptyResponse),
            }
        }
    }
}
