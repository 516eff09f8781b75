//! OpenAI-compatible completion provider.
//!
//! A single [`OpenAiCompatibleProvider`] serves OpenAI, Google Gemini,
//! Mistral, and any self-hosted server speaking the chat completions
//! protocol, via configurable base URLs.
//!
//! Uses [`async_openai`] for type-safe request/response handling.

pub mod config;

use async_openai::config::OpenAIConfig;
use async_openai::types::chat::{
    ChatCompletionRequestAssistantMessage, ChatCompletionRequestAssistantMessageContent,
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
    ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessage,
    ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest, ResponseFormat,
    ResponseFormatJsonSchema,
};
use async_openai::Client;
use secrecy::ExposeSecret;

use faithbot_core::llm::provider::LlmProvider;
use faithbot_types::llm::{
    CompletionRequest, CompletionResponse, LlmError, MessageRole, Usage,
};

use self::config::OpenAiCompatConfig;

/// Unified provider for any OpenAI-compatible API.
///
/// Does NOT derive Debug: the `async_openai::Client` holds the API key.
pub struct OpenAiCompatibleProvider {
    client: Client<OpenAIConfig>,
    provider_name: String,
    model: String,
}

impl OpenAiCompatibleProvider {
    /// Create a new OpenAI-compatible provider from a configuration.
    pub fn new(config: OpenAiCompatConfig) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.api_key.expose_secret())
            .with_api_base(&config.base_url);

        Self {
            client: Client::with_config(openai_config),
            provider_name: config.provider_name,
            model: config.model,
        }
    }

    /// Build a [`CreateChatCompletionRequest`] from a generic [`CompletionRequest`].
    ///
    /// Order is preserved: system persona first, then the conversation as given.
    fn build_request(&self, request: &CompletionRequest) -> CreateChatCompletionRequest {
        let mut messages: Vec<ChatCompletionRequestMessage> =
            Vec::with_capacity(request.messages.len() + 1);

        if let Some(ref system) = request.system {
            messages.push(ChatCompletionRequestMessage::System(
                ChatCompletionRequestSystemMessage {
                    content: ChatCompletionRequestSystemMessageContent::Text(system.clone()),
                    name: None,
                },
            ));
        }

        for msg in &request.messages {
            let oai_msg = match msg.role {
                MessageRole::User => {
                    ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                        content: ChatCompletionRequestUserMessageContent::Text(msg.content.clone()),
                        name: None,
                    })
                }
                MessageRole::Assistant => {
                    #[allow(deprecated)]
                    ChatCompletionRequestMessage::Assistant(
                        ChatCompletionRequestAssistantMessage {
                            content: Some(ChatCompletionRequestAssistantMessageContent::Text(
                                msg.content.clone(),
                            )),
                            refusal: None,
                            name: None,
                            audio: None,
                            tool_calls: None,
                            function_call: None,
                        },
                    )
                }
            };
            messages.push(oai_msg);
        }

        let model = if request.model.is_empty() {
            self.model.clone()
        } else {
            request.model.clone()
        };

        let response_format = request.output_schema.as_ref().map(|output| {
            ResponseFormat::JsonSchema {
                json_schema: ResponseFormatJsonSchema {
                    description: None,
                    name: output.name.clone(),
                    schema: Some(output.schema.clone()),
                    strict: output.strict,
                },
            }
        });

        CreateChatCompletionRequest {
            model,
            messages,
            max_completion_tokens: Some(request.max_tokens),
            temperature: request.temperature.map(|t| t as f32),
            response_format,
            ..Default::default()
        }
    }
}

impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &str {
        &self.provider_name
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let oai_request = self.build_request(request);

        let response = self
            .client
            .chat()
            .create(oai_request)
            .await
            .map_err(map_openai_error)?;

        let choice = response.choices.first().ok_or(LlmError::EmptyResponse)?;
        let content = choice.message.content.clone().unwrap_or_default();

        let usage = response
            .usage
            .map(|u| Usage {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
            })
            .unwrap_or_default();

        Ok(CompletionResponse {
            id: response.id,
            content,
            model: response.model,
            usage,
        })
    }
}

/// Map an `async_openai::error::OpenAIError` to an [`LlmError`].
fn map_openai_error(err: async_openai::error::OpenAIError) -> LlmError {
    use async_openai::error::OpenAIError;

    match &err {
        OpenAIError::ApiError(api_err) => {
            let code = api_err.code.as_deref().unwrap_or("");
            let error_type = api_err.r#type.as_deref().unwrap_or("");

            if code == "invalid_api_key"
                || error_type == "authentication_error"
                || api_err.message.contains("Incorrect API key")
            {
                LlmError::AuthenticationFailed
            } else if code == "rate_limit_exceeded" || error_type == "rate_limit_error" {
                LlmError::RateLimited {
                    retry_after_ms: None,
                }
            } else {
                LlmError::Provider {
                    message: err.to_string(),
                }
            }
        }
        OpenAIError::Reqwest(reqwest_err) => match reqwest_err.status().map(|s| s.as_u16()) {
            Some(401) => LlmError::AuthenticationFailed,
            Some(429) => LlmError::RateLimited {
                retry_after_ms: None,
            },
            _ => LlmError::Provider {
                message: err.to_string(),
            },
        },
        OpenAIError::JSONDeserialize(_, content) => {
            LlmError::Deserialization(format!("failed to parse response: {content}"))
        }
        OpenAIError::InvalidArgument(msg) => LlmError::InvalidRequest(msg.clone()),
        _ => LlmError::Provider {
            message: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faithbot_types::llm::{Message, OutputSchema};
    use secrecy::SecretString;

    fn provider() -> OpenAiCompatibleProvider {
        OpenAiCompatibleProvider::new(config::openai_defaults(
            SecretString::from("sk-test".to_string()),
            "gpt-4o-mini",
        ))
    }

    fn request(model: &str) -> CompletionRequest {
        CompletionRequest {
            model: model.to_string(),
            messages: vec![
                Message::user("I lost my job"),
                Message::assistant("I'm sorry."),
                Message::user("What now?"),
            ],
            system: Some("You are FaithBot".to_string()),
            max_tokens: 256,
            temperature: Some(0.7),
            output_schema: Some(OutputSchema {
                name: "StructuredReply".to_string(),
                schema: serde_json::json!({"type": "object"}),
                strict: None,
            }),
        }
    }

    #[test]
    fn test_factory_sets_name_and_model() {
        let provider = provider();
        assert_eq!(provider.name(), "openai");
        assert_eq!(provider.model, "gpt-4o-mini");
    }

    #[test]
    fn test_build_request_puts_system_first_and_keeps_order() {
        let oai = provider().build_request(&request("gpt-4o"));
        assert_eq!(oai.model, "gpt-4o");
        assert_eq!(oai.messages.len(), 4);
        assert!(matches!(oai.messages[0], ChatCompletionRequestMessage::System(_)));
        assert!(matches!(oai.messages[1], ChatCompletionRequestMessage::User(_)));
        assert!(matches!(oai.messages[2], ChatCompletionRequestMessage::Assistant(_)));
        assert!(matches!(oai.messages[3], ChatCompletionRequestMessage::User(_)));
        assert_eq!(oai.max_completion_tokens, Some(256));
        assert!(matches!(oai.response_format, Some(ResponseFormat::JsonSchema { .. })));
    }

    #[test]
    fn test_build_request_falls_back_to_default_model() {
        let oai = provider().build_request(&request(""));
        assert_eq!(oai.model, "gpt-4o-mini");
    }

    #[test]
    fn test_map_invalid_argument() {
        let err = map_openai_error(async_openai::error::OpenAIError::InvalidArgument(
            "bad".to_string(),
        ));
        assert!(matches!(err, LlmError::InvalidRequest(ref m) if m == "bad"));
    }
}
