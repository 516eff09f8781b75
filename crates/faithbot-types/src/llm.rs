//! LLM request/response types for FaithBot.
//!
//! These types model the data shapes for completion provider interactions:
//! the conversation messages forwarded by the relay, the completion request
//! and response, usage tracking, and provider errors.

use serde::{Deserialize, Serialize};

/// Role of a message in a relayed conversation.
///
/// The system persona is never part of the history; it travels separately as
/// [`CompletionRequest::system`], so only the two conversational roles exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// A single message in a conversation.
///
/// Messages are values: the widget and the relay each own their own copy of
/// the history and never mutate a message after it is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// JSON schema constraint for providers that support structured output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSchema {
    /// Schema name reported to the provider (e.g. "StructuredReply").
    pub name: String,
    /// The JSON schema document.
    pub schema: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
}

/// Request to an LLM provider for a completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    /// Conversation in order; the newest user message is last.
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<OutputSchema>,
}

/// Response from an LLM provider for a non-streaming completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    /// Raw text of the first choice. Empty when the provider returned a
    /// choice without content.
    pub content: String,
    pub model: String,
    pub usage: Usage,
}

/// Token usage for a completion request/response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Errors from LLM provider operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("provider returned no choices")]
    EmptyResponse,

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
