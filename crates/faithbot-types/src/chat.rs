//! Wire payloads for the relay endpoint.

use serde::{Deserialize, Serialize};

use crate::llm::Message;

/// Inbound body of `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The new user message. Absent is treated as empty.
    #[serde(default)]
    pub message: String,
    /// Prior turns, oldest first, forwarded verbatim.
    #[serde(default)]
    pub history: Vec<Message>,
}

/// Error body returned with every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MessageRole;

    #[test]
    fn test_history_defaults_to_empty() {
        let req: ChatRequest = serde_json::from_str(r#"{"message":"hello"}"#).unwrap();
        assert_eq!(req.message, "hello");
        assert!(req.history.is_empty());
    }

    #[test]
    fn test_history_preserves_order() {
        let req: ChatRequest = serde_json::from_str(
            r#"{"message":"and now?","history":[
                {"role":"user","content":"first"},
                {"role":"assistant","content":"second"},
                {"role":"user","content":"third"}
            ]}"#,
        )
        .unwrap();
        let contents: Vec<&str> = req.history.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, ["first", "second", "third"]);
        assert_eq!(req.history[1].role, MessageRole::Assistant);
    }

    #[test]
    fn test_history_must_be_an_array() {
        let result = serde_json::from_str::<ChatRequest>(r#"{"message":"x","history":"nope"}"#);
        assert!(result.is_err());
    }
}
