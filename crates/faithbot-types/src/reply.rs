//! The structured reply contract and the relay result.
//!
//! A [`StructuredReply`] is the validated object form of a completion. It is
//! either present and well-formed or absent altogether; the relay never hands
//! out a partially filled record.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Upper bound on `verses` (the prompt asks for 3-5).
pub const MAX_VERSES: usize = 5;
/// Upper bound on `prayers` (the prompt asks for 2-4).
pub const MAX_PRAYERS: usize = 4;
/// Upper bound on `guidance` (the prompt asks for 2-4).
pub const MAX_GUIDANCE: usize = 4;

/// A single scripture reference with its quoted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Verse {
    /// Book chapter:verse, e.g. "Philippians 4:6".
    #[serde(rename = "ref")]
    pub reference: String,
    pub text: String,
}

/// Structured completion produced under the persona's output contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct StructuredReply {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub verses: Vec<Verse>,
    #[serde(default)]
    pub prayers: Vec<String>,
    #[serde(default)]
    pub guidance: Vec<String>,
    /// Follow-up question; may be empty.
    #[serde(default)]
    pub ask: String,
}

impl StructuredReply {
    /// Whether rendering this record would produce any text at all.
    ///
    /// `topic` is metadata and is not rendered.
    pub fn has_content(&self) -> bool {
        !self.guidance.is_empty()
            || !self.verses.is_empty()
            || !self.prayers.is_empty()
            || !self.ask.trim().is_empty()
    }

    /// JSON schema of the record, as sent to providers supporting structured output.
    pub fn json_schema() -> serde_json::Value {
        let schema = schemars::schema_for!(StructuredReply);
        serde_json::to_value(&schema).unwrap_or_else(|_| serde_json::json!({ "type": "object" }))
    }
}

/// What the relay returns for one request.
///
/// `text` is never empty: it is rendered from `structured` when present,
/// otherwise it is the raw completion or a fixed fallback string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResult {
    pub text: String,
    pub structured: Option<StructuredReply>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verse_uses_ref_key() {
        let verse = Verse {
            reference: "Psalm 23:1".to_string(),
            text: "The Lord is my shepherd".to_string(),
        };
        let json = serde_json::to_value(&verse).unwrap();
        assert_eq!(json["ref"], "Psalm 23:1");
        assert!(json.get("reference").is_none());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let reply: StructuredReply = serde_json::from_str(r#"{"ask":"How are you?"}"#).unwrap();
        assert!(reply.verses.is_empty());
        assert!(reply.topic.is_empty());
        assert_eq!(reply.ask, "How are you?");
        assert!(reply.has_content());
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result = serde_json::from_str::<StructuredReply>(r#"{"topic":"x","mood":"calm"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_topic_alone_has_no_content() {
        let reply = StructuredReply {
            topic: "anxiety".to_string(),
            ask: "   ".to_string(),
            ..Default::default()
        };
        assert!(!reply.has_content());
    }

    #[test]
    fn test_relay_result_serializes_null_structured() {
        let result = RelayResult {
            text: "plain prose".to_string(),
            structured: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["structured"].is_null());
        assert_eq!(json["text"], "plain prose");
    }

    #[test]
    fn test_json_schema_lists_all_keys() {
        let schema = StructuredReply::json_schema();
        let props = schema["properties"].as_object().unwrap();
        for key in ["topic", "verses", "prayers", "guidance", "ask"] {
            assert!(props.contains_key(key), "missing {key}");
        }
        assert_eq!(schema["additionalProperties"], false);
    }
}
