//! Response Coercion: raw completion text to an optional structured reply.
//!
//! Fails closed. Anything that is not a well-formed [`StructuredReply`]
//! within the contract's limits becomes `None`; there is no field scraping.

use faithbot_types::reply::{MAX_GUIDANCE, MAX_PRAYERS, MAX_VERSES, StructuredReply};

/// Attempt to read `raw` as a [`StructuredReply`].
pub fn coerce(raw: &str) -> Option<StructuredReply> {
    match try_coerce(raw) {
        Ok(reply) => Some(reply),
        Err(reason) => {
            tracing::debug!(%reason, raw_len = raw.len(), "completion is not a structured reply");
            None
        }
    }
}

fn try_coerce(raw: &str) -> Result<StructuredReply, String> {
    let body = strip_code_fence(raw.trim());
    let reply: StructuredReply = serde_json::from_str(body).map_err(|e| e.to_string())?;
    validate(&reply)?;
    Ok(reply)
}

fn validate(reply: &StructuredReply) -> Result<(), String> {
    if reply.verses.len() > MAX_VERSES {
        return Err(format!("{} verses (max {MAX_VERSES})", reply.verses.len()));
    }
    if reply.prayers.len() > MAX_PRAYERS {
        return Err(format!("{} prayers (max {MAX_PRAYERS})", reply.prayers.len()));
    }
    if reply.guidance.len() > MAX_GUIDANCE {
        return Err(format!("{} guidance items (max {MAX_GUIDANCE})", reply.guidance.len()));
    }
    if !reply.has_content() {
        return Err("no renderable content".to_string());
    }
    Ok(())
}

/// Remove one surrounding Markdown fence (```` ``` ```` or ```` ```json ````).
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let Some(inner) = rest.strip_suffix("```") else {
        return text;
    };
    // Drop the info string ("json") on the opening line.
    match inner.split_once('\n') {
        Some((info, body)) if info.trim().chars().all(|c| c.is_ascii_alphanumeric()) => body.trim(),
        _ => inner.trim(),
    }
}
