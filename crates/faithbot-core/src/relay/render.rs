//! Summary Renderer: one readable string per reply.
//!
//! Section order is fixed: guidance, verses, prayers, then the follow-up
//! question last so the conversation can continue.

use faithbot_types::reply::StructuredReply;

/// Returned when there is neither structured data nor raw text.
pub const FALLBACK_TEXT: &str = "Sorry, I could not get a response.";

pub const GUIDANCE_HEADER: &str = "Here are a few thoughts:";
pub const VERSES_HEADER: &str = "Verses:";
pub const PRAYERS_HEADER: &str = "Prayers:";
const BULLET: &str = "• ";

/// Render a reply. Deterministic given its inputs.
pub fn render(structured: Option<&StructuredReply>, raw: &str) -> String {
    let Some(reply) = structured else {
        return if raw.is_empty() {
            FALLBACK_TEXT.to_string()
        } else {
            raw.to_string()
        };
    };

    let mut lines: Vec<String> = Vec::new();

    if !reply.guidance.is_empty() {
        section(&mut lines, GUIDANCE_HEADER, reply.guidance.iter().cloned());
    }
    if !reply.verses.is_empty() {
        section(
            &mut lines,
            VERSES_HEADER,
            reply.verses.iter().map(|v| format!("{}: {}", v.reference, v.text)),
        );
    }
    if !reply.prayers.is_empty() {
        section(&mut lines, PRAYERS_HEADER, reply.prayers.iter().cloned());
    }
    if !reply.ask.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(reply.ask.clone());
    }

    if lines.is_empty() {
        // Coercion rejects content-free records; guard anyway so text is never empty.
        return render(None, raw);
    }
    lines.join("\n")
}

fn section(lines: &mut Vec<String>, header: &str, items: impl Iterator<Item = String>) {
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(header.to_string());
    lines.extend(items.map(|item| format!("{BULLET}{item}")));
}
