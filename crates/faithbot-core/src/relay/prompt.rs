//! System persona prompt encoding the output contract.

use faithbot_types::config::PersonaSettings;
use faithbot_types::reply::{MAX_GUIDANCE, MAX_PRAYERS, MAX_VERSES};

const MIN_VERSES: usize = 3;
const MIN_PRAYERS: usize = 2;
const MIN_GUIDANCE: usize = 2;

/// Build the fixed system prompt for the configured persona.
pub fn build_system_prompt(persona: &PersonaSettings) -> String {
    let name = &persona.name;
    let cap = persona.verse_text_cap;

    let mut prompt = String::with_capacity(1024);
    prompt.push_str(&format!(
        "You are {name}, a warm, empathetic Christian coach. Gently encourage the user.\n"
    ));
    prompt.push_str(
        "If they share a problem, respond with a single JSON object and nothing else, \
         with exactly these keys:\n",
    );
    prompt.push_str(
        "{\"topic\": string, \"verses\": [{\"ref\": string, \"text\": string}], \
         \"prayers\": [string], \"guidance\": [string], \"ask\": string}\n",
    );
    prompt.push_str(&format!(
        "- verses: {MIN_VERSES}-{MAX_VERSES} relevant Bible verses; \"ref\" is book chapter:verse, \
         \"text\" is at most {cap} characters.\n"
    ));
    prompt.push_str(&format!(
        "- prayers: {MIN_PRAYERS}-{MAX_PRAYERS} short declarative prayers.\n"
    ));
    prompt.push_str(&format!(
        "- guidance: {MIN_GUIDANCE}-{MAX_GUIDANCE} brief, practical bullets.\n"
    ));
    prompt.push_str("- topic: a few words naming what the user is facing.\n");
    prompt.push_str(
        "- ask: a clarifying follow-up question if one would help, otherwise an empty string.\n",
    );
    prompt.push_str("Be concise. Do not wrap the JSON in Markdown.");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_persona_and_schema_keys() {
        let prompt = build_system_prompt(&PersonaSettings::default());
        assert!(prompt.starts_with("You are FaithBot"));
        for key in ["\"topic\"", "\"verses\"", "\"ref\"", "\"prayers\"", "\"guidance\"", "\"ask\""] {
            assert!(prompt.contains(key), "prompt missing {key}");
        }
    }

    #[test]
    fn test_prompt_encodes_count_targets_and_cap() {
        let persona = PersonaSettings {
            name: "Shepherd".to_string(),
            verse_text_cap: 150,
        };
        let prompt = build_system_prompt(&persona);
        assert!(prompt.starts_with("You are Shepherd"));
        assert!(prompt.contains("3-5 relevant Bible verses"));
        assert!(prompt.contains("2-4 short declarative prayers"));
        assert!(prompt.contains("at most 150 characters"));
    }
}
