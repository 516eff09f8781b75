//! One-shot relay turn: `faithbot ask "message"`.

use std::path::Path;

use anyhow::Context;
use console::style;

use faithbot_types::chat::ChatRequest;
use faithbot_types::llm::Message;

use faithbot_api::state::AppState;

/// Read prior turns from a JSON array of `{role, content}` objects.
pub async fn load_history(path: &Path) -> anyhow::Result<Vec<Message>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read history file {}", path.display()))?;
    let history: Vec<Message> = serde_json::from_str(&raw)
        .with_context(|| format!("invalid history file {}", path.display()))?;
    Ok(history)
}

/// Relay a single message and print the reply.
pub async fn ask(
    state: &AppState,
    message: String,
    history_path: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let history = match history_path {
        Some(path) => load_history(path).await?,
        None => Vec::new(),
    };

    let result = state
        .relay
        .relay(ChatRequest { message, history })
        .await
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!();
    println!(
        "  {}",
        style(&state.config.persona.name).cyan().bold()
    );
    for line in result.text.lines() {
        println!("  {line}");
    }
    if result.structured.is_none() {
        println!();
        println!("  {}", style("(unstructured reply)").dim());
    }
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use faithbot_types::llm::MessageRole;

    #[tokio::test]
    async fn test_load_history_reads_turns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        tokio::fs::write(
            &path,
            r#"[{"role":"user","content":"hi"},{"role":"assistant","content":"hello"}]"#,
        )
        .await
        .unwrap();

        let history = load_history(&path).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, MessageRole::User);
        assert_eq!(history[1].content, "hello");
    }

    #[tokio::test]
    async fn test_load_history_missing_file_errors() {
        let err = load_history(Path::new("/nonexistent/faithbot/history.json"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("failed to read history file"));
    }
}
