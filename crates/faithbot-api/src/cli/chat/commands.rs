//! Slash command parsing for the chat loop.
//!
//! Commands start with `/`; anything else is a message for the relay.

use std::io::Write;

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the terminal screen.
    Clear,
    /// Hide the conversation panel; messages are not sent while closed.
    Close,
    /// Show the conversation panel again.
    Open,
    /// Print the turns the relay will see as history.
    History,
    /// Exit the chat.
    Exit,
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let cmd = trimmed
        .split_whitespace()
        .next()
        .unwrap_or(trimmed)
        .to_lowercase();

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/close" | "/hide" => Some(ChatCommand::Close),
        "/open" | "/show" => Some(ChatCommand::Open),
        "/history" => Some(ChatCommand::History),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help(out: &mut impl Write) {
    let rows = [
        ("/help", "Show this help message"),
        ("/clear", "Clear the screen"),
        ("/close", "Hide the conversation (input is ignored)"),
        ("/open", "Show the conversation again"),
        ("/history", "Show the turns sent with each message"),
        ("/exit", "End the chat"),
    ];

    let _ = writeln!(out);
    let _ = writeln!(out, "  {}", style("Available commands:").bold());
    let _ = writeln!(out);
    for (cmd, help) in rows {
        let _ = writeln!(out, "  {:<10} {}", style(cmd).cyan(), help);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "  {}", style("Ctrl+D to exit").dim());
    let _ = writeln!(out);
}
