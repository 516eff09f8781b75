//! Main chat loop orchestration.
//!
//! Opens the widget, then alternates between reading a line and resolving
//! one relay request. The widget owns history; this loop only moves text
//! between the terminal and the widget.

use std::io::Write;
use std::time::Duration;

use console::style;

use faithbot_core::widget::state::TYPING_TEXT;
use faithbot_core::widget::{
    ConversationWidget, RelayTransport, SendOutcome, WidgetConfig, WidgetState,
};
use faithbot_infra::transport::{HttpRelayTransport, resolve_endpoint};
use faithbot_types::llm::MessageRole;

use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::{BubblePrinter, print_banner};

/// Options for `faithbot chat`.
#[derive(Debug, Clone)]
pub struct ChatOptions {
    pub server: String,
    pub widget: WidgetConfig,
    pub timeout: Duration,
}

/// Run the interactive chat loop against a relay server.
pub async fn run_chat_loop(options: ChatOptions) -> anyhow::Result<()> {
    let endpoint = resolve_endpoint(&options.server, &options.widget.api_url);
    let transport = HttpRelayTransport::new(endpoint, options.timeout)
        .map_err(|e| anyhow::anyhow!("failed to build HTTP client: {e}"))?;

    let title = options.widget.title.clone();
    let mut widget = ConversationWidget::new(options.widget);
    let mut printer = BubblePrinter::new();

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, mut out) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    print_banner(&mut out, &title, transport.endpoint());
    widget.open();
    printer.print_new(widget.bubbles(), &title, &mut out);

    loop {
        match chat_input.read_line().await {
            InputEvent::Eof => {
                let _ = writeln!(out, "\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                let _ = writeln!(
                    out,
                    "\n  {}",
                    style("Press Ctrl+D to exit, or keep chatting.").dim()
                );
            }
            InputEvent::Line(line) => {
                if let Some(cmd) = commands::parse(&line) {
                    match cmd {
                        ChatCommand::Help => commands::print_help(&mut out),
                        ChatCommand::Clear => chat_input.clear(),
                        ChatCommand::Close => {
                            widget.close();
                            let _ = writeln!(
                                out,
                                "  {}",
                                style("Conversation hidden. /open to continue.").dim()
                            );
                        }
                        ChatCommand::Open => {
                            widget.open();
                            printer.print_new(widget.bubbles(), &title, &mut out);
                        }
                        ChatCommand::History => print_history(&widget, &title, &mut out),
                        ChatCommand::Exit => {
                            let _ = writeln!(out, "\n  {}", style("Session ended.").dim());
                            break;
                        }
                        ChatCommand::Unknown(name) => {
                            let _ = writeln!(
                                out,
                                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(name).dim()
                            );
                        }
                    }
                    continue;
                }

                widget.set_input(line);
                let outcome = submit(&mut widget, &transport, &mut out).await;
                if outcome == SendOutcome::Ignored && widget.state() == WidgetState::Closed {
                    let _ = writeln!(
                        out,
                        "  {}",
                        style("Conversation is hidden. /open to continue.").dim()
                    );
                }
                printer.print_new(widget.bubbles(), &title, &mut out);
            }
        }
    }

    chat_input.flush();
    Ok(())
}

/// Send the widget's current input, showing the typing indicator meanwhile.
async fn submit<T: RelayTransport>(
    widget: &mut ConversationWidget,
    transport: &T,
    out: &mut impl Write,
) -> SendOutcome {
    let Some(request) = widget.begin_submit() else {
        return SendOutcome::Ignored;
    };
    let _ = writeln!(out, "  {}", style(TYPING_TEXT).dim());
    tracing::debug!(history = request.history.len(), "sending chat turn");
    let result = transport.send(&request).await;
    widget.finish(result)
}

fn print_history(widget: &ConversationWidget, title: &str, out: &mut impl Write) {
    let _ = writeln!(out);
    if widget.history().is_empty() {
        let _ = writeln!(out, "  {}", style("No turns yet.").dim());
    }
    for msg in widget.history() {
        let label = match msg.role {
            MessageRole::User => format!("{}", style("You").green().bold()),
            MessageRole::Assistant => format!("{}", style(title).cyan().bold()),
        };
        let preview: String = msg.content.chars().take(100).collect();
        let ellipsis = if msg.content.chars().count() > 100 { "..." } else { "" };
        let _ = writeln!(out, "  {label} {preview}{ellipsis}");
    }
    let _ = writeln!(out);
}
