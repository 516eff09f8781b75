//! Terminal rendering of widget bubbles.
//!
//! The widget keeps an append-only bubble list (apart from the typing
//! indicator, which is removed on resolve). `BubblePrinter` remembers how
//! far it has printed and emits only what is new.

use std::io::Write;

use console::style;

use faithbot_core::widget::{Author, Bubble, BubbleKind};

/// Format one bubble for the terminal.
///
/// Returns `None` for bubbles the terminal already shows: the user's own
/// message (echoed by readline) and the typing indicator (printed
/// separately while the request is in flight).
pub fn format_bubble(bubble: &Bubble, title: &str) -> Option<String> {
    match (bubble.author, bubble.kind) {
        (_, BubbleKind::Typing) | (Author::User, _) => None,
        (Author::Bot, BubbleKind::Message) => {
            let mut out = format!("\n  {}\n", style(title).cyan().bold());
            for line in bubble.text.lines() {
                out.push_str("  ");
                out.push_str(line);
                out.push('\n');
            }
            Some(out)
        }
        (Author::Bot, BubbleKind::Error) => Some(format!(
            "\n  {} {}\n",
            style("!").red().bold(),
            style(&bubble.text).red()
        )),
    }
}

/// Tracks which bubbles have already been written.
#[derive(Debug, Default)]
pub struct BubblePrinter {
    printed: usize,
}

impl BubblePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print bubbles added since the last call.
    ///
    /// Typing bubbles are never counted as printed, so the list can shrink
    /// when one is removed; the cursor is clamped to the current length.
    pub fn print_new(&mut self, bubbles: &[Bubble], title: &str, out: &mut impl Write) {
        let settled = bubbles
            .iter()
            .take_while(|b| b.kind != BubbleKind::Typing)
            .count();
        self.printed = self.printed.min(settled);
        for bubble in &bubbles[self.printed..settled] {
            if let Some(text) = format_bubble(bubble, title) {
                let _ = write!(out, "{text}");
            }
        }
        self.printed = settled;
    }
}

/// Print the header shown when the chat starts.
pub fn print_banner(out: &mut impl Write, title: &str, endpoint: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "  {}", style(title).cyan().bold());
    let _ = writeln!(out, "  {}  {}", style("Relay:").bold(), style(endpoint).dim());
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    let _ = writeln!(out, "  {}", style("---").dim());
}

#[cfg(test)]
mod tests {
    use super::*;
    use faithbot_core::widget::{ConversationWidget, WidgetConfig};

    fn render(printer: &mut BubblePrinter, widget: &ConversationWidget) -> String {
        let mut buf = Vec::new();
        printer.print_new(widget.bubbles(), "FaithBot", &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_format_bot_message_indents_each_line() {
        console::set_colors_enabled(false);
        let bubble = Bubble {
            author: Author::Bot,
            kind: BubbleKind::Message,
            text: "line one\nline two".to_string(),
        };
        let out = format_bubble(&bubble, "FaithBot").unwrap();
        assert!(out.contains("  FaithBot\n"));
        assert!(out.contains("  line one\n  line two\n"));
    }

    #[test]
    fn test_format_skips_user_and_typing() {
        let user = Bubble {
            author: Author::User,
            kind: BubbleKind::Message,
            text: "hi".to_string(),
        };
        let typing = Bubble {
            author: Author::Bot,
            kind: BubbleKind::Typing,
            text: "…".to_string(),
        };
        assert!(format_bubble(&user, "FaithBot").is_none());
        assert!(format_bubble(&typing, "FaithBot").is_none());
    }

    #[test]
    fn test_printer_emits_only_new_bubbles() {
        console::set_colors_enabled(false);
        let mut widget = ConversationWidget::new(WidgetConfig::default());
        let mut printer = BubblePrinter::new();

        widget.open();
        let first = render(&mut printer, &widget);
        assert!(first.contains(&widget.config().welcome));

        // Re-rendering without changes prints nothing.
        assert_eq!(render(&mut printer, &widget), "");

        widget.set_input("hello");
        let request = widget.begin_submit();
        assert!(request.is_some());
        // User bubble is echoed by readline and the typing bubble is pending.
        assert_eq!(render(&mut printer, &widget), "");

        widget.finish(Ok(faithbot_types::reply::RelayResult {
            text: "peace be with you".to_string(),
            structured: None,
        }));
        let reply = render(&mut printer, &widget);
        assert!(reply.contains("peace be with you"));
        assert!(!reply.contains("hello"));
    }

    #[test]
    fn test_printer_shows_error_bubble() {
        console::set_colors_enabled(false);
        let mut widget = ConversationWidget::new(WidgetConfig::default());
        let mut printer = BubblePrinter::new();
        widget.open();
        render(&mut printer, &widget);

        widget.set_input("hello");
        widget.begin_submit();
        widget.finish(Err(faithbot_types::error::TransportError::Timeout));
        let out = render(&mut printer, &widget);
        assert!(out.contains(faithbot_core::widget::state::NETWORK_ERROR_TEXT));
    }
}
