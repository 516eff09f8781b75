//! Widget state machine.
//!
//! States: `Closed`, `OpenIdle`, `OpenPending`. Visibility and the pending
//! request are tracked separately, so a panel closed mid-request still
//! receives the reply.

use faithbot_types::chat::ChatRequest;
use faithbot_types::error::TransportError;
use faithbot_types::llm::Message;
use faithbot_types::reply::RelayResult;

use super::config::WidgetConfig;
use super::transport::RelayTransport;

/// Shown in place of a reply when the relay call fails.
pub const NETWORK_ERROR_TEXT: &str = "Network error. Please try again.";
/// Text of the transient pending indicator.
pub const TYPING_TEXT: &str = "…";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Closed,
    OpenIdle,
    OpenPending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    Bot,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubbleKind {
    Message,
    /// Pending indicator; removed when the request resolves.
    Typing,
    Error,
}

/// One entry in the visible conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bubble {
    pub author: Author,
    pub kind: BubbleKind,
    pub text: String,
}

impl Bubble {
    fn new(author: Author, kind: BubbleKind, text: impl Into<String>) -> Self {
        Self {
            author,
            kind,
            text: text.into(),
        }
    }
}

/// Result of [`ConversationWidget::send`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Nothing was submitted (closed panel, blank input, or a request already pending).
    Ignored,
    Replied(String),
    Failed,
}

/// One independent widget instance.
#[derive(Debug)]
pub struct ConversationWidget {
    config: WidgetConfig,
    open: bool,
    welcomed: bool,
    pending: bool,
    input: String,
    history: Vec<Message>,
    bubbles: Vec<Bubble>,
}

impl ConversationWidget {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            config,
            open: false,
            welcomed: false,
            pending: false,
            input: String::new(),
            history: Vec::new(),
            bubbles: Vec::new(),
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn state(&self) -> WidgetState {
        match (self.open, self.pending) {
            (false, _) => WidgetState::Closed,
            (true, false) => WidgetState::OpenIdle,
            (true, true) => WidgetState::OpenPending,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Messages exchanged with the relay, oldest first.
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Everything currently displayed, oldest first.
    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Show the panel. The welcome bubble is added on the first open only and
    /// is never sent to the relay.
    pub fn open(&mut self) {
        self.open = true;
        if !self.welcomed {
            self.welcomed = true;
            self.bubbles
                .push(Bubble::new(Author::Bot, BubbleKind::Message, self.config.welcome.clone()));
        }
    }

    /// Hide the panel. History and display are kept.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Take the input field and start a request.
    ///
    /// Returns the payload to send, or `None` when the submission is a no-op:
    /// the panel is closed, the trimmed input is empty, or a request is
    /// already pending. The payload's history holds the turns before this
    /// message; the message itself travels in `message`.
    pub fn begin_submit(&mut self) -> Option<ChatRequest> {
        if !self.open || self.pending {
            return None;
        }
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return None;
        }

        self.input.clear();
        let request = ChatRequest {
            message: text.clone(),
            history: self.history.clone(),
        };
        self.bubbles
            .push(Bubble::new(Author::User, BubbleKind::Message, text.clone()));
        self.history.push(Message::user(text));
        self.bubbles
            .push(Bubble::new(Author::Bot, BubbleKind::Typing, TYPING_TEXT));
        self.pending = true;

        Some(request)
    }

    /// Resolve the pending request.
    ///
    /// A failure shows an error bubble but leaves history untouched: the
    /// user's turn stays, no assistant turn is recorded.
    pub fn finish(&mut self, result: Result<RelayResult, TransportError>) -> SendOutcome {
        if !self.pending {
            return SendOutcome::Ignored;
        }
        self.pending = false;
        self.bubbles.retain(|b| b.kind != BubbleKind::Typing);

        match result {
            Ok(reply) => {
                self.bubbles
                    .push(Bubble::new(Author::Bot, BubbleKind::Message, reply.text.clone()));
                self.history.push(Message::assistant(reply.text.clone()));
                SendOutcome::Replied(reply.text)
            }
            Err(e) => {
                tracing::warn!(error = %e, "relay request failed");
                self.bubbles
                    .push(Bubble::new(Author::Bot, BubbleKind::Error, NETWORK_ERROR_TEXT));
                SendOutcome::Failed
            }
        }
    }

    /// Submit the current input through `transport` and apply the reply.
    pub async fn send<T: RelayTransport>(&mut self, transport: &T) -> SendOutcome {
        let Some(request) = self.begin_submit() else {
            return SendOutcome::Ignored;
        };
        let result = transport.send(&request).await;
        self.finish(result)
    }
}
