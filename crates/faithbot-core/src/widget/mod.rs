//! Conversation Widget: client-side conversation state.
//!
//! The widget is a plain state machine over an ordered history and a
//! display list of bubbles. Rendering to a concrete surface (a terminal,
//! a page) and the network call are supplied from outside through
//! [`transport::RelayTransport`].

pub mod config;
pub mod state;
pub mod transport;

pub use config::WidgetConfig;
pub use state::{Author, Bubble, BubbleKind, ConversationWidget, SendOutcome, WidgetState};
pub use transport::RelayTransport;
