//! Relay logic and client-side conversation state for FaithBot.
//!
//! This crate defines the ports (`LlmProvider`, `RelayTransport`) that the
//! infrastructure layer implements, and the pure logic between them. It
//! depends only on `faithbot-types` -- never on `faithbot-infra` or any
//! network crate.

pub mod llm;
pub mod relay;
pub mod widget;

#[cfg(test)]
pub(crate) mod testing;
