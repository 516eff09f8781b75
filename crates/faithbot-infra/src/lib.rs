//! Infrastructure layer for FaithBot.
//!
//! Contains implementations of the ports defined in `faithbot-core`: the
//! OpenAI-compatible completion provider and the HTTP relay transport used by
//! the widget, plus the configuration file loader.

pub mod config;
pub mod llm;
pub mod transport;
