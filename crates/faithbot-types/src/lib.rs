//! Shared domain types for FaithBot.
//!
//! This crate contains the types that cross component boundaries: the
//! conversation [`llm::Message`], the structured reply contract, the relay
//! request/response payloads, configuration, and their error types.
//!
//! Zero infrastructure dependencies -- only serde, thiserror, schemars.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod reply;
