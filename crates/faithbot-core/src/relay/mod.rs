//! Server-side relay: completion call, response coercion, summary rendering.
//!
//! Data flow for one request:
//! `ChatRequest` -> [`completion::CompletionClient`] -> raw text ->
//! [`coerce::coerce`] -> [`render::render`] -> `RelayResult`.

pub mod coerce;
pub mod completion;
pub mod prompt;
pub mod render;
pub mod service;
