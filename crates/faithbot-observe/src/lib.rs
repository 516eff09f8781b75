//! Observability setup for FaithBot: structured logging and optional
//! OpenTelemetry span export.

pub mod tracing_setup;
