//! HTTP relay application layer for FaithBot.
//!
//! The `faithbot` binary (see `main.rs`) wires configuration, tracing and the
//! CLI around the router and state exposed here.

pub mod http;
pub mod state;
