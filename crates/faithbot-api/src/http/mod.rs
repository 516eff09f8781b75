//! HTTP layer for FaithBot.
//!
//! Axum-based relay endpoint (`POST /api/chat` by default) with permissive
//! CORS so the widget can be embedded on any site.

pub mod error;
pub mod handlers;
pub mod router;
