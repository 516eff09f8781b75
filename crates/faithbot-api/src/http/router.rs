//! Axum router configuration with middleware.
//!
//! Routes: the chat endpoint (POST + OPTIONS) and `/health`.
//! Middleware: CORS, fixed cross-origin headers, request tracing.

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let route = normalize_route(&state.config.server.route);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    tracing::debug!(%route, "mounting chat endpoint");

    Router::new()
        .route(
            &route,
            post(handlers::chat::chat).options(handlers::chat::preflight),
        )
        .route("/health", get(health_check))
        .layer(cors)
        // CorsLayer only decorates requests carrying CORS headers; every
        // response must still advertise the policy.
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn normalize_route(route: &str) -> String {
    let trimmed = route.trim();
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
