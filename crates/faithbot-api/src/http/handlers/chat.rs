//! Relay chat endpoint.
//!
//! POST {route} (default `/api/chat`)
//!
//! Body: `{ "message": string, "history"?: [{ "role": "user"|"assistant", "content": string }] }`
//! Reply: `200 { "text": string, "structured": StructuredReply | null }`,
//! `400 { "error" }` for malformed bodies, `500 { "error" }` when the
//! completion service fails.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::Instrument;

use faithbot_types::chat::ChatRequest;
use faithbot_types::reply::RelayResult;

use crate::http::error::AppError;
use crate::state::AppState;

/// Parse the raw body.
///
/// The body is read as bytes rather than through `Json<T>` so that an empty
/// body and a missing `Content-Type` get the same `{error}` shape as any
/// other malformed request.
fn parse_chat_request(body: &[u8]) -> Result<ChatRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::BadRequest("request body is empty".to_string()));
    }
    serde_json::from_slice::<ChatRequest>(body)
        .map_err(|e| AppError::BadRequest(format!("invalid request body: {e}")))
}

/// POST {route} -- relay one chat turn.
pub async fn chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RelayResult>, AppError> {
    let request_id = uuid::Uuid::now_v7();
    let span = tracing::info_span!("chat", %request_id);

    async move {
        let request = parse_chat_request(&body)?;
        let result = state.relay.relay(request).await?;
        Ok(Json(result))
    }
    .instrument(span)
    .await
}

/// OPTIONS {route} -- CORS preflight without `Origin` headers still succeeds.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
