//! HTTP implementation of the widget's [`RelayTransport`].

use std::time::Duration;

use faithbot_core::widget::RelayTransport;
use faithbot_types::chat::{ChatRequest, ErrorBody};
use faithbot_types::error::TransportError;
use faithbot_types::reply::RelayResult;

/// Default client-side bound on one relay call. Longer than the relay's own
/// upstream timeout so its 500 arrives before we give up.
pub const DEFAULT_TRANSPORT_TIMEOUT: Duration = Duration::from_secs(45);

/// Join a relay base URL and a widget `api_url`.
///
/// Absolute `api_url`s are used as-is; paths are appended to `base`.
pub fn resolve_endpoint(base: &str, api_url: &str) -> String {
    if api_url.starts_with("http://") || api_url.starts_with("https://") {
        return api_url.to_string();
    }
    let base = base.trim_end_matches('/');
    if api_url.starts_with('/') {
        format!("{base}{api_url}")
    } else {
        format!("{base}/{api_url}")
    }
}

/// POSTs chat turns as JSON to a relay endpoint.
#[derive(Debug, Clone)]
pub struct HttpRelayTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRelayTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Network(err.to_string())
    }
}

impl RelayTransport for HttpRelayTransport {
    async fn send(&self, request: &ChatRequest) -> Result<RelayResult, TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            return Err(TransportError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let reply: RelayResult = serde_json::from_str(&body)
            .map_err(|e| TransportError::MalformedReply(e.to_string()))?;
        if reply.text.is_empty() {
            return Err(TransportError::MalformedReply("empty text".to_string()));
        }
        Ok(reply)
    }
}
