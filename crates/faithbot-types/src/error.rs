use thiserror::Error;

/// Errors surfaced by the relay for one request.
///
/// Coercion failures are deliberately absent: an unstructured completion is
/// a valid reply, not an error.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Malformed inbound body.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The completion service was unreachable, failed, timed out, or returned
    /// nothing usable.
    #[error("upstream error: {0}")]
    Upstream(String),
}

/// Errors from the widget's call to the relay endpoint.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("relay responded with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed reply: {0}")]
    MalformedReply(String),
}
