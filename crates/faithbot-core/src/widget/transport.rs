//! Port for the widget's call to the relay endpoint.

use faithbot_types::chat::ChatRequest;
use faithbot_types::error::TransportError;
use faithbot_types::reply::RelayResult;

/// Sends one chat turn to the relay and returns its reply.
///
/// Implementations must resolve every call (success or error); the widget
/// relies on that to clear its pending indicator.
pub trait RelayTransport: Send + Sync {
    fn send(
        &self,
        request: &ChatRequest,
    ) -> impl std::future::Future<Output = Result<RelayResult, TransportError>> + Send;
}
