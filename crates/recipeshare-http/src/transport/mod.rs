//! Transport seam between the pipeline and the network.

pub mod mock;
pub mod reqwest_transport;

use async_trait::async_trait;
use thiserror::Error;

use crate::request::ApiRequest;
use crate::response::ApiResponse;

pub use mock::MockTransport;
pub use reqwest_transport::ReqwestTransport;

/// Failure to obtain any HTTP response.
///
/// The text may mention hosts or URLs; it is only ever logged, never
/// surfaced to callers.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request timed out.
    #[error("request timed out")]
    Timeout,
    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connect(String),
    /// The request could not be built or sent.
    #[error("request failed: {0}")]
    Request(String),
    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Sends a fully prepared request.
///
/// A non-2xx status is still `Ok` here; classifying failures is the
/// pipeline's job.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Send `request` and return whatever the backend answered.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}
