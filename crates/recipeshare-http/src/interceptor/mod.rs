//! Pipeline stages.
//!
//! An [`Interceptor`] may rewrite the request before it is sent and the
//! outcome after it returns. The [`ErrorNormalizer`] is the terminal stage
//! and is not an interceptor: it changes the failure type itself.

pub mod auth;
pub mod normalizer;
pub mod sanitizer;

use async_trait::async_trait;

use crate::request::ApiRequest;
use crate::response::Outcome;

pub use auth::AuthInjector;
pub use normalizer::{ErrorNormalizer, safe_message};
pub use sanitizer::ResponseSanitizer;

/// A cross-cutting request/response transform.
///
/// Both hooks default to passing their input through, so a stage only
/// implements the side it cares about.
#[async_trait]
pub trait Interceptor: Send + Sync + 'static {
    /// Stage name used in logs and by [`Pipeline::stages`](crate::Pipeline::stages).
    fn name(&self) -> &'static str;

    /// Rewrite the request before it leaves the client.
    async fn on_request(&self, request: ApiRequest) -> ApiRequest {
        request
    }

    /// Rewrite the outcome after the transport returns.
    fn on_response(&self, outcome: Outcome) -> Outcome {
        outcome
    }
}
