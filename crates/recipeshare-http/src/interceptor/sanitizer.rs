//! JSON response body sanitization.

use async_trait::async_trait;
use tracing::trace;

use super::Interceptor;
use crate::response::{Outcome, ResponseBody};
use crate::sanitize::sanitize_in_place;

/// Strips markup from every string in a successful JSON response body.
///
/// Empty and non-JSON bodies pass through unchanged. Failures are left to
/// the [`ErrorNormalizer`](super::ErrorNormalizer), which discards their bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseSanitizer;

impl ResponseSanitizer {
    /// Stage name.
    pub const NAME: &'static str = "response-sanitizer";
}

#[async_trait]
impl Interceptor for ResponseSanitizer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn on_response(&self, outcome: Outcome) -> Outcome {
        outcome.map(|mut response| {
            if let ResponseBody::Json(value) = &mut response.body {
                sanitize_in_place(value);
                trace!(status = %response.status, "Response body sanitized");
            }
            response
        })
    }
}
