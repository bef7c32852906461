//! Failure normalization.

use http::StatusCode;

use recipeshare_core::error::NormalizedError;

use crate::response::RawFailure;

/// Message for a status code, or for a transport failure when `status` is `None`.
pub fn safe_message(status: Option<StatusCode>) -> &'static str {
    match status.map(|s| s.as_u16()) {
        Some(400) => "Invalid request. Please check your input.",
        Some(401) => "Authentication required. Please log in.",
        Some(403) => "You do not have permission to perform this action.",
        Some(404) => "The requested resource was not found.",
        Some(409) => "A conflict occurred. The resource may already exist.",
        Some(422) => "The request could not be processed. Please check your input.",
        Some(500..=599) => "A server error occurred. Please try again later.",
        _ => "An unexpected error occurred. Please try again.",
    }
}

/// Terminal stage: reduces any [`RawFailure`] to a [`NormalizedError`].
///
/// The failure body, headers, and transport error text are dropped here;
/// the result depends on the status code alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorNormalizer;

impl ErrorNormalizer {
    /// Stage name.
    pub const NAME: &'static str = "error-normalizer";

    /// Normalize a failure. Transport failures get status code `0`.
    pub fn normalize(&self, failure: RawFailure) -> NormalizedError {
        let status = failure.status();
        NormalizedError::new(
            status.map(|s| s.as_u16()).unwrap_or(0),
            safe_message(status),
        )
    }
}
