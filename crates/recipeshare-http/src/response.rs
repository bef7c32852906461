//! Response model and the raw failure type fed to the error normalizer.

use bytes::Bytes;
use http::header::{CONTENT_TYPE, HeaderValue};
use http::{HeaderMap, StatusCode};

use crate::transport::TransportError;

/// Body of a backend response.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// No body bytes at all.
    Empty,
    /// A JSON document (Content-Type mentions `json` and the bytes parsed).
    Json(serde_json::Value),
    /// Anything else, passed through untouched.
    Raw(Bytes),
}

impl ResponseBody {
    /// Classify raw body bytes using the response Content-Type.
    pub fn classify(content_type: Option<&str>, bytes: Bytes) -> Self {
        if bytes.is_empty() {
            return Self::Empty;
        }

        let is_json = content_type
            .map(|ct| ct.to_ascii_lowercase().contains("json"))
            .unwrap_or(false);

        if is_json {
            if let Ok(value) = serde_json::from_slice(&bytes) {
                return Self::Json(value);
            }
        }

        Self::Raw(bytes)
    }

    /// The JSON value, if this is a JSON body.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }
}

/// A response as returned by the transport.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Classified body.
    pub body: ResponseBody,
}

impl ApiResponse {
    /// Build a JSON response with a matching Content-Type header.
    pub fn json(status: StatusCode, value: serde_json::Value) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Self {
            status,
            headers,
            body: ResponseBody::Json(value),
        }
    }

    /// Build a response with no body.
    pub fn empty(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: ResponseBody::Empty,
        }
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// A failed request before normalization.
///
/// This type never leaves the pipeline: [`Pipeline::execute`](crate::Pipeline::execute)
/// turns every `RawFailure` into a `NormalizedError`.
#[derive(Debug)]
pub enum RawFailure {
    /// The backend answered with a non-2xx status.
    Status(ApiResponse),
    /// No response arrived.
    Transport(TransportError),
}

impl RawFailure {
    /// The HTTP status, or `None` for transport failures.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status(response) => Some(response.status),
            Self::Transport(_) => None,
        }
    }
}

/// Result of sending a request, as seen by response interceptors.
pub type Outcome = Result<ApiResponse, RawFailure>;
