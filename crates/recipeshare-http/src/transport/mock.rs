//! Scripted transport for tests and offline tooling.

use std::collections::VecDeque;

use async_trait::async_trait;
use http::StatusCode;
use tokio::sync::Mutex;

use super::{Transport, TransportError};
use crate::request::ApiRequest;
use crate::response::ApiResponse;

/// Replays queued responses in order and records every request it sees.
///
/// Once the queue is empty every request gets an empty `404`.
#[derive(Debug, Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    seen: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    /// Create a transport with no queued replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply.
    pub async fn push(&self, reply: Result<ApiResponse, TransportError>) {
        self.replies.lock().await.push_back(reply);
    }

    /// Queue a JSON reply.
    pub async fn push_json(&self, status: StatusCode, body: serde_json::Value) {
        self.push(Ok(ApiResponse::json(status, body))).await;
    }

    /// Requests received so far, oldest first.
    pub async fn requests(&self) -> Vec<ApiRequest> {
        self.seen.lock().await.clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.seen.lock().await.push(request);
        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(ApiResponse::empty(StatusCode::NOT_FOUND)))
    }
}
