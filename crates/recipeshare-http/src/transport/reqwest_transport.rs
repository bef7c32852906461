//! reqwest-backed transport.

use std::time::Duration;

use async_trait::async_trait;
use http::header::CONTENT_TYPE;
use tracing::debug;

use recipeshare_core::config::ApiConfig;
use recipeshare_core::error::{AppError, ErrorKind};
use recipeshare_core::result::AppResult;

use super::{Transport, TransportError};
use crate::request::ApiRequest;
use crate::response::{ApiResponse, ResponseBody};

/// Sends requests with a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Build a transport from API configuration.
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connect(err.to_string())
        } else if err.is_body() || err.is_decode() {
            Self::Body(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.url_for(&request.path);
        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .headers(request.headers);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;

        debug!(
            method = %request.method,
            path = %request.path,
            status = status.as_u16(),
            bytes = bytes.len(),
            "Backend responded"
        );

        let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());
        let body = ResponseBody::classify(content_type, bytes);

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}
