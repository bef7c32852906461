//! Typed JSON client on top of the pipeline.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use recipeshare_core::config::ApiConfig;
use recipeshare_core::error::AppError;
use recipeshare_core::result::AppResult;
use recipeshare_core::traits::token::TokenSource;

use crate::pipeline::Pipeline;
use crate::request::ApiRequest;
use crate::response::{ApiResponse, ResponseBody};
use crate::transport::{ReqwestTransport, Transport};

/// Issues requests through the [`Pipeline`] and decodes JSON bodies.
///
/// Cheap to clone; clones share the same pipeline.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pipeline: Arc<Pipeline>,
}

impl ApiClient {
    /// Wrap an existing pipeline.
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }

    /// Standard pipeline over a custom transport.
    pub fn with_transport(transport: Arc<dyn Transport>, tokens: Arc<dyn TokenSource>) -> Self {
        Self::new(Pipeline::new(transport, tokens))
    }

    /// Standard pipeline over the reqwest transport.
    pub fn from_config(config: &ApiConfig, tokens: Arc<dyn TokenSource>) -> AppResult<Self> {
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::with_transport(Arc::new(transport), tokens))
    }

    /// The underlying pipeline.
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Send a raw request through the pipeline.
    pub async fn send(&self, request: ApiRequest) -> AppResult<ApiResponse> {
        Ok(self.pipeline.execute(request).await?)
    }

    /// `GET path`, decoding the body as `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let response = self.send(ApiRequest::get(path)).await?;
        decode(response)
    }

    /// `POST path` with a JSON body, decoding the response as `T`.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(ApiRequest::post(path).with_json(body)?).await?;
        decode(response)
    }

    /// `PUT path` with a JSON body, decoding the response as `T`.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(ApiRequest::put(path).with_json(body)?).await?;
        decode(response)
    }

    /// `DELETE path`, ignoring any body.
    pub async fn delete(&self, path: &str) -> AppResult<()> {
        self.send(ApiRequest::delete(path)).await?;
        Ok(())
    }
}

/// Decode a sanitized body. Error messages never echo body content.
fn decode<T: DeserializeOwned>(response: ApiResponse) -> AppResult<T> {
    let value = match response.body {
        ResponseBody::Json(value) => value,
        ResponseBody::Empty => serde_json::Value::Null,
        ResponseBody::Raw(_) => {
            return Err(AppError::serialization("Response was not JSON"));
        }
    };

    serde_json::from_value(value).map_err(|e| {
        debug!(status = %response.status, error = %e, "Response did not match expected shape");
        AppError::serialization("Unexpected response format")
    })
}
