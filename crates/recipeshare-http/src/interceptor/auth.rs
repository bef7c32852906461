//! Bearer credential injection.

use std::sync::Arc;

use async_trait::async_trait;
use http::header::{AUTHORIZATION, HeaderValue};
use tracing::{trace, warn};

use recipeshare_core::traits::token::TokenSource;

use super::Interceptor;
use crate::request::ApiRequest;

/// Adds `Authorization: Bearer <token>` when a non-empty token is available.
///
/// The token is fetched from the [`TokenSource`] on every request. Without
/// a token the request passes through untouched.
#[derive(Clone)]
pub struct AuthInjector {
    tokens: Arc<dyn TokenSource>,
}

impl AuthInjector {
    /// Stage name.
    pub const NAME: &'static str = "auth-injector";

    /// Create an injector reading from `tokens`.
    pub fn new(tokens: Arc<dyn TokenSource>) -> Self {
        Self { tokens }
    }

    /// Attach `token` to `request` if it is non-empty.
    pub fn apply(mut request: ApiRequest, token: Option<&str>) -> ApiRequest {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return request;
        };

        match HeaderValue::from_str(&format!("Bearer {token}")) {
            Ok(mut value) => {
                value.set_sensitive(true);
                request.headers.insert(AUTHORIZATION, value);
                trace!(method = %request.method, path = %request.path, "Bearer credential attached");
            }
            Err(_) => {
                warn!(
                    method = %request.method,
                    path = %request.path,
                    "Stored token is not a valid header value; sending request without credential"
                );
            }
        }
        request
    }
}

impl std::fmt::Debug for AuthInjector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthInjector").finish_non_exhaustive()
    }
}

#[async_trait]
impl Interceptor for AuthInjector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn on_request(&self, request: ApiRequest) -> ApiRequest {
        let token = self.tokens.current_token().await;
        Self::apply(request, token.as_deref())
    }
}
