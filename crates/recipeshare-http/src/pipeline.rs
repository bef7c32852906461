//! Ordered composition of the request stages.

use std::sync::Arc;

use tracing::{debug, warn};

use recipeshare_core::error::NormalizedError;
use recipeshare_core::traits::token::TokenSource;

use crate::interceptor::{AuthInjector, ErrorNormalizer, Interceptor, ResponseSanitizer};
use crate::request::ApiRequest;
use crate::response::{ApiResponse, Outcome, RawFailure};
use crate::transport::Transport;

/// Runs every request through a fixed sequence of stages.
///
/// Request hooks run in list order before the transport is called, response
/// hooks run in list order afterwards, and the [`ErrorNormalizer`] always
/// runs last. The standard pipeline is
/// `auth-injector -> response-sanitizer -> error-normalizer`.
#[derive(Clone)]
pub struct Pipeline {
    transport: Arc<dyn Transport>,
    interceptors: Vec<Arc<dyn Interceptor>>,
    normalizer: ErrorNormalizer,
}

impl Pipeline {
    /// The standard pipeline: auth injection, then sanitization, then normalization.
    pub fn new(transport: Arc<dyn Transport>, tokens: Arc<dyn TokenSource>) -> Self {
        let interceptors: Vec<Arc<dyn Interceptor>> = vec![
            Arc::new(AuthInjector::new(tokens)),
            Arc::new(ResponseSanitizer),
        ];
        Self::with_interceptors(transport, interceptors)
    }

    /// A pipeline with a custom interceptor list. Normalization is always appended.
    pub fn with_interceptors(
        transport: Arc<dyn Transport>,
        interceptors: Vec<Arc<dyn Interceptor>>,
    ) -> Self {
        Self {
            transport,
            interceptors,
            normalizer: ErrorNormalizer,
        }
    }

    /// Stage names in execution order.
    pub fn stages(&self) -> Vec<&'static str> {
        self.interceptors
            .iter()
            .map(|i| i.name())
            .chain(std::iter::once(ErrorNormalizer::NAME))
            .collect()
    }

    /// Send `request` through every stage.
    ///
    /// Returns a sanitized 2xx response or a normalized error; nothing else
    /// about a failure survives this call.
    pub async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, NormalizedError> {
        let mut request = request;
        for stage in &self.interceptors {
            request = stage.on_request(request).await;
        }

        let method = request.method.clone();
        let path = request.path.clone();

        let outcome: Outcome = match self.transport.send(request).await {
            Ok(response) if response.is_success() => Ok(response),
            Ok(response) => Err(RawFailure::Status(response)),
            Err(e) => {
                debug!(method = %method, path = %path, error = %e, "Transport failure");
                Err(RawFailure::Transport(e))
            }
        };

        let outcome = self
            .interceptors
            .iter()
            .fold(outcome, |outcome, stage| stage.on_response(outcome));

        outcome.map_err(|failure| {
            let normalized = self.normalizer.normalize(failure);
            warn!(
                method = %method,
                path = %path,
                status = normalized.status_code,
                "Request failed"
            );
            normalized
        })
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages())
            .finish()
    }
}
