//! Source of the bearer credential attached to outgoing requests.

use async_trait::async_trait;

/// Supplies the current bearer token.
///
/// Implementations are read once per request and never cached by callers,
/// so a token change is visible to the next request that starts.
#[async_trait]
pub trait TokenSource: Send + Sync + 'static {
    /// The current token, or `None` when no one is logged in.
    async fn current_token(&self) -> Option<String>;
}

/// A fixed token, mostly useful in tests and one-off tooling.
#[derive(Debug, Clone, Default)]
pub struct StaticToken(pub Option<String>);

#[async_trait]
impl TokenSource for StaticToken {
    async fn current_token(&self) -> Option<String> {
        self.0.clone()
    }
}
