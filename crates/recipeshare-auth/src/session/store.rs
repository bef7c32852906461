//! The client's single source of truth for "who is logged in".

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::watch;
use tracing::{info, warn};

use recipeshare_core::config::StorageConfig;
use recipeshare_core::error::{AppError, ErrorKind};
use recipeshare_core::result::AppResult;
use recipeshare_core::traits::store::KeyValueStore;
use recipeshare_core::traits::token::TokenSource;
use recipeshare_core::types::{Credentials, Session};
use recipeshare_http::ApiClient;

/// Login endpoint, relative to the API base URL.
pub const LOGIN_PATH: &str = "/api/users/login";

/// Only the part of the persisted session needed to answer `current_user_id`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredIdentity {
    #[serde(default)]
    user_id: Option<i64>,
    #[serde(default, rename = "userid")]
    legacy_user_id: Option<i64>,
}

/// Owns the session: the durable token and session entries plus a
/// replay-one channel of the current value.
///
/// `login` and `logout` are the only writers. Every other method only
/// reads, and reads go to storage each time, so no state is cached
/// between requests.
#[derive(Debug)]
pub struct SessionStore {
    /// Durable key-value storage.
    storage: Arc<dyn KeyValueStore>,
    /// Key holding the raw token.
    token_key: String,
    /// Key holding the serialized session.
    session_key: String,
    /// Current session; starts at `None`.
    current: watch::Sender<Option<Session>>,
}

impl SessionStore {
    /// Create a store over `storage` using the key names from `config`.
    pub fn new(storage: Arc<dyn KeyValueStore>, config: &StorageConfig) -> Self {
        let (current, _) = watch::channel(None);
        Self {
            storage,
            token_key: config.token_key.clone(),
            session_key: config.session_key.clone(),
            current,
        }
    }

    /// Post `credentials` to the login endpoint and persist the resulting session.
    ///
    /// On failure nothing is persisted or published and the pipeline's
    /// error is returned as is.
    pub async fn login(&self, client: &ApiClient, credentials: &Credentials) -> AppResult<Session> {
        let session: Session = client.post(LOGIN_PATH, credentials).await?;

        if !session.has_token() {
            warn!(user_id = session.user_id, "Login response carried an empty token");
            return Err(AppError::session("Login response did not include a token"));
        }

        let serialized = serde_json::to_string(&session)?;
        self.storage.set(&self.token_key, &session.token).await?;
        if let Err(e) = self.storage.set(&self.session_key, &serialized).await {
            if let Err(rollback) = self.storage.remove(&self.token_key).await {
                warn!(error = %rollback, "Failed to roll back token after partial login");
            }
            return Err(e);
        }

        self.current.send_replace(Some(session.clone()));
        info!(
            user_id = session.user_id,
            username = %session.username,
            backend = self.storage.backend(),
            "Logged in"
        );

        Ok(session)
    }

    /// Remove both durable entries and publish `None`.
    ///
    /// Never fails: storage errors are logged and the published value is
    /// still cleared.
    pub async fn logout(&self) {
        for key in [&self.token_key, &self.session_key] {
            if let Err(e) = self.storage.remove(key).await {
                warn!(key = %key, error = %e, "Failed to remove session entry during logout");
            }
        }

        self.current.send_replace(None);
        info!("Logged out");
    }

    /// The persisted token, if any.
    pub async fn token(&self) -> AppResult<Option<String>> {
        self.storage.get(&self.token_key).await
    }

    /// True iff a non-empty token is persisted.
    pub async fn is_logged_in(&self) -> bool {
        matches!(self.token().await, Ok(Some(token)) if !token.is_empty())
    }

    /// The user id from the persisted session.
    ///
    /// Returns `Ok(None)` when no session is stored. A stored value that is
    /// not valid JSON is an [`ErrorKind::Session`] error; callers should
    /// treat it as a reason to force a fresh login.
    pub async fn current_user_id(&self) -> AppResult<Option<i64>> {
        let Some(raw) = self.storage.get(&self.session_key).await? else {
            return Ok(None);
        };

        let identity: StoredIdentity = serde_json::from_str(&raw).map_err(|e| {
            AppError::with_source(ErrorKind::Session, "Stored session is corrupted", e)
        })?;

        Ok(identity.user_id.or(identity.legacy_user_id))
    }

    /// Publish the persisted session, e.g. after a restart.
    ///
    /// Returns `Ok(None)` and publishes nothing when no usable session is
    /// stored. Corrupted data fails the same way as [`current_user_id`](Self::current_user_id).
    pub async fn restore(&self) -> AppResult<Option<Session>> {
        let Some(raw) = self.storage.get(&self.session_key).await? else {
            return Ok(None);
        };

        let session: Session = serde_json::from_str(&raw).map_err(|e| {
            AppError::with_source(ErrorKind::Session, "Stored session is corrupted", e)
        })?;

        if !self.is_logged_in().await || !session.has_token() {
            return Ok(None);
        }

        self.current.send_replace(Some(session.clone()));
        info!(user_id = session.user_id, "Session restored");
        Ok(Some(session))
    }

    /// Subscribe to session changes. The receiver sees the current value immediately.
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.current.subscribe()
    }

    /// The most recently published session.
    pub fn current(&self) -> Option<Session> {
        self.current.borrow().clone()
    }
}

#[async_trait]
impl TokenSource for SessionStore {
    async fn current_token(&self) -> Option<String> {
        match self.token().await {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "Failed to read token; sending request without credential");
                None
            }
        }
    }
}
