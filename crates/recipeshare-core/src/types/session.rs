//! Session and login credential types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Login credentials posted to `/api/users/login`.
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Account email.
    pub email: String,
    /// Plain-text password; only ever sent to the login endpoint.
    pub password: String,
}

impl Credentials {
    /// Create credentials from an email and password.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The authenticated identity and bearer credential held by the client.
///
/// This is both the login response payload and the JSON persisted under
/// the session key. The id is read from `userId`, or from the legacy
/// `userid` key when `userId` is absent; a payload carrying both is valid.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SessionWire")]
pub struct Session {
    /// Backend user id.
    pub user_id: i64,
    /// Opaque bearer token. Missing in a payload reads as empty.
    #[serde(default)]
    pub token: String,
    /// Display username.
    pub username: String,
    /// Account email.
    pub email: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionWire {
    user_id: Option<i64>,
    #[serde(rename = "userid")]
    legacy_user_id: Option<i64>,
    #[serde(default)]
    token: String,
    username: String,
    email: String,
}

impl TryFrom<SessionWire> for Session {
    type Error = String;

    fn try_from(wire: SessionWire) -> Result<Self, Self::Error> {
        let user_id = wire
            .user_id
            .or(wire.legacy_user_id)
            .ok_or_else(|| "missing field `userId`".to_string())?;
        Ok(Self {
            user_id,
            token: wire.token,
            username: wire.username,
            email: wire.email,
        })
    }
}

impl Session {
    /// Whether this session carries a usable token.
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("token", &"<redacted>")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish()
    }
}
