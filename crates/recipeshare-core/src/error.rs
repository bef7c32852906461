//! Unified client error types for RecipeShare.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. Failures that come back from the
//! backend are first reduced to a [`NormalizedError`] by the request
//! pipeline; only that safe summary ever reaches an `AppError`.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level error kind categorization used across the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// A request failed and was normalized by the pipeline.
    Http,
    /// Session data is missing, rejected, or corrupted.
    Session,
    /// The operation needs a logged-in user and none is stored.
    NotLoggedIn,
    /// Input validation failed before a request was issued.
    Validation,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// A durable storage I/O error occurred.
    Storage,
    /// A configuration error occurred.
    Configuration,
    /// An internal client error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http => write!(f, "HTTP"),
            Self::Session => write!(f, "SESSION"),
            Self::NotLoggedIn => write!(f, "NOT_LOGGED_IN"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Storage => write!(f, "STORAGE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The safe summary of a failed request.
///
/// Carries nothing but the status code and a fixed message chosen from
/// that code. Status `0` stands for a transport failure with no HTTP
/// status at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{safe_message}")]
pub struct NormalizedError {
    /// HTTP status code, or `0` when the request never got a response.
    pub status_code: u16,
    /// Fixed, human-readable message keyed by `status_code`.
    pub safe_message: String,
}

impl NormalizedError {
    /// Create a normalized error.
    pub fn new(status_code: u16, safe_message: impl Into<String>) -> Self {
        Self {
            status_code,
            safe_message: safe_message.into(),
        }
    }

    /// Whether this failure came from the transport rather than the backend.
    pub fn is_transport(&self) -> bool {
        self.status_code == 0
    }
}

/// The unified client error used throughout RecipeShare.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
    /// The normalized pipeline failure, when `kind` is [`ErrorKind::Http`].
    normalized: Option<NormalizedError>,
}

impl AppError {
    /// Create a new client error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
            normalized: None,
        }
    }

    /// Create a new client error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
            normalized: None,
        }
    }

    /// Create a session error.
    pub fn session(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Session, message)
    }

    /// Create a not-logged-in error.
    pub fn not_logged_in() -> Self {
        Self::new(ErrorKind::NotLoggedIn, "No user logged in")
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// The normalized failure behind an [`ErrorKind::Http`] error.
    pub fn normalized(&self) -> Option<&NormalizedError> {
        self.normalized.as_ref()
    }

    /// The status code of a normalized failure, if any.
    pub fn status_code(&self) -> Option<u16> {
        self.normalized.as_ref().map(|n| n.status_code)
    }

    /// The message suitable for showing to a user.
    pub fn user_message(&self) -> &str {
        &self.message
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
            normalized: self.normalized.clone(),
        }
    }
}

impl From<NormalizedError> for AppError {
    fn from(err: NormalizedError) -> Self {
        Self {
            kind: ErrorKind::Http,
            message: err.safe_message.clone(),
            source: None,
            normalized: Some(err),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Storage, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
