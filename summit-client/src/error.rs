//! Error types for summit-client.

use thiserror::Error;

use summit_core::{messages, FormField, SessionError};

/// The request never produced an HTTP response (DNS, refused, reset, …).
#[derive(Debug, Error)]
#[error("transport error: {0}")]
pub struct TransportError(pub String);

/// Why a registration attempt did not succeed.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Required fields were blank; no request was sent.
    #[error("missing required fields: {0:?}")]
    Validation(Vec<FormField>),

    /// The backend answered with a non-2xx status.
    #[error("server rejected registration (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    /// The request could not complete.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The form could not be encoded as a request body.
    #[error("failed to encode registration: {0}")]
    Encode(#[from] serde_json::Error),
}

impl SubmitError {
    /// Message shown to the registrant.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Validation(_) => messages::VALIDATION_REQUIRED.to_string(),
            SubmitError::Server { message, .. } => message.clone(),
            SubmitError::Transport(_) => messages::CONNECTION_FAILED.to_string(),
            SubmitError::Encode(_) => messages::REGISTRATION_FALLBACK_ERROR.to_string(),
        }
    }
}

/// Failures of the admin listing surface.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Blank key; rejected locally.
    #[error("admin key is empty")]
    EmptyKey,

    /// The backend refused the key (any non-2xx).
    #[error("admin key rejected (HTTP {status})")]
    Unauthorized { status: u16 },

    /// The listing request could not complete.
    #[error("connection failed: {0}")]
    Connection(#[source] TransportError),

    /// 2xx response whose body is not a registration list.
    #[error("malformed registrations body: {0}")]
    MalformedBody(#[source] serde_json::Error),

    /// No stored key to refresh with.
    #[error("no admin session stored")]
    NotLoggedIn,

    /// Reading or writing the stored key failed.
    #[error("admin session store error: {0}")]
    Session(#[from] SessionError),
}

impl AdminError {
    /// Inline message for the admin view.
    pub fn user_message(&self) -> String {
        match self {
            AdminError::EmptyKey => messages::ADMIN_EMPTY_KEY.to_string(),
            AdminError::Unauthorized { .. } => messages::ADMIN_UNAUTHORIZED.to_string(),
            AdminError::Connection(_) | AdminError::MalformedBody(_) => {
                messages::CONNECTION_FAILED.to_string()
            }
            AdminError::NotLoggedIn => messages::ADMIN_NOT_LOGGED_IN.to_string(),
            AdminError::Session(err) => err.to_string(),
        }
    }
}

/// Failures of the backend status and database checks.
#[derive(Debug, Error)]
pub enum HealthError {
    #[error("connection failed: {0}")]
    Connection(#[from] TransportError),

    #[error("backend answered HTTP {0}")]
    Status(u16),

    #[error("malformed status body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}
