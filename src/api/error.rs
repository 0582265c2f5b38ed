//! Client-side error taxonomy for auth operations.

use thiserror::Error;

/// Error returned by the auth API client and the session manager.
///
/// The backend's `{"errors": [{"message": ...}]}` envelope is decoded into
/// [`AuthError::Validation`] so callers match on a typed contract instead of
/// digging through raw JSON. A non-2xx response without a usable envelope
/// degrades to [`AuthError::Status`].
#[derive(Error, Debug)]
pub enum AuthError {
    /// The configured base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    BaseUrl(String),

    /// The server rejected the request with field-level messages.
    #[error("validation failed: {}", messages.join("; "))]
    Validation {
        /// Human-readable messages extracted from the error envelope.
        messages: Vec<String>,
    },

    /// Non-2xx response whose body carried no usable error envelope.
    #[error("server returned status {status}")]
    Status {
        /// HTTP status code of the response.
        status: u16,
    },

    /// Connection, timeout, or body-decoding failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl AuthError {
    /// Validation messages, if the server provided any.
    pub fn validation_messages(&self) -> Option<&[String]> {
        match self {
            AuthError::Validation { messages } => Some(messages),
            _ => None,
        }
    }
}
