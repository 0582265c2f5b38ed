//! API error handling for the auth service.
//!
//! Every failure serializes as the error envelope the client contract
//! expects: `{"errors": [{"message": ..., "field": ...}]}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::api::{ApiMessage, ErrorEnvelope};
use crate::directory::DirectoryError;

/// API error: a status code plus the message list for the envelope.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    errors: Vec<ApiMessage>,
}

impl ApiError {
    /// Create an error with a single message.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            errors: vec![ApiMessage::new(message)],
        }
    }

    /// Create an error with a single field-scoped message.
    pub fn for_field(
        status: StatusCode,
        message: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        Self {
            status,
            errors: vec![ApiMessage::for_field(message, field)],
        }
    }

    /// 400 Bad Request.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// 401 Unauthorized.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// 404 Not Found.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// 500 Internal Server Error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Build a 422 from `validator` output, one entry per field message.
    pub fn from_validation_errors(errors: validator::ValidationErrors) -> Self {
        let mut messages = Vec::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {field}"));
                messages.push(ApiMessage::for_field(message, field.to_string()));
            }
        }

        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            errors: messages,
        }
    }

    /// The HTTP status this error responds with.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The messages carried in the envelope.
    pub fn messages(&self) -> &[ApiMessage] {
        &self.errors
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::EmailTaken => {
                Self::for_field(StatusCode::UNPROCESSABLE_ENTITY, err.to_string(), "email")
            }
            DirectoryError::InvalidCredentials => Self::unauthorized(err.to_string()),
            DirectoryError::UnknownAccount => Self::not_found(err.to_string()),
            DirectoryError::Password(inner) => {
                tracing::error!(error = %inner, "password hashing failed");
                Self::internal("Could not process password")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorEnvelope {
            errors: self.errors,
        };
        (self.status, Json(body)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}: {}", self.status, joined.join("; "))
    }
}

impl std::error::Error for ApiError {}
