//! Wire types shared by the auth API client and the web service.
//!
//! The backend speaks camelCase JSON, so every type here carries a
//! `rename_all` attribute rather than per-field renames.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the backend.
///
/// Password material never appears here; the backend strips it before
/// serializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Account id assigned at registration.
    pub id: i64,
    /// Account email, unique per account.
    pub email: String,
    /// Display name used in notifications.
    pub first_name: String,
    /// Optional family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// Login payload for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration payload for `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Profile update payload for `PUT /auth/update`.
///
/// The account is addressed by email; only the populated fields change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Error envelope the backend returns on any non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub errors: Vec<ApiMessage>,
}

/// A single human-readable error entry, optionally tied to a field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ApiMessage {
    /// Create a message not tied to any particular field.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: None,
        }
    }

    /// Create a message tied to a request field.
    pub fn for_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: Some(field.into()),
        }
    }
}
