//! Request DTOs for the auth endpoints.

use serde::Deserialize;
use validator::Validate;

/// Login request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Registration request.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Account email, must be unique.
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    /// Account password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// Display name.
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    /// Optional family name.
    pub last_name: Option<String>,
}

/// Profile update request, addressed by email.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    /// Email of the account to update.
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    /// New display name, if changing.
    #[validate(length(min = 1, message = "First name must not be empty"))]
    pub first_name: Option<String>,
    /// New family name, if changing.
    pub last_name: Option<String>,
    /// New password, if changing.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: Option<String>,
}
