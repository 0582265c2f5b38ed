//! HTTP client for the auth endpoints.

use reqwest::{Client, Response};
use std::time::Duration;
use url::Url;

use crate::api::error::AuthError;
use crate::api::types::{Credentials, ErrorEnvelope, NewUser, User, UserUpdate};

/// Connect timeout in seconds.
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Read timeout in seconds.
const READ_TIMEOUT_SECS: u64 = 20;

/// Total timeout in seconds.
const TOTAL_TIMEOUT_SECS: u64 = 30;

/// User agent string for API requests.
const USER_AGENT: &str = "gatehouse-client/1.0";

/// Typed client for the backend auth endpoints.
///
/// One instance is shared per session manager; `reqwest::Client` pools
/// connections internally.
#[derive(Debug)]
pub struct AuthApi {
    client: Client,
    base_url: String,
}

impl AuthApi {
    /// Create a client for the given base URL (e.g. `http://127.0.0.1:8080`).
    pub fn new(base_url: &str) -> Result<Self, AuthError> {
        // Parse for validation only; endpoints are joined as plain strings so
        // a base with a path component keeps that path.
        Url::parse(base_url).map_err(|e| AuthError::BaseUrl(format!("{base_url}: {e}")))?;

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .read_timeout(Duration::from_secs(READ_TIMEOUT_SECS))
            .timeout(Duration::from_secs(TOTAL_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /auth/login` with credentials, returning the authenticated user.
    pub async fn login(&self, credentials: &Credentials) -> Result<User, AuthError> {
        let response = self
            .client
            .post(format!("{}/auth/login", self.base_url))
            .json(credentials)
            .send()
            .await?;

        decode_user(response).await
    }

    /// `POST /auth/register` with a new account payload.
    pub async fn register(&self, new_user: &NewUser) -> Result<User, AuthError> {
        let response = self
            .client
            .post(format!("{}/auth/register", self.base_url))
            .json(new_user)
            .send()
            .await?;

        decode_user(response).await
    }

    /// `PUT /auth/update` with modified profile fields.
    pub async fn update(&self, update: &UserUpdate) -> Result<User, AuthError> {
        let response = self
            .client
            .put(format!("{}/auth/update", self.base_url))
            .json(update)
            .send()
            .await?;

        decode_user(response).await
    }
}

/// Decode a `User` from a 2xx response, or the error envelope otherwise.
async fn decode_user(response: Response) -> Result<User, AuthError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<User>().await?);
    }

    let body = response.text().await.unwrap_or_default();
    Err(decode_failure(status.as_u16(), &body))
}

/// Map a non-2xx response to a typed error.
///
/// A body that parses as a non-empty `errors` list becomes
/// [`AuthError::Validation`]; anything else falls back to
/// [`AuthError::Status`], so a malformed envelope can never panic a caller.
fn decode_failure(status: u16, body: &str) -> AuthError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.errors.is_empty() => AuthError::Validation {
            messages: envelope.errors.into_iter().map(|e| e.message).collect(),
        },
        _ => AuthError::Status { status },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_garbage_base_url() {
        let err = AuthApi::new("not a url").unwrap_err();
        assert!(matches!(err, AuthError::BaseUrl(_)));
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let api = AuthApi::new("http://127.0.0.1:8080/").unwrap();
        assert_eq!(api.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_decode_failure_extracts_messages() {
        let body = r#"{"errors":[{"message":"Email taken"},{"message":"Password too short"}]}"#;
        let err = decode_failure(422, body);
        assert_eq!(
            err.validation_messages(),
            Some(&["Email taken".to_string(), "Password too short".to_string()][..])
        );
    }

    #[test]
    fn test_decode_failure_empty_errors_falls_back_to_status() {
        let err = decode_failure(422, r#"{"errors":[]}"#);
        assert!(matches!(err, AuthError::Status { status: 422 }));
    }

    #[test]
    fn test_decode_failure_malformed_body_falls_back_to_status() {
        let err = decode_failure(500, "<html>Internal Server Error</html>");
        assert!(matches!(err, AuthError::Status { status: 500 }));

        let err = decode_failure(502, "");
        assert!(matches!(err, AuthError::Status { status: 502 }));
    }
}
