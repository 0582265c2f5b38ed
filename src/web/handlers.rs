//! Auth endpoint handlers.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use tokio::sync::Mutex;

use crate::api::{NewUser, User, UserUpdate};
use crate::directory::UserDirectory;
use crate::web::dto::{LoginRequest, RegisterRequest, UpdateRequest, ValidatedJson};
use crate::web::error::ApiError;

/// Thread-safe user directory shared across handlers.
pub type SharedDirectory = Arc<Mutex<UserDirectory>>;

/// Application state shared across handlers.
#[derive(Clone, Default)]
pub struct AppState {
    /// The user directory.
    pub directory: SharedDirectory,
}

impl AppState {
    /// Create state over an empty directory.
    pub fn new() -> Self {
        Self::default()
    }
}

/// POST /auth/register - create an account.
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let new_user = NewUser {
        email: req.email,
        password: req.password,
        first_name: req.first_name,
        last_name: req.last_name,
    };

    let user = {
        let mut directory = state.directory.lock().await;
        directory.register(&new_user)?
    };

    tracing::info!(email = %user.email, id = user.id, "account registered");
    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /auth/login - verify credentials.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<User>, ApiError> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(ApiError::bad_request("Email and password are required"));
    }

    let user = {
        let directory = state.directory.lock().await;
        directory.authenticate(&req.email, &req.password)?
    };

    tracing::info!(email = %user.email, "login");
    Ok(Json(user))
}

/// PUT /auth/update - update a profile.
pub async fn update(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<UpdateRequest>,
) -> Result<Json<User>, ApiError> {
    let update = UserUpdate {
        email: req.email,
        first_name: req.first_name,
        last_name: req.last_name,
        password: req.password,
    };

    let user = {
        let mut directory = state.directory.lock().await;
        directory.update(&update)?
    };

    tracing::info!(email = %user.email, "profile updated");
    Ok(Json(user))
}
