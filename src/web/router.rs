//! Router configuration for the auth service.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{login, register, update, AppState};
use super::middleware::create_cors_layer;

/// Create the service router.
pub fn create_router(state: AppState, cors_origins: &[String]) -> Router {
    let auth_routes = Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/update", put(update));

    Router::new()
        .route("/health", get(health_check))
        .nest("/auth", auth_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins)),
        )
        .with_state(state)
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
