//! Web API module: the thin backend auth service.
//!
//! Exposes `POST /auth/register`, `POST /auth/login`, and
//! `PUT /auth/update` over an in-memory user directory.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use router::create_router;
pub use server::WebServer;
