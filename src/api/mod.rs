//! Typed transport for the backend auth endpoints.
//!
//! [`AuthApi`] owns the HTTP client; the session manager never touches raw
//! requests or response bodies.

mod client;
mod error;
pub mod types;

pub use client::AuthApi;
pub use error::AuthError;
pub use types::{ApiMessage, Credentials, ErrorEnvelope, NewUser, User, UserUpdate};
