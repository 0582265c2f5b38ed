//! Error types for gatehouse.

use thiserror::Error;

/// Common error type for gatehouse.
#[derive(Error, Debug)]
pub enum GatehouseError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Translation catalog error.
    #[error("i18n error: {0}")]
    I18n(#[from] crate::i18n::I18nError),

    /// Auth client error.
    #[error(transparent)]
    Auth(#[from] crate::api::AuthError),
}

/// Result type alias for gatehouse operations.
pub type Result<T> = std::result::Result<T, GatehouseError>;
