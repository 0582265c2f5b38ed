//! Transient user notifications (toasts).
//!
//! The session manager triggers notices fire-and-forget: a failure to
//! display one is logged and dropped, never promoted into an operation
//! failure.

use async_trait::async_trait;
use thiserror::Error;

/// Visual status of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
    Info,
}

/// A single notification: a label line, optional body lines, and a status.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    /// Headline shown to the user.
    pub label: String,
    /// Supporting lines, e.g. field-level validation messages.
    pub body: Vec<String>,
    /// Visual status.
    pub status: Status,
}

impl Notice {
    /// A success notice with no body.
    pub fn success(label: impl Into<String>) -> Self {
        Self::new(label, Status::Success)
    }

    /// An error notice with no body.
    pub fn error(label: impl Into<String>) -> Self {
        Self::new(label, Status::Error)
    }

    /// An informational notice with no body.
    pub fn info(label: impl Into<String>) -> Self {
        Self::new(label, Status::Info)
    }

    /// Attach body lines to the notice.
    pub fn with_body(mut self, body: Vec<String>) -> Self {
        self.body = body;
        self
    }

    fn new(label: impl Into<String>, status: Status) -> Self {
        Self {
            label: label.into(),
            body: Vec::new(),
            status,
        }
    }
}

/// Error raised by a notifier that could not display a notice.
#[derive(Error, Debug)]
#[error("notifier unavailable: {0}")]
pub struct NotifyError(pub String);

/// Displays transient notices to the user.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Display a notice. Completion means the notice was handed off, not
    /// that the user saw it.
    async fn open(&self, notice: Notice) -> Result<(), NotifyError>;
}

/// Notifier that writes notices to the log. Default for headless use.
#[derive(Debug, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn open(&self, notice: Notice) -> Result<(), NotifyError> {
        let body = notice.body.join("; ");
        match notice.status {
            Status::Success => tracing::info!(label = %notice.label, %body, "notice"),
            Status::Info => tracing::info!(label = %notice.label, %body, "notice"),
            Status::Error => tracing::warn!(label = %notice.label, %body, "notice"),
        }
        Ok(())
    }
}
