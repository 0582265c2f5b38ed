//! Route navigation seam.

/// Route the client lands on after logout.
pub const SIGN_IN_PATH: &str = "/sign-in";

/// Fire-and-forget route changes. Implementations must not block.
pub trait Navigator: Send + Sync {
    /// Navigate to the given path.
    fn navigate(&self, path: &str);
}

/// Navigator that records route changes in the log. Default for headless
/// use.
#[derive(Debug, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, path: &str) {
        tracing::info!(%path, "navigate");
    }
}
