//! Test helpers for the session flow and web API tests.
//!
//! Provides an in-process backend on an OS-assigned port, recording
//! collaborator doubles, and a session manager wired against both.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

use gatehouse::notify::{Notice, Notifier, NotifyError};
use gatehouse::web::{create_router, AppState};
use gatehouse::{AuthApi, Catalog, Navigator, Session, SessionManager};

/// Default timeout for waiting on asynchronous side effects.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// An in-process auth backend with its own empty user directory.
pub struct TestBackend {
    /// Base URL for clients, e.g. `http://127.0.0.1:49321`.
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl Drop for TestBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Spawn the auth service on an OS-assigned port.
pub async fn spawn_backend() -> TestBackend {
    let router = create_router(AppState::new(), &[]);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().expect("listener has no local addr");

    let handle = tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    TestBackend {
        base_url: format!("http://{addr}"),
        handle,
    }
}

/// Notifier that records every notice it is asked to display.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn open(&self, notice: Notice) -> Result<(), NotifyError> {
        self.notices.lock().unwrap().push(notice);
        Ok(())
    }
}

/// Notifier that always fails to display.
pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn open(&self, _notice: Notice) -> Result<(), NotifyError> {
        Err(NotifyError("display backend is gone".to_string()))
    }
}

/// Notifier that parks until the test releases its gate, recording only
/// notices that make it past the gate. Used to prove teardown aborts
/// pending notification tasks.
#[derive(Default)]
pub struct GatedNotifier {
    pub gate: Notify,
    entered: AtomicUsize,
    delivered: Mutex<Vec<Notice>>,
}

impl GatedNotifier {
    /// How many notification tasks reached the gate.
    pub fn entered(&self) -> usize {
        self.entered.load(Ordering::SeqCst)
    }

    /// Notices that made it past the gate.
    pub fn delivered(&self) -> Vec<Notice> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for GatedNotifier {
    async fn open(&self, notice: Notice) -> Result<(), NotifyError> {
        self.entered.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        self.delivered.lock().unwrap().push(notice);
        Ok(())
    }
}

/// Navigator that records every route change.
#[derive(Default)]
pub struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
    }
}

/// The English catalog shipped with the crate.
pub fn english_catalog() -> Catalog {
    Catalog::from_str("en", include_str!("../../locales/en.toml")).expect("en catalog parses")
}

/// Build a session manager wired to recording doubles.
pub fn test_manager(
    base_url: &str,
) -> (SessionManager, Arc<RecordingNotifier>, Arc<RecordingNavigator>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let manager = manager_with(base_url, notifier.clone(), navigator.clone());
    (manager, notifier, navigator)
}

/// Build a session manager with a custom notifier.
pub fn manager_with(
    base_url: &str,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
) -> SessionManager {
    let api = AuthApi::new(base_url).expect("valid base url");
    SessionManager::new(api, Arc::new(english_catalog()), notifier, navigator)
}

/// Register an account directly against the backend, outside the manager.
pub async fn register_account(base_url: &str, email: &str, password: &str, first_name: &str) {
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{base_url}/auth/register"))
        .json(&serde_json::json!({
            "email": email,
            "password": password,
            "firstName": first_name,
        }))
        .send()
        .await
        .expect("register request failed");

    assert!(
        response.status().is_success(),
        "registration failed: {}",
        response.status()
    );
}

/// Poll a condition until it holds or the default timeout elapses.
pub async fn wait_until(condition: impl Fn() -> bool) -> bool {
    let deadline = tokio::time::Instant::now() + DEFAULT_TIMEOUT;
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}

/// Assert the session invariant: the flag mirrors user presence.
pub fn assert_consistent(session: &Session) {
    assert_eq!(
        session.is_authenticated(),
        session.user().is_some(),
        "authenticated flag disagrees with user presence"
    );
}
