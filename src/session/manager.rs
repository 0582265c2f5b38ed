//! Client-side session manager.
//!
//! Owns the session store and drives the four auth operations against the
//! backend. Every operation follows the same discipline: the network call
//! resolves first, state mutates second, the notification side effect fires
//! third. Failures leave the store untouched and re-surface to the caller
//! unchanged.

use std::sync::{Arc, Mutex};

use tokio::task::JoinSet;

use crate::api::{AuthApi, AuthError, Credentials, NewUser, User, UserUpdate};
use crate::config::ClientConfig;
use crate::i18n::{Catalog, Translator};
use crate::nav::{LogNavigator, Navigator, SIGN_IN_PATH};
use crate::notify::{LogNotifier, Notice, Notifier};
use crate::session::store::{Session, SessionStore, Subscription};

/// Coordinates auth calls, session state, and notification side effects.
///
/// Notifications are fire-and-forget: they run in tasks owned by the
/// manager, their failures are logged and dropped, and the value an
/// operation returns is always the HTTP result. Dropping the manager (or
/// calling [`shutdown`](Self::shutdown)) aborts any notification work still
/// in flight.
///
/// Overlapping calls are not serialized: two logins racing each other both
/// run to completion and the last one to resolve wins the store.
///
/// All methods must be called from within a Tokio runtime.
pub struct SessionManager {
    api: AuthApi,
    store: SessionStore,
    translator: Arc<dyn Translator>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    tasks: Mutex<JoinSet<()>>,
}

impl SessionManager {
    /// Create a manager with an empty session.
    pub fn new(
        api: AuthApi,
        translator: Arc<dyn Translator>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            api,
            store: SessionStore::new(),
            translator,
            notifier,
            navigator,
            tasks: Mutex::new(JoinSet::new()),
        }
    }

    /// Build a manager from configuration, with the log-backed notifier and
    /// navigator. The translation catalog loads from the configured locales
    /// directory.
    pub fn from_config(config: &ClientConfig) -> crate::error::Result<Self> {
        let api = AuthApi::new(&config.base_url)?;
        let catalog = Catalog::load(&config.locale, &config.locales_dir)?;

        Ok(Self::new(
            api,
            Arc::new(catalog),
            Arc::new(LogNotifier),
            Arc::new(LogNavigator),
        ))
    }

    /// The observable session state.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Snapshot of the current session.
    pub fn current(&self) -> Session {
        self.store.current()
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<User> {
        self.store.current_user()
    }

    /// Whether a user is currently signed in.
    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    /// Subscribe to session changes; replays the latest snapshot first.
    pub fn subscribe(
        &self,
        callback: impl Fn(&Session) + Send + Sync + 'static,
    ) -> Subscription {
        self.store.subscribe(callback)
    }

    /// Sign in with email and password.
    ///
    /// On success the returned user becomes the session user and a success
    /// notice greets them by name. On failure the session is left exactly as
    /// it was, a generic error notice fires, and the failure returns to the
    /// caller unwrapped.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };

        match self.api.login(&credentials).await {
            Ok(user) => {
                self.store.set_user(Some(user.clone()));
                let label = self
                    .translator
                    .t_with("sign-in.success-login", &[("user", &user.first_name)]);
                self.spawn_notice(Notice::success(label));
                Ok(user)
            }
            Err(err) => {
                let label = self.translator.t("sign-in.error-login");
                self.spawn_notice(Notice::error(label));
                Err(err)
            }
        }
    }

    /// Create an account and sign the new user in.
    ///
    /// On failure the server's field-level messages become the notice body;
    /// a response without usable messages falls back to a label-only notice.
    pub async fn register(&self, new_user: &NewUser) -> Result<User, AuthError> {
        match self.api.register(new_user).await {
            Ok(user) => {
                self.store.set_user(Some(user.clone()));
                let label = format!(
                    "{} {}!",
                    self.translator.t("sign-up.success-welcome"),
                    user.first_name
                );
                let body = vec![self.translator.t("sign-up.success-sign-up")];
                self.spawn_notice(Notice::success(label).with_body(body));
                Ok(user)
            }
            Err(err) => {
                let label = self.translator.t("sign-up.error-register");
                self.spawn_notice(Notice::error(label).with_body(Self::failure_body(&err)));
                Err(err)
            }
        }
    }

    /// Update the signed-in user's profile.
    pub async fn update(&self, update: &UserUpdate) -> Result<User, AuthError> {
        match self.api.update(update).await {
            Ok(user) => {
                self.store.set_user(Some(user.clone()));
                let label = self.translator.t("account.update-success");
                self.spawn_notice(Notice::success(label));
                Ok(user)
            }
            Err(err) => {
                let label = self.translator.t("account.update-error");
                self.spawn_notice(Notice::error(label).with_body(Self::failure_body(&err)));
                Err(err)
            }
        }
    }

    /// Sign out: clear the session, navigate to the sign-in route, and fire
    /// an informational notice.
    ///
    /// State is cleared synchronously and the method returns without waiting
    /// for the notice; its translation resolves inside the spawned task.
    /// Calling this while already signed out re-clears state and still
    /// triggers navigation and the notice.
    pub fn logout(&self) {
        self.store.set_user(None);
        self.navigator.navigate(SIGN_IN_PATH);

        let translator = Arc::clone(&self.translator);
        let notifier = Arc::clone(&self.notifier);
        self.spawn(async move {
            let label = translator.resolve("sign-in.success-logout").await;
            if let Err(err) = notifier.open(Notice::info(label)).await {
                tracing::debug!(%err, "logout notice dropped");
            }
        });
    }

    /// Abort all notification tasks still in flight.
    ///
    /// Dropping the manager has the same effect; this exists for callers
    /// that tear down explicitly before the manager goes away.
    pub fn shutdown(&self) {
        self.tasks().abort_all();
    }

    /// Messages for a failure notice body; empty when the error carried no
    /// usable envelope (the translated label alone describes the failure).
    fn failure_body(err: &AuthError) -> Vec<String> {
        err.validation_messages().map(<[String]>::to_vec).unwrap_or_default()
    }

    fn spawn_notice(&self, notice: Notice) {
        let notifier = Arc::clone(&self.notifier);
        self.spawn(async move {
            if let Err(err) = notifier.open(notice).await {
                tracing::debug!(%err, "notice dropped");
            }
        });
    }

    fn spawn(&self, task: impl std::future::Future<Output = ()> + Send + 'static) {
        let mut tasks = self.tasks();
        // Reap tasks that already finished so the set stays small.
        while tasks.try_join_next().is_some() {}
        tasks.spawn(task);
    }

    fn tasks(&self) -> std::sync::MutexGuard<'_, JoinSet<()>> {
        self.tasks.lock().expect("session task set lock poisoned")
    }
}
