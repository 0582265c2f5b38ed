//! Session state store with replay-latest subscriptions.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Weak};

use crate::api::User;

type Callback = Arc<dyn Fn(&Session) + Send + Sync + 'static>;

/// Snapshot of the client session.
///
/// Invariant: `authenticated == user.is_some()` in every snapshot the store
/// hands out. Both fields change together through the store's single
/// mutation point, so no operation can observe them disagreeing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    user: Option<User>,
    authenticated: bool,
}

impl Session {
    fn with_user(user: Option<User>) -> Self {
        Self {
            authenticated: user.is_some(),
            user,
        }
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

#[derive(Default)]
struct Inner {
    session: Session,
    next_id: u64,
    subscribers: HashMap<u64, Callback>,
}

/// Shared, observable session state.
///
/// Subscribing replays the latest snapshot to the new subscriber before
/// `subscribe` returns, then delivers every subsequent change. Callbacks run
/// on the publishing thread, outside the store lock.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<Inner>>,
}

impl SessionStore {
    /// Create an empty store: no user, not authenticated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current session.
    pub fn current(&self) -> Session {
        self.lock().session.clone()
    }

    /// The current user, if any.
    pub fn current_user(&self) -> Option<User> {
        self.lock().session.user.clone()
    }

    /// Whether a user is currently signed in.
    pub fn is_authenticated(&self) -> bool {
        self.lock().session.authenticated
    }

    /// Subscribe to session changes.
    ///
    /// The callback fires once with the current snapshot before this method
    /// returns, and again on every change until the returned handle is
    /// dropped or cancelled.
    pub fn subscribe(&self, callback: impl Fn(&Session) + Send + Sync + 'static) -> Subscription {
        let callback: Callback = Arc::new(callback);
        let (id, snapshot) = {
            let mut inner = self.lock();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.insert(id, Arc::clone(&callback));
            (id, inner.session.clone())
        };

        // Replay-latest: the subscriber sees current state immediately.
        callback(&snapshot);

        Subscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Subscribe to the current-user projection.
    pub fn subscribe_user(
        &self,
        callback: impl Fn(Option<&User>) + Send + Sync + 'static,
    ) -> Subscription {
        self.subscribe(move |session| callback(session.user()))
    }

    /// Subscribe to the authenticated-flag projection.
    pub fn subscribe_authenticated(
        &self,
        callback: impl Fn(bool) + Send + Sync + 'static,
    ) -> Subscription {
        self.subscribe(move |session| callback(session.is_authenticated()))
    }

    /// Replace the session user and publish the new snapshot.
    ///
    /// This is the only mutation point; the authenticated flag is derived
    /// here from the user's presence.
    pub(crate) fn set_user(&self, user: Option<User>) {
        let (snapshot, callbacks) = {
            let mut inner = self.lock();
            inner.session = Session::with_user(user);
            let callbacks: Vec<Callback> = inner.subscribers.values().cloned().collect();
            (inner.session.clone(), callbacks)
        };

        for callback in callbacks {
            callback(&snapshot);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("session store lock poisoned")
    }
}

/// Handle for an active subscription. Dropping it unsubscribes.
pub struct Subscription {
    id: u64,
    inner: Weak<Mutex<Inner>>,
}

impl Subscription {
    /// Explicitly cancel the subscription.
    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            if let Ok(mut inner) = inner.lock() {
                inner.subscribers.remove(&self.id);
            }
        }
    }
}
