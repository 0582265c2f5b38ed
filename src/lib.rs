//! Gatehouse - authenticated web application.
//!
//! A thin auth API service (register / login / update over an in-memory
//! user directory) and the client-side session manager SDK that consumes
//! it.

pub mod api;
pub mod config;
pub mod directory;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod nav;
pub mod notify;
pub mod session;
pub mod web;

pub use api::{ApiMessage, AuthApi, AuthError, Credentials, ErrorEnvelope, NewUser, User, UserUpdate};
pub use config::Config;
pub use directory::{hash_password, verify_password, DirectoryError, PasswordError, UserDirectory};
pub use error::{GatehouseError, Result};
pub use i18n::{Catalog, I18nError, Translator};
pub use nav::{LogNavigator, Navigator, SIGN_IN_PATH};
pub use notify::{LogNotifier, Notice, Notifier, NotifyError, Status};
pub use session::{Session, SessionManager, SessionStore, Subscription};
pub use web::{create_router, ApiError, AppState, WebServer};
