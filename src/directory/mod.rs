//! In-memory user directory backing the auth service.
//!
//! Accounts are keyed by lowercased email. Passwords are stored only as
//! Argon2id hashes.

mod password;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::api::{NewUser, User, UserUpdate};

pub use password::{hash_password, verify_password, PasswordError};

/// Directory-level errors. Display strings double as the user-facing
/// messages in the API error envelope.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// An account with this email already exists.
    #[error("Email taken")]
    EmailTaken,

    /// Unknown email or wrong password. Deliberately indistinguishable.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// No account matches the addressed email.
    #[error("Account not found")]
    UnknownAccount,

    /// Hashing failure while storing a password.
    #[error(transparent)]
    Password(#[from] PasswordError),
}

/// A stored account.
#[derive(Debug, Clone)]
struct Account {
    id: i64,
    email: String,
    first_name: String,
    last_name: Option<String>,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl Account {
    fn to_user(&self) -> User {
        User {
            id: self.id,
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            created_at: self.created_at,
        }
    }
}

/// In-memory account store.
#[derive(Debug, Default)]
pub struct UserDirectory {
    accounts: HashMap<String, Account>,
    next_id: i64,
}

impl UserDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new account, returning the stored user.
    pub fn register(&mut self, new_user: &NewUser) -> Result<User, DirectoryError> {
        let key = normalize_email(&new_user.email);
        if self.accounts.contains_key(&key) {
            return Err(DirectoryError::EmailTaken);
        }

        let password_hash = hash_password(&new_user.password)?;
        self.next_id += 1;
        let account = Account {
            id: self.next_id,
            email: new_user.email.clone(),
            first_name: new_user.first_name.clone(),
            last_name: new_user.last_name.clone(),
            password_hash,
            created_at: Utc::now(),
        };

        let user = account.to_user();
        self.accounts.insert(key, account);
        Ok(user)
    }

    /// Verify credentials, returning the matching user.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<User, DirectoryError> {
        let account = self
            .accounts
            .get(&normalize_email(email))
            .ok_or(DirectoryError::InvalidCredentials)?;

        verify_password(password, &account.password_hash)
            .map_err(|_| DirectoryError::InvalidCredentials)?;

        Ok(account.to_user())
    }

    /// Apply a profile update addressed by email.
    pub fn update(&mut self, update: &UserUpdate) -> Result<User, DirectoryError> {
        let new_hash = match &update.password {
            Some(password) => Some(hash_password(password)?),
            None => None,
        };

        let account = self
            .accounts
            .get_mut(&normalize_email(&update.email))
            .ok_or(DirectoryError::UnknownAccount)?;

        if let Some(first_name) = &update.first_name {
            account.first_name = first_name.clone();
        }
        if let Some(last_name) = &update.last_name {
            account.last_name = Some(last_name.clone());
        }
        if let Some(hash) = new_hash {
            account.password_hash = hash;
        }

        Ok(account.to_user())
    }

    /// Number of registered accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the directory has no accounts.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
