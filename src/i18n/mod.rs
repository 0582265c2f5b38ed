//! Internationalization for gatehouse.
//!
//! Messages live in TOML files under a locales directory, one file per
//! locale. Nested tables flatten into dot-separated keys, so
//!
//! ```toml
//! [sign-in]
//! error-login = "Sign in failed."
//! ```
//!
//! resolves as `sign-in.error-login`. Parameters are marked `{{name}}`.
//!
//! The [`Translator`] trait is the seam the session manager depends on; the
//! TOML-backed [`Catalog`] is the production implementation.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// Default locale.
pub const DEFAULT_LOCALE: &str = "en";

/// I18n-related errors.
#[derive(Error, Debug)]
pub enum I18nError {
    /// Failed to read a locale file.
    #[error("failed to read locale file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse a locale file.
    #[error("failed to parse locale file: {0}")]
    Parse(#[from] toml::de::Error),

    /// No file exists for the requested locale.
    #[error("locale not found: {0}")]
    LocaleNotFound(String),
}

/// Resolves message keys to localized display strings.
///
/// `t` and `t_with` are synchronous lookups. `resolve` exists for
/// implementations whose catalog becomes ready lazily; callers that fire
/// notifications off the hot path await it instead of blocking.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Look up a key, echoing the key itself when missing.
    fn t(&self, key: &str) -> String;

    /// Look up a key and substitute `{{name}}` parameters.
    fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String;

    /// Resolve a key once the catalog is ready.
    async fn resolve(&self, key: &str) -> String;
}

/// A loaded message catalog for one locale.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locale: String,
    messages: HashMap<String, String>,
}

impl Catalog {
    /// Load the catalog for `locale` from `<locales_dir>/<locale>.toml`.
    pub fn load<P: AsRef<Path>>(locale: &str, locales_dir: P) -> Result<Self, I18nError> {
        let path = locales_dir.as_ref().join(format!("{locale}.toml"));
        if !path.exists() {
            return Err(I18nError::LocaleNotFound(locale.to_string()));
        }

        let content = fs::read_to_string(&path)?;
        Self::from_str(locale, &content)
    }

    /// Build a catalog from a TOML string. Used by tests and embedded
    /// catalogs.
    pub fn from_str(locale: &str, content: &str) -> Result<Self, I18nError> {
        let table: toml::Table = toml::from_str(content)?;

        let mut messages = HashMap::new();
        flatten(&toml::Value::Table(table), "", &mut messages);

        Ok(Self {
            locale: locale.to_string(),
            messages,
        })
    }

    /// The locale this catalog was loaded for.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Raw lookup without the key-echo fallback.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Number of loaded messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the catalog holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[async_trait]
impl Translator for Catalog {
    fn t(&self, key: &str) -> String {
        self.get(key).unwrap_or(key).to_string()
    }

    fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        let mut result = self.t(key);
        for (name, value) in params {
            let placeholder = format!("{{{{{name}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }

    async fn resolve(&self, key: &str) -> String {
        // The catalog is fully loaded at construction time.
        self.t(key)
    }
}

/// Flatten nested TOML tables into dot-separated string keys.
fn flatten(value: &toml::Value, prefix: &str, map: &mut HashMap<String, String>) {
    match value {
        toml::Value::Table(table) => {
            for (key, val) in table {
                let child = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(val, &child, map);
            }
        }
        toml::Value::String(s) => {
            map.insert(prefix.to_string(), s.clone());
        }
        other => {
            map.insert(prefix.to_string(), other.to_string());
        }
    }
}
