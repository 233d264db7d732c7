//! Environment lookup port.
//!
//! Bootstrap never calls `std::env` directly; it asks an [`EnvSource`]. The
//! CLI injects [`ProcessEnv`], tests and embedders use [`MapEnv`].

use std::collections::HashMap;
use std::env::{self, VarError};

/// Read-only view of environment-style settings.
pub trait EnvSource {
    /// Value of `key`, or `None` when it is not set.
    ///
    /// A set-but-empty variable is `Some("")`. A set variable is never
    /// reported as unset, whatever its contents.
    fn var(&self, key: &str) -> Option<String>;

    /// Home directory of the current user, if known.
    fn home_dir(&self) -> Option<String> {
        self.var("HOME")
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        match env::var(key) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            // Still counts as set, so discovery cannot claim the kind.
            Err(VarError::NotUnicode(raw)) => {
                let value = raw.to_string_lossy().into_owned();
                tracing::warn!(
                    key,
                    %value,
                    "environment value is not valid UTF-8, using lossy form"
                );
                Some(value)
            }
        }
    }

    fn home_dir(&self) -> Option<String> {
        self.var("HOME").or_else(|| {
            dirs::home_dir().and_then(|home| home.to_str().map(str::to_owned))
        })
    }
}

/// In-memory environment.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Set `key` to `value`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Remove `key`.
    pub fn remove(&mut self, key: &str) {
        self.vars.remove(key);
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
