//! Test utilities for tests that touch the process environment.
//!
//! Rust runs tests on parallel threads, and `std::env` is process-global.
//! Any test that sets, clears or reads `ARCAN_*` or `HOME` from the real
//! environment must hold [`ENV_LOCK`].

use std::env;
use std::ffi::{OsStr, OsString};
use std::sync::Mutex;

/// Shared lock to serialize tests that depend on environment variables.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// RAII guard that restores an environment variable to its original value on drop.
///
/// # Example
///
/// ```ignore
/// let _guard = ENV_LOCK.lock().unwrap();
/// let _env = EnvVarGuard::set("ARCAN_RESOURCEPATH", "/tmp/res");
/// // ... code reading ARCAN_RESOURCEPATH ...
/// ```
pub struct EnvVarGuard {
    key: String,
    previous: Option<OsString>,
}

impl EnvVarGuard {
    /// Set an environment variable and return a guard that will restore it.
    pub fn set(key: &str, value: &str) -> Self {
        Self::set_os(key, OsStr::new(value))
    }

    /// Like [`EnvVarGuard::set`], for values that need not be UTF-8.
    #[allow(unsafe_code)]
    pub fn set_os(key: &str, value: &OsStr) -> Self {
        let previous = env::var_os(key);
        unsafe {
            env::set_var(key, value);
        }
        Self {
            key: key.to_string(),
            previous,
        }
    }

    /// Remove an environment variable and return a guard that will restore it.
    #[allow(unsafe_code)]
    pub fn unset(key: &str) -> Self {
        let previous = env::var_os(key);
        unsafe {
            env::remove_var(key);
        }
        Self {
            key: key.to_string(),
            previous,
        }
    }
}

impl Drop for EnvVarGuard {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        if let Some(ref value) = self.previous {
            unsafe {
                env::set_var(&self.key, value);
            }
        } else {
            unsafe {
                env::remove_var(&self.key);
            }
        }
    }
}
