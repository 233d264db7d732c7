//! Path-related error types.
//!
//! Discovery is best-effort, so these errors never escape bootstrap; they are
//! logged and the corresponding namespace stays unbound.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while turning a probe hit into a namespace value.
#[derive(Debug, Error)]
pub enum PathError {
    /// Resolving a directory to its canonical absolute form failed.
    #[error("Failed to canonicalize {path}: {reason}")]
    Canonicalize { path: PathBuf, reason: String },

    /// A resolved path cannot be represented as UTF-8.
    #[error("{0} is not valid UTF-8")]
    NonUtf8(PathBuf),

    /// An empty path was provided.
    #[error("Path cannot be empty")]
    EmptyPath,
}
