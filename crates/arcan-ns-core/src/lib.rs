//! Logical resource namespaces for arcan.
//!
//! Maps a fixed set of namespaces (`ARCAN_RESOURCEPATH`, `ARCAN_FONTPATH`, ...)
//! to directories and expands `[NAME]` tokens in argument strings.
//!
//! ```no_run
//! use arcan_ns_core::{NamespaceTable, expand_tokens, populate_defaults_from_process};
//!
//! let mut registry = NamespaceTable::new();
//! populate_defaults_from_process(&mut registry);
//!
//! let mut argv = vec!["font=[ARCAN_FONTPATH]/default.ttf".to_string()];
//! expand_tokens(&registry, &mut argv);
//! ```
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod registry;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{NamespaceKind, NamespaceMask};
pub use ports::{EnvSource, MapEnv, NamespaceRegistry, ProcessEnv};
pub use registry::{NamespaceEntry, NamespaceTable, ResolvedNamespaces};
pub use services::{
    BootstrapReport, TokenError, expand_tokens, expand_tokens_owned, populate_defaults,
    populate_defaults_from_process, substitute_one, try_substitute,
};

// Re-export path utilities
pub use paths::{
    DiscoveryConfig, PathError, find_first_existing, find_frameserver, find_hijack_libdir,
    find_shared_dir, is_directory, is_file_or_pipe,
};

// Only used by integration tests
#[cfg(test)]
use tracing_subscriber as _;
