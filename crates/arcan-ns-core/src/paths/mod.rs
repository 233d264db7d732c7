//! Filesystem probing and installation layout discovery.
//!
//! This module answers "where is it installed" without any configuration:
//! - Existence probes (`is_directory`, `is_file_or_pipe`)
//! - Ordered candidate search (`find_first_existing`)
//! - Frameserver, hijack library and shared directory discovery
//!
//! # Design
//!
//! - Paths are handled as `String`, since they end up spliced into argument strings
//! - Probe misses are not errors; discovery returns `Option`
//! - Candidate lists come from `DiscoveryConfig`, so tests can point at temp trees

mod discovery;
mod error;
mod probe;
mod search;

#[cfg(test)]
pub(crate) mod test_utils;

// Error type
pub use error::PathError;

// Probes
pub use probe::{is_directory, is_file_or_pipe};

// Candidate search
pub use search::{find_first_existing, find_first_matching};

// Discovery
pub use discovery::{
    DiscoveryConfig, FRAMESERVER_BINARY, HIJACK_ENV_VAR, HIJACK_LIBRARY, HOME_SUBDIR,
    canonical_dir, find_frameserver, find_hijack_libdir, find_shared_dir,
};
