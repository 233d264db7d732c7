//! Installation layout discovery.
//!
//! Three probing strategies feed the bootstrap's soft overrides:
//!
//! - [`find_frameserver`] - the frameserver binary (`BinPath`)
//! - [`find_hijack_libdir`] - the directory holding the hijack library (`LibPath`)
//! - [`find_shared_dir`] - shared directories such as `resources` or `appl`
//!
//! All of them are best-effort: a miss returns `None` and is not an error.

use std::fs;
use std::path::Path;

use super::error::PathError;
use super::probe::is_file_or_pipe;
use super::search::{find_first_existing, find_first_matching};
use crate::ports::EnvSource;

/// Name of the frameserver binary.
pub const FRAMESERVER_BINARY: &str = "arcan_frameserver";

/// Name of the preloadable hijack library.
pub const HIJACK_LIBRARY: &str = "libarcan_hijack.so";

/// Environment variable naming an explicit hijack library.
pub const HIJACK_ENV_VAR: &str = "ARCAN_HIJACK";

/// Per-user installation directory, relative to the home directory.
pub const HOME_SUBDIR: &str = ".arcan";

/// Candidate locations used by the discovery functions.
///
/// [`Default`] reproduces the stock layout. Tests and embedders point the
/// fields at their own trees instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryConfig {
    /// Working-directory prefix probed before anything else.
    pub local_dir: String,
    /// Directory under `$HOME` holding a per-user install.
    pub home_subdir: String,
    /// System-wide share directories, most specific first.
    pub share_dirs: Vec<String>,
    /// Full paths probed for the frameserver binary, in order.
    pub frameserver_candidates: Vec<String>,
    /// Variable that may name an explicit hijack library.
    pub hijack_env_var: String,
    /// File name of the hijack library.
    pub hijack_library: String,
    /// System library directories probed for the hijack library, in order.
    pub system_library_dirs: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            local_dir: ".".to_string(),
            home_subdir: HOME_SUBDIR.to_string(),
            share_dirs: vec![
                "/usr/local/share/arcan".to_string(),
                "/usr/share/arcan".to_string(),
            ],
            frameserver_candidates: vec![
                format!("./{FRAMESERVER_BINARY}"),
                format!("/usr/local/bin/{FRAMESERVER_BINARY}"),
                format!("/usr/bin/{FRAMESERVER_BINARY}"),
            ],
            hijack_env_var: HIJACK_ENV_VAR.to_string(),
            hijack_library: HIJACK_LIBRARY.to_string(),
            system_library_dirs: vec!["/usr/local/lib/".to_string(), "/usr/lib/".to_string()],
        }
    }
}

impl DiscoveryConfig {
    /// Config rooted at `root`: local, share and library candidates all live
    /// below it, and the frameserver is looked up in `root/bin`.
    pub fn rooted_at(root: &str) -> Self {
        Self {
            local_dir: root.to_string(),
            home_subdir: HOME_SUBDIR.to_string(),
            share_dirs: vec![format!("{root}/share/arcan")],
            frameserver_candidates: vec![
                format!("{root}/{FRAMESERVER_BINARY}"),
                format!("{root}/bin/{FRAMESERVER_BINARY}"),
            ],
            hijack_env_var: HIJACK_ENV_VAR.to_string(),
            hijack_library: HIJACK_LIBRARY.to_string(),
            system_library_dirs: vec![format!("{root}/lib/")],
        }
    }

    /// Ordered prefixes for [`find_shared_dir`].
    ///
    /// The home slot is an empty string when no home directory is known, so
    /// the list always has the same shape.
    pub fn shared_dir_candidates(&self, env: &dyn EnvSource) -> Vec<String> {
        let home = env
            .home_dir()
            .map_or_else(String::new, |home| format!("{home}/{}", self.home_subdir));

        let mut candidates = Vec::with_capacity(self.share_dirs.len() + 2);
        candidates.push(self.local_dir.clone());
        candidates.push(home);
        candidates.extend(self.share_dirs.iter().cloned());
        candidates
    }
}

/// Locate the frameserver binary; the matching candidate is returned verbatim.
pub fn find_frameserver(config: &DiscoveryConfig) -> Option<String> {
    find_first_matching(&config.frameserver_candidates, is_file_or_pipe)
}

/// Locate the directory that holds the hijack library.
///
/// Resolution order:
/// 1. The hijack variable, if it names an existing file (returned verbatim)
/// 2. The library in the local directory (returns the canonical local directory)
/// 3. The library in a system library directory (returns that directory)
pub fn find_hijack_libdir(env: &dyn EnvSource, config: &DiscoveryConfig) -> Option<String> {
    // 1. Explicit override
    if let Some(explicit) = env.var(&config.hijack_env_var) {
        if is_file_or_pipe(&explicit) {
            return Some(explicit);
        }
    }

    // 2. Local build next to the working directory
    let local = join(&config.local_dir, &config.hijack_library);
    if is_file_or_pipe(&local) {
        match canonical_dir(&config.local_dir) {
            Ok(dir) => return Some(dir),
            Err(e) => tracing::debug!(error = %e, "skipping local hijack library"),
        }
    }

    // 3. System library directories
    find_first_matching(&config.system_library_dirs, |dir| {
        is_file_or_pipe(&join(dir, &config.hijack_library))
    })
}

/// Locate `subdir` under the local, per-user or system share directories.
pub fn find_shared_dir(
    env: &dyn EnvSource,
    config: &DiscoveryConfig,
    subdir: &str,
) -> Option<String> {
    find_first_existing(config.shared_dir_candidates(env), subdir)
}

/// Canonical absolute form of `dir` as a string.
pub fn canonical_dir(dir: &str) -> Result<String, PathError> {
    if dir.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let canonical = fs::canonicalize(dir).map_err(|e| PathError::Canonicalize {
        path: Path::new(dir).to_path_buf(),
        reason: e.to_string(),
    })?;

    match canonical.to_str() {
        Some(dir) => Ok(dir.to_owned()),
        None => Err(PathError::NonUtf8(canonical)),
    }
}

/// Join a directory and a file name, reusing a trailing separator.
fn join(dir: &str, name: &str) -> String {
    if dir.ends_with('/') {
        format!("{dir}{name}")
    } else {
        format!("{dir}/{name}")
    }
}
