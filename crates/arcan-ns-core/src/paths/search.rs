//! Priority-ordered candidate search.
//!
//! Candidate order is owned by the caller and is the whole policy: local
//! installs are listed before per-user installs, which come before
//! system-wide ones.

use super::probe::is_directory;

/// Return `prefix/suffix` for the first candidate where that is a directory.
///
/// The join is plain string concatenation, so an empty prefix probes
/// `/suffix`.
pub fn find_first_existing<I, S>(candidates: I, suffix: &str) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    candidates
        .into_iter()
        .map(|prefix| format!("{}/{suffix}", prefix.as_ref()))
        .find(|path| {
            let hit = is_directory(path);
            tracing::trace!(path = %path, hit, "probe");
            hit
        })
}

/// Return the first candidate that satisfies `probe`, copied verbatim.
pub fn find_first_matching<I, S, F>(candidates: I, probe: F) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: Fn(&str) -> bool,
{
    candidates
        .into_iter()
        .find(|candidate| probe(candidate.as_ref()))
        .map(|candidate| candidate.as_ref().to_owned())
}
