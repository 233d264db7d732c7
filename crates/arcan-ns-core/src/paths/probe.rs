//! Filesystem existence probes.
//!
//! Both probes follow symlinks (like `stat`) and answer `false` instead of
//! failing: an empty path, a missing path or a permission error all read as
//! "not there".

use std::fs;

/// Whether `path` resolves to a directory.
pub fn is_directory(path: &str) -> bool {
    if path.is_empty() {
        return false;
    }
    fs::metadata(path).is_ok_and(|meta| meta.is_dir())
}

/// Whether `path` resolves to a regular file or a named pipe.
///
/// Directories, sockets, devices and dangling symlinks are rejected.
pub fn is_file_or_pipe(path: &str) -> bool {
    if path.is_empty() {
        return false;
    }
    fs::metadata(path).is_ok_and(|meta| {
        let file_type = meta.file_type();
        file_type.is_file() || is_fifo(&file_type)
    })
}

#[cfg(unix)]
fn is_fifo(file_type: &fs::FileType) -> bool {
    use std::os::unix::fs::FileTypeExt;
    file_type.is_fifo()
}

#[cfg(not(unix))]
const fn is_fifo(_file_type: &fs::FileType) -> bool {
    false
}
