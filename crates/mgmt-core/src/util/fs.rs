//! Filesystem utilities.

use std::io;
use std::path::{Path, PathBuf};

/// Expand a leading `~` to the current user's home directory.
pub fn expand_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();

    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }

    path.to_path_buf()
}

/// Make `path` absolute against the current directory, after tilde
/// expansion. Already-absolute paths are returned unchanged.
pub fn absolutize(path: impl AsRef<Path>) -> io::Result<PathBuf> {
    let path = expand_path(path);
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

/// Whether the current process can create files inside `dir`.
///
/// Probes by creating and removing a hidden temporary file, which reflects
/// ownership, ACLs and read-only mounts alike. Missing directories are not
/// writable.
pub fn is_writable_dir(dir: impl AsRef<Path>) -> bool {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return false;
    }

    tempfile::Builder::new()
        .prefix(".write-probe")
        .tempfile_in(dir)
        .is_ok()
}
