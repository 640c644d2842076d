//! Sibling backups of completed files

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// `<path>.backup`
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".backup");
    PathBuf::from(name)
}

/// Copy `path` to its backup location, replacing an older backup.
pub fn create_backup(path: &Path) -> io::Result<PathBuf> {
    let backup = backup_path(path);
    fs::copy(path, &backup)?;
    debug!(path = %path.display(), backup = %backup.display(), "created backup");
    Ok(backup)
}
