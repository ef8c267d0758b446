use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("store unavailable: {0}")]
    Unavailable(#[source] std::io::Error),
}

/// Run `work` against a private copy of `source`.
///
/// Browser processes keep their stores open with exclusive locks, so the
/// live file is never read directly: it is copied byte-for-byte into a fresh
/// temporary directory and `work` receives the copy's path. The directory
/// (and with it the copy) is removed on every exit path, including a panic
/// inside `work`.
///
/// A missing `source` is not an error: most machines lack at least one of
/// the supported browsers. Returns `Ok(None)` without touching the
/// filesystem. Copy failures surface as [`SnapshotError::Unavailable`]; no
/// retry is attempted.
pub fn with_snapshot<T, F>(source: &Path, work: F) -> Result<Option<T>, SnapshotError>
where
    F: FnOnce(&Path) -> T,
{
    if !source.exists() {
        debug!("store not present: {}", source.display());
        return Ok(None);
    }

    let dir = tempfile::tempdir().map_err(SnapshotError::Unavailable)?;
    let file_name = source.file_name().unwrap_or_else(|| OsStr::new("store"));
    let copy = dir.path().join(file_name);
    fs::copy(source, &copy).map_err(SnapshotError::Unavailable)?;
    debug!("snapshotted {} -> {}", source.display(), copy.display());

    Ok(Some(work(&copy)))
}
