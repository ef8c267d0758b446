pub mod chromium;
pub mod gecko;

use rusqlite::{Connection, OpenFlags};
use thiserror::Error;

use crate::snapshot::SnapshotError;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("store unavailable: {0}")]
    Store(#[from] SnapshotError),
    #[error("corrupt history store: {0}")]
    Corrupt(#[from] rusqlite::Error),
}

pub(crate) fn open_read_only(path: &std::path::Path) -> Result<Connection, rusqlite::Error> {
    Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
}

pub(crate) fn has_table(conn: &Connection, name: &str) -> Result<bool, rusqlite::Error> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let mut rows = stmt.query([name])?;
    Ok(rows.next()?.is_some())
}

/// True when `table` carries every column in `expected`.
pub(crate) fn has_columns(
    conn: &Connection,
    table: &str,
    expected: &[&str],
) -> Result<bool, rusqlite::Error> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table})"))?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(expected
        .iter()
        .all(|col| names.iter().any(|name| name == col)))
}
