use std::path::{Path, PathBuf};

use tracing::debug;

use crate::history::{HistoryError, has_columns, has_table, open_read_only};
use crate::records::HistoryRecord;
use crate::snapshot;
use crate::timestamp::{self, EpochScheme};

/// History database location relative to the profile root.
pub const STORE_RELATIVE: &[&str] = &[
    "AppData",
    "Local",
    "Google",
    "Chrome",
    "User Data",
    "Default",
    "History",
];

const EXPECTED_COLUMNS: &[&str] = &["url", "title", "visit_count", "last_visit_time"];

pub fn store_path(profile_root: &Path) -> PathBuf {
    STORE_RELATIVE.iter().fold(profile_root.to_path_buf(), |p, part| p.join(part))
}

/// Extract history from the default Chromium profile under `profile_root`.
///
/// A missing store yields an empty sequence. The live database is never
/// opened directly; scanning happens on a snapshot copy.
pub fn extract(profile_root: &Path) -> Result<Vec<HistoryRecord>, HistoryError> {
    extract_store(&store_path(profile_root))
}

/// Extract history from an explicitly located database file.
pub fn extract_store(store: &Path) -> Result<Vec<HistoryRecord>, HistoryError> {
    match snapshot::with_snapshot(store, |copy| scan(copy))? {
        Some(records) => records,
        None => Ok(Vec::new()),
    }
}

fn scan(path: &Path) -> Result<Vec<HistoryRecord>, HistoryError> {
    let conn = open_read_only(path)?;
    if !has_table(&conn, "urls")? || !has_columns(&conn, "urls", EXPECTED_COLUMNS)? {
        debug!("chromium store lacks expected urls schema, skipping");
        return Ok(Vec::new());
    }

    let mut stmt = conn.prepare("SELECT url, title, visit_count, last_visit_time FROM urls")?;
    let rows = stmt.query_map([], |row| {
        let url: Option<String> = row.get(0)?;
        let title: Option<String> = row.get(1)?;
        let visit_count: Option<i64> = row.get(2)?;
        let last_visit_time: Option<i64> = row.get(3)?;
        Ok((url, title, visit_count, last_visit_time))
    })?;

    let mut out = Vec::new();
    for row in rows {
        let (url, title, visit_count, last_visit_time) = row?;
        // A URL is the minimal identity of a history entry.
        let Some(url) = url else { continue };
        // Raw 0 is Chromium's no-visit sentinel.
        let last_visited = last_visit_time
            .filter(|&raw| raw != 0)
            .map(|raw| timestamp::decode(raw, EpochScheme::Webkit));
        out.push(HistoryRecord {
            url,
            title: title.unwrap_or_default(),
            visit_count: visit_count.unwrap_or(0).max(0) as u32,
            last_visited,
        });
    }

    Ok(out)
}
