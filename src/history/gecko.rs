use std::path::{Path, PathBuf};

use tracing::debug;

use crate::history::{HistoryError, has_columns, has_table, open_read_only};
use crate::records::HistoryRecord;
use crate::snapshot;
use crate::timestamp::{self, EpochScheme};

/// Profile container location relative to the profile root.
pub const PROFILES_RELATIVE: &[&str] = &["AppData", "Roaming", "Mozilla", "Firefox", "Profiles"];

pub const STORE_FILE: &str = "places.sqlite";

const EXPECTED_COLUMNS: &[&str] = &["url", "title", "visit_count", "last_visit_date"];

pub fn profiles_dir(profile_root: &Path) -> PathBuf {
    PROFILES_RELATIVE.iter().fold(profile_root.to_path_buf(), |p, part| p.join(part))
}

/// Extract history from a Gecko profile under `profile_root`.
///
/// Gecko nests its stores under generated per-profile directory names, so
/// the profile has to be discovered first. When several profiles exist the
/// first one in directory-listing order wins; callers that need a specific
/// profile should pass its `places.sqlite` to [`extract_store`] directly.
pub fn extract(profile_root: &Path) -> Result<Vec<HistoryRecord>, HistoryError> {
    let Some(profile) = discover_profile(&profiles_dir(profile_root)) else {
        return Ok(Vec::new());
    };
    extract_store(&profile.join(STORE_FILE))
}

/// Extract history from an explicitly located `places.sqlite`.
pub fn extract_store(store: &Path) -> Result<Vec<HistoryRecord>, HistoryError> {
    match snapshot::with_snapshot(store, |copy| scan(copy))? {
        Some(records) => records,
        None => Ok(Vec::new()),
    }
}

fn discover_profile(container: &Path) -> Option<PathBuf> {
    let entries = std::fs::read_dir(container).ok()?;
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            debug!("selected gecko profile {}", path.display());
            return Some(path);
        }
    }
    None
}

fn scan(path: &Path) -> Result<Vec<HistoryRecord>, HistoryError> {
    let conn = open_read_only(path)?;
    if !has_table(&conn, "moz_places")? || !has_columns(&conn, "moz_places", EXPECTED_COLUMNS)? {
        debug!("gecko store lacks expected moz_places schema, skipping");
        return Ok(Vec::new());
    }

    let mut stmt = conn.prepare(
        "SELECT url, title, visit_count, last_visit_date FROM moz_places WHERE url NOT NULL",
    )?;
    let rows = stmt.query_map([], |row| {
        let url: String = row.get(0)?;
        let title: Option<String> = row.get(1)?;
        let visit_count: Option<i64> = row.get(2)?;
        let last_visit_date: Option<i64> = row.get(3)?;
        Ok((url, title, visit_count, last_visit_date))
    })?;

    let mut out = Vec::new();
    for row in rows {
        let (url, title, visit_count, last_visit_date) = row?;
        // NULL visit dates coerce to 0 and decode to the Unix epoch.
        let last_visited = Some(timestamp::decode_opt(last_visit_date, EpochScheme::UnixMicros));
        out.push(HistoryRecord {
            url,
            title: title.unwrap_or_default(),
            visit_count: visit_count.unwrap_or(0).max(0) as u32,
            last_visited,
        });
    }

    Ok(out)
}
