use std::path::Path;

use serde::Serialize;

use crate::records::{BookmarkRecord, HistoryRecord, SystemInfoEntry};

#[derive(Serialize)]
struct HistoryCsv<'a> {
    url: &'a str,
    title: &'a str,
    visit_count: u32,
    last_visited: Option<String>,
}

/// Write history records as CSV, one row per record, timestamps in RFC 3339.
pub fn write_history_csv(path: &Path, records: &[HistoryRecord]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(HistoryCsv {
            url: &record.url,
            title: &record.title,
            visit_count: record.visit_count,
            last_visited: record.last_visited.map(|dt| dt.to_rfc3339()),
        })?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_bookmarks_csv(path: &Path, records: &[BookmarkRecord]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_system_csv(path: &Path, entries: &[SystemInfoEntry]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    for entry in entries {
        writer.serialize(entry)?;
    }
    writer.flush()?;
    Ok(())
}
