use chrono::{DateTime, Utc};
use serde::Serialize;

/// One visited URL from a browser history store.
///
/// Records are read-only snapshots taken at extraction time. Identity is not
/// deduplicated: a URL visited in two browsers yields two records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRecord {
    pub url: String,
    pub title: String,
    pub visit_count: u32,
    pub last_visited: Option<DateTime<Utc>>,
}

/// One bookmark leaf from a bookmark tree; folders are never emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookmarkRecord {
    pub title: String,
    pub url: String,
}

/// One host attribute, in the collector's fixed enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemInfoEntry {
    pub property: String,
    pub value: String,
}

/// Which store an extraction failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactSource {
    ChromiumHistory,
    GeckoHistory,
    ChromiumBookmarks,
}

impl std::fmt::Display for ArtifactSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ArtifactSource::ChromiumHistory => "chromium history",
            ArtifactSource::GeckoHistory => "gecko history",
            ArtifactSource::ChromiumBookmarks => "chromium bookmarks",
        };
        f.write_str(name)
    }
}

/// A per-store failure that did not abort the rest of the load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadFailure {
    pub source: ArtifactSource,
    pub message: String,
}

/// Everything one load pass produced.
///
/// The whole result is an explicit value handed back to the caller; nothing
/// is stashed in shared state between loads. Failures are informational:
/// the sequences hold whatever the healthy stores contributed.
#[derive(Debug, Clone, Default)]
pub struct LoadResult {
    pub history: Vec<HistoryRecord>,
    pub bookmarks: Vec<BookmarkRecord>,
    pub failures: Vec<LoadFailure>,
}

impl HistoryRecord {
    /// Case-insensitive substring match against URL or title.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.url.to_lowercase().contains(&query) || self.title.to_lowercase().contains(&query)
    }
}

impl BookmarkRecord {
    /// Case-insensitive substring match against URL or title.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.url.to_lowercase().contains(&query) || self.title.to_lowercase().contains(&query)
    }
}
