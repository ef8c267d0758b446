use std::cmp::Ordering;

use crate::records::HistoryRecord;

/// Union per-browser history sequences into one ordered sequence.
///
/// Sorted by `last_visited` descending with unknown timestamps after all
/// known ones. The sort is stable, so among equal or unknown timestamps the
/// per-source scan order survives. Nothing is deduplicated: the same URL
/// visited in two browsers stays two records.
pub fn merge(sources: Vec<Vec<HistoryRecord>>) -> Vec<HistoryRecord> {
    let mut all: Vec<HistoryRecord> = sources.into_iter().flatten().collect();
    all.sort_by(|a, b| match (a.last_visited, b.last_visited) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    all
}
