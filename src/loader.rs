use tracing::{debug, warn};

use crate::config::Config;
use crate::records::{ArtifactSource, LoadFailure, LoadResult};
use crate::{bookmarks, history, merge};

/// Run every enabled extractor and merge what they produced.
///
/// Infallible by design: each extractor failure is recorded as a
/// [`LoadFailure`] and contributes an empty sequence, so one corrupt or
/// unreadable store never stops the siblings from contributing records.
pub fn load(cfg: &Config) -> LoadResult {
    let root = cfg.resolve_profile_root();
    let mut failures = Vec::new();
    let mut history_sources = Vec::new();

    if cfg.chromium.enabled {
        let result = match &cfg.chromium.history_path {
            Some(store) => history::chromium::extract_store(store),
            None => history::chromium::extract(&root),
        };
        history_sources.push(unwrap_or_report(
            result,
            ArtifactSource::ChromiumHistory,
            &mut failures,
        ));
    } else {
        debug!("chromium extraction disabled");
    }

    if cfg.gecko.enabled {
        let result = match &cfg.gecko.places_path {
            Some(store) => history::gecko::extract_store(store),
            None => history::gecko::extract(&root),
        };
        history_sources.push(unwrap_or_report(
            result,
            ArtifactSource::GeckoHistory,
            &mut failures,
        ));
    } else {
        debug!("gecko extraction disabled");
    }

    let bookmarks = if cfg.chromium.enabled {
        let result = match &cfg.chromium.bookmarks_path {
            Some(store) => bookmarks::extract_store(store),
            None => bookmarks::extract(&root),
        };
        unwrap_or_report(result, ArtifactSource::ChromiumBookmarks, &mut failures)
    } else {
        Vec::new()
    };

    LoadResult {
        history: merge::merge(history_sources),
        bookmarks,
        failures,
    }
}

fn unwrap_or_report<T, E: std::error::Error>(
    result: Result<Vec<T>, E>,
    source: ArtifactSource,
    failures: &mut Vec<LoadFailure>,
) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(err) => {
            warn!("{source} extraction failed: {err}");
            failures.push(LoadFailure { source, message: err.to_string() });
            Vec::new()
        }
    }
}
