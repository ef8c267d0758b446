use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::records::BookmarkRecord;

/// Bookmarks document location relative to the profile root.
pub const STORE_RELATIVE: &[&str] = &[
    "AppData",
    "Local",
    "Google",
    "Chrome",
    "User Data",
    "Default",
    "Bookmarks",
];

const URL_LEAF: &str = "url";

#[derive(Debug, Error)]
pub enum BookmarkError {
    #[error("store unavailable: {0}")]
    Unavailable(#[source] std::io::Error),
    #[error("malformed bookmark store: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct BookmarkFile {
    roots: BookmarkRoots,
}

#[derive(Debug, Deserialize)]
struct BookmarkRoots {
    bookmark_bar: BookmarkNode,
}

/// One node of the stored tree. Unknown node kinds deserialize fine and are
/// skipped during the walk rather than rejected.
#[derive(Debug, Deserialize)]
pub struct BookmarkNode {
    #[serde(rename = "type")]
    node_type: Option<String>,
    name: Option<String>,
    url: Option<String>,
    children: Option<Vec<BookmarkNode>>,
}

pub fn store_path(profile_root: &Path) -> PathBuf {
    STORE_RELATIVE.iter().fold(profile_root.to_path_buf(), |p, part| p.join(part))
}

/// Extract bookmarks from the default Chromium profile under `profile_root`.
///
/// Only the bookmark-bar subtree is walked; bookmarks filed under other
/// roots are out of scope. A missing store yields an empty sequence.
pub fn extract(profile_root: &Path) -> Result<Vec<BookmarkRecord>, BookmarkError> {
    extract_store(&store_path(profile_root))
}

/// Extract bookmarks from an explicitly located document file.
pub fn extract_store(store: &Path) -> Result<Vec<BookmarkRecord>, BookmarkError> {
    if !store.exists() {
        debug!("bookmark store not present: {}", store.display());
        return Ok(Vec::new());
    }
    let bytes = std::fs::read(store).map_err(BookmarkError::Unavailable)?;
    extract_document(&bytes)
}

/// Extract bookmarks from raw document bytes.
pub fn extract_document(bytes: &[u8]) -> Result<Vec<BookmarkRecord>, BookmarkError> {
    let file: BookmarkFile = serde_json::from_slice(bytes)?;
    let mut out = Vec::new();
    walk(&file.roots.bookmark_bar, &mut out);
    Ok(out)
}

/// Depth-first walk of a bookmark subtree.
///
/// Children are visited in stored order before the node's own leaf-ness is
/// evaluated; stored trees never give a node both children and a URL, so
/// the emitted order is the pre-order of the leaves.
pub fn walk(node: &BookmarkNode, out: &mut Vec<BookmarkRecord>) {
    if let Some(children) = &node.children {
        for child in children {
            walk(child, out);
        }
    }
    if node.node_type.as_deref() == Some(URL_LEAF) {
        out.push(BookmarkRecord {
            title: node.name.clone().unwrap_or_default(),
            url: node.url.clone().unwrap_or_default(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(json: &str) -> Vec<BookmarkRecord> {
        extract_document(json.as_bytes()).expect("extract")
    }

    #[test]
    fn flattens_tree_in_preorder() {
        let json = r#"{
            "roots": {
                "bookmark_bar": {
                    "type": "folder",
                    "children": [
                        {"type": "url", "name": "A", "url": "http://a"},
                        {
                            "type": "folder",
                            "name": "nested",
                            "children": [
                                {"type": "url", "name": "B", "url": "http://b"}
                            ]
                        },
                        {"type": "url", "name": "C", "url": "http://c"}
                    ]
                }
            }
        }"#;
        let got = records(json);
        assert_eq!(
            got,
            vec![
                BookmarkRecord { title: "A".into(), url: "http://a".into() },
                BookmarkRecord { title: "B".into(), url: "http://b".into() },
                BookmarkRecord { title: "C".into(), url: "http://c".into() },
            ]
        );
    }

    #[test]
    fn missing_name_defaults_to_empty() {
        let json = r#"{
            "roots": {
                "bookmark_bar": {
                    "children": [{"type": "url", "url": "http://anon"}]
                }
            }
        }"#;
        let got = records(json);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].title, "");
        assert_eq!(got[0].url, "http://anon");
    }

    #[test]
    fn unknown_node_kinds_are_skipped() {
        let json = r#"{
            "roots": {
                "bookmark_bar": {
                    "children": [
                        {"type": "separator"},
                        {"type": "url", "name": "kept", "url": "http://kept"},
                        {"name": "typeless leaf"}
                    ]
                }
            }
        }"#;
        let got = records(json);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].title, "kept");
    }

    #[test]
    fn empty_bar_is_not_an_error() {
        let got = records(r#"{"roots": {"bookmark_bar": {"type": "folder", "children": []}}}"#);
        assert!(got.is_empty());

        let got = records(r#"{"roots": {"bookmark_bar": {}}}"#);
        assert!(got.is_empty());
    }

    #[test]
    fn missing_roots_is_malformed() {
        let err = extract_document(br#"{"version": 1}"#).expect_err("must fail");
        assert!(matches!(err, BookmarkError::Malformed(_)));

        let err = extract_document(b"not json").expect_err("must fail");
        assert!(matches!(err, BookmarkError::Malformed(_)));
    }

    #[test]
    fn missing_store_yields_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let got = extract(dir.path()).expect("extract");
        assert!(got.is_empty());
    }
}
