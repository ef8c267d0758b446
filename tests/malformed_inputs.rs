use std::path::Path;

use rusqlite::Connection;

use webtrail::config::{self, Config};
use webtrail::loader;
use webtrail::records::ArtifactSource;

fn config_for(root: &Path) -> Config {
    let mut cfg = config::load_config(None).expect("default config");
    cfg.profile_root = Some(root.to_path_buf());
    cfg
}

fn create_gecko_store(root: &Path, rows: &[(&str, i64)]) {
    let profile_dir = webtrail::history::gecko::profiles_dir(root).join("x1.default");
    std::fs::create_dir_all(&profile_dir).expect("mkdir");
    let conn = Connection::open(profile_dir.join(webtrail::history::gecko::STORE_FILE))
        .expect("conn");
    conn.execute(
        "CREATE TABLE moz_places (id INTEGER PRIMARY KEY, url TEXT, title TEXT, \
         visit_count INTEGER, last_visit_date INTEGER)",
        [],
    )
    .expect("create");
    for (url, date) in rows {
        conn.execute(
            "INSERT INTO moz_places (url, title, visit_count, last_visit_date) \
             VALUES (?1, '', 1, ?2)",
            (url, date),
        )
        .expect("insert");
    }
}

fn write_under(root: &Path, relative: &[&str], bytes: &[u8]) {
    let path = relative.iter().fold(root.to_path_buf(), |p, part| p.join(part));
    std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    std::fs::write(path, bytes).expect("write");
}

#[test]
fn corrupt_chromium_store_does_not_abort_gecko() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_under(
        dir.path(),
        webtrail::history::chromium::STORE_RELATIVE,
        b"this is not a sqlite database",
    );
    create_gecko_store(dir.path(), &[("https://healthy.example", 1_700_000_000_000_000)]);

    let result = loader::load(&config_for(dir.path()));

    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].source, ArtifactSource::ChromiumHistory);
    assert_eq!(result.history.len(), 1);
    assert_eq!(result.history[0].url, "https://healthy.example");
}

#[test]
fn malformed_bookmarks_do_not_abort_history() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_under(dir.path(), webtrail::bookmarks::STORE_RELATIVE, b"{\"version\": 1}");
    create_gecko_store(dir.path(), &[("https://healthy.example", 1_700_000_000_000_000)]);

    let result = loader::load(&config_for(dir.path()));

    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].source, ArtifactSource::ChromiumBookmarks);
    assert!(result.bookmarks.is_empty());
    assert_eq!(result.history.len(), 1);
}

#[test]
fn store_missing_expected_columns_loads_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = webtrail::history::chromium::store_path(dir.path());
    std::fs::create_dir_all(store.parent().expect("parent")).expect("mkdir");
    let conn = Connection::open(&store).expect("conn");
    // Plausible future schema without the expected columns.
    conn.execute("CREATE TABLE urls (id INTEGER PRIMARY KEY, origin TEXT)", [])
        .expect("create");
    drop(conn);

    let result = loader::load(&config_for(dir.path()));
    assert!(result.failures.is_empty(), "schema drift is absence, not corruption");
    assert!(result.history.is_empty());
}

#[test]
fn every_store_broken_still_completes() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_under(dir.path(), webtrail::history::chromium::STORE_RELATIVE, b"garbage");
    write_under(dir.path(), webtrail::bookmarks::STORE_RELATIVE, b"also garbage");
    let profile_dir = webtrail::history::gecko::profiles_dir(dir.path()).join("p.default");
    std::fs::create_dir_all(&profile_dir).expect("mkdir");
    std::fs::write(profile_dir.join(webtrail::history::gecko::STORE_FILE), b"garbage")
        .expect("write");

    let result = loader::load(&config_for(dir.path()));

    assert_eq!(result.failures.len(), 3);
    assert!(result.history.is_empty());
    assert!(result.bookmarks.is_empty());
}
