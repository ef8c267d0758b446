//! Browser artefact extraction library.
//!
//! Reads history and bookmark stores left on disk by Chromium- and
//! Gecko-family browsers, normalizes them into a single record model, and
//! merges them into one deterministically ordered sequence. Access to the
//! live store files always goes through a private temporary copy so a
//! browser holding the database open never blocks or corrupts a run.

pub mod bookmarks;
pub mod cli;
pub mod config;
pub mod export;
pub mod history;
pub mod loader;
pub mod logging;
pub mod merge;
pub mod records;
pub mod snapshot;
pub mod sysinfo;
pub mod timestamp;
