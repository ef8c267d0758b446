use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ChromiumConfig {
    pub enabled: bool,
    /// Explicit History database path; overrides the profile-root lookup.
    pub history_path: Option<PathBuf>,
    /// Explicit Bookmarks document path; overrides the profile-root lookup.
    pub bookmarks_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeckoConfig {
    pub enabled: bool,
    /// Explicit places.sqlite path; overrides profile discovery.
    pub places_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Root under which the per-browser store paths live. Blank uses the
    /// current user's home directory; point it at a mounted image to scan
    /// another machine's artefacts.
    pub profile_root: Option<PathBuf>,
    pub chromium: ChromiumConfig,
    pub gecko: GeckoConfig,
}

impl Config {
    pub fn resolve_profile_root(&self) -> PathBuf {
        self.profile_root
            .clone()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let bytes: Vec<u8> = if let Some(p) = path {
        std::fs::read(p)?
    } else {
        include_bytes!("../config/default.yml").to_vec()
    };
    let config: Config = serde_yaml::from_slice(&bytes)?;
    Ok(config)
}
