use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct CliOptions {
    /// Profile root to scan (defaults to the current user's home directory)
    #[arg(long)]
    pub profile_root: Option<PathBuf>,

    /// Optional path to config file (YAML)
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// Case-insensitive substring filter over URL and title
    #[arg(short, long)]
    pub search: Option<String>,

    /// Print bookmarks instead of history
    #[arg(long)]
    pub bookmarks: bool,

    /// Print the host system snapshot and exit
    #[arg(long)]
    pub system_info: bool,

    /// Limit the number of printed records
    #[arg(long)]
    pub limit: Option<usize>,

    /// Write history records to this CSV file
    #[arg(long)]
    pub export_history: Option<PathBuf>,

    /// Write bookmark records to this CSV file
    #[arg(long)]
    pub export_bookmarks: Option<PathBuf>,

    /// Write the system snapshot to this CSV file
    #[arg(long)]
    pub export_system: Option<PathBuf>,
}

pub fn parse() -> CliOptions {
    CliOptions::parse()
}
