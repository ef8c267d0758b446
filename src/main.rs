use anyhow::Result;
use tracing::{info, warn};

use webtrail::{cli, config, export, loader, logging, sysinfo};

fn main() -> Result<()> {
    logging::init_logging();

    let cli_opts = cli::parse();
    let mut cfg = config::load_config(cli_opts.config_path.as_deref())?;
    if let Some(root) = cli_opts.profile_root.clone() {
        cfg.profile_root = Some(root);
    }

    if cli_opts.system_info {
        let snapshot = sysinfo::collect();
        if let Some(path) = cli_opts.export_system.as_deref() {
            export::write_system_csv(path, &snapshot)?;
            info!("system snapshot exported to {}", path.display());
        }
        for entry in &snapshot {
            println!("{}\t{}", entry.property, entry.value);
        }
        return Ok(());
    }

    info!(
        "loading browser artefacts from {}",
        cfg.resolve_profile_root().display()
    );
    let result = loader::load(&cfg);
    for failure in &result.failures {
        warn!("{}: {}", failure.source, failure.message);
    }
    info!(
        "extracted {} history records and {} bookmarks",
        result.history.len(),
        result.bookmarks.len()
    );

    if let Some(path) = cli_opts.export_history.as_deref() {
        export::write_history_csv(path, &result.history)?;
        info!("history exported to {}", path.display());
    }
    if let Some(path) = cli_opts.export_bookmarks.as_deref() {
        export::write_bookmarks_csv(path, &result.bookmarks)?;
        info!("bookmarks exported to {}", path.display());
    }

    let query = cli_opts.search.as_deref();
    let limit = cli_opts.limit.unwrap_or(usize::MAX);

    if cli_opts.bookmarks {
        for record in result
            .bookmarks
            .iter()
            .filter(|r| query.is_none_or(|q| r.matches(q)))
            .take(limit)
        {
            println!("{}\t{}", record.title, record.url);
        }
    } else {
        for record in result
            .history
            .iter()
            .filter(|r| query.is_none_or(|q| r.matches(q)))
            .take(limit)
        {
            let visited = record
                .last_visited
                .map(|dt| dt.to_rfc3339())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{}\t{}\t{}\t{}",
                visited, record.visit_count, record.url, record.title
            );
        }
    }

    Ok(())
}
