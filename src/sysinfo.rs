use crate::records::SystemInfoEntry;

/// Collect a flat snapshot of host attributes.
///
/// The enumeration order is fixed; consumers render it as-is. Shares no
/// state with the extractors.
pub fn collect() -> Vec<SystemInfoEntry> {
    let username = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_default();
    let host = hostname::get()
        .map(|h| h.to_string_lossy().into_owned())
        .unwrap_or_default();

    vec![
        entry("Username", username),
        entry("Hostname", host),
        entry("OS", std::env::consts::OS.to_string()),
        entry("Architecture", std::env::consts::ARCH.to_string()),
        entry("CPU Cores", num_cpus::get().to_string()),
    ]
}

fn entry(property: &str, value: String) -> SystemInfoEntry {
    SystemInfoEntry { property: property.to_string(), value }
}
