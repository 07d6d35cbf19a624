//! Per-invocation run log.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Local};

/// `YYYY-MM-DD HH:MM:SS | <url> | Exit code: N`
pub(crate) fn format_entry(at: DateTime<Local>, url: &str, exit_code: u8) -> String {
    format!(
        "{} | {} | Exit code: {}",
        at.format("%Y-%m-%d %H:%M:%S"),
        url,
        exit_code
    )
}

/// Append one line for this run to `path`, creating parent directories.
pub(crate) fn append(path: &Path, url: &str, exit_code: u8) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", format_entry(Local::now(), url, exit_code))
}
