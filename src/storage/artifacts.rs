use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;

pub const RAW_ISSUES_JSON: &str = "issues.json";
pub const SIMPLIFIED_ISSUES_JSON: &str = "issues_simplified.json";
pub const SIMPLIFIED_ISSUES_CSV: &str = "issues_simplified.csv";
pub const BACKLOG_CSV: &str = "Backlog - Kanban - Pila de producto.csv";

pub const INTERMEDIATE_FILES: [&str; 4] = [
    RAW_ISSUES_JSON,
    SIMPLIFIED_ISSUES_JSON,
    SIMPLIFIED_ISSUES_CSV,
    BACKLOG_CSV,
];

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct CleanupReport {
    pub removed: Vec<String>,
    pub missing: Vec<String>,
    pub failed: Vec<String>,
}

pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    tracing::debug!("Wrote {}", path.display());
    Ok(())
}

/// Deletes each file under `dir`. Failures are logged and reported, never raised.
pub fn cleanup(dir: &Path, files: &[&str]) -> CleanupReport {
    let mut report = CleanupReport::default();

    for name in files {
        let path = dir.join(name);
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::info!("Removed intermediate file: {}", path.display());
                report.removed.push(name.to_string());
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("Intermediate file not found, nothing to remove: {}", path.display());
                report.missing.push(name.to_string());
            }
            Err(e) => {
                tracing::warn!("Failed to remove {}: {}", path.display(), e);
                report.failed.push(name.to_string());
            }
        }
    }

    report
}
