//! Offline commands: extract fields from a saved report, summarize a dataset.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::Config;
use crate::storage;

use super::format::format_record;

pub(super) fn cmd_extract(config: &Config, report: &Path) -> Result<(), String> {
    let text = fs::read_to_string(report)
        .map_err(|e| format!("failed to read {}: {e}", report.display()))?;

    let fields = config
        .extractor()?
        .extract(&text)
        .map_err(|e| format!("{}: {e}", report.display()))?;

    let json = serde_json::to_string_pretty(&fields)
        .map_err(|e| format!("failed to serialize fields: {e}"))?;
    println!("{json}");
    Ok(())
}

pub(super) fn cmd_show(config: &Config, path: Option<PathBuf>) -> Result<(), String> {
    let path = path.unwrap_or_else(|| config.output.clone());
    let dataset = storage::load(&path).map_err(|e| e.to_string())?;

    if dataset.is_empty() {
        println!("No objects");
        return Ok(());
    }

    for record in dataset.objects() {
        println!("{}", format_record(record));
    }
    eprintln!("{} object(s) in {}", dataset.count(), path.display());
    Ok(())
}
