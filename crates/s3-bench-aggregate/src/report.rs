//! Report building, table rendering and `summary.json` output

use crate::bandwidth::bandwidth_for;
use crate::best::{BestSetting, find_best_settings};
use crate::error::AggregateError;
use crate::load::ResultsByInstance;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name of the machine-readable summary
pub const SUMMARY_FILE_NAME: &str = "summary.json";

/// Best settings for one instance type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InstanceReport {
    pub bandwidth: String,
    pub best_settings: BTreeMap<String, BestSetting>,
}

/// Instance type → report, ordered by instance type
pub type ReportSummary = BTreeMap<String, InstanceReport>;

/// Compute bandwidth and best settings for every instance type
pub fn build_report(results: &ResultsByInstance) -> ReportSummary {
    results
        .iter()
        .map(|(instance_type, entries)| {
            let report = InstanceReport {
                bandwidth: bandwidth_for(instance_type).to_string(),
                best_settings: find_best_settings(entries),
            };
            (instance_type.clone(), report)
        })
        .collect()
}

fn settings_table(best_settings: &BTreeMap<String, BestSetting>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Tool"),
            Cell::new("Concurrency"),
            Cell::new("Part Size"),
            Cell::new("Throughput"),
        ]);

    for (tool, settings) in best_settings {
        table.add_row(vec![
            Cell::new(tool),
            Cell::new(settings.concurrency).set_alignment(CellAlignment::Right),
            Cell::new(format!("{} MB", settings.part_size_mb)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1} MB/s", settings.throughput_mbps))
                .set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

/// Render the human-readable report, one table per instance type
pub fn render_report(summary: &ReportSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== S3 Download Benchmark - Optimal Settings by Instance Type ===\n");

    for (instance_type, report) in summary {
        let _ = writeln!(out, "Instance: {instance_type} ({})", report.bandwidth);
        let _ = writeln!(out, "{}\n", settings_table(&report.best_settings));
    }

    out
}

/// Directory `summary.json` goes into: the parent of the first input file
pub fn summary_dir(first_file: &Path) -> PathBuf {
    match first_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Write `summary.json` next to `first_file` and return its path
pub fn write_summary(summary: &ReportSummary, first_file: &Path) -> Result<PathBuf, AggregateError> {
    let path = summary_dir(first_file).join(SUMMARY_FILE_NAME);

    let json = serde_json::to_string_pretty(summary).map_err(AggregateError::Serialize)?;
    std::fs::write(&path, json + "\n").map_err(|source| AggregateError::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), instance_types = summary.len(), "Summary written");
    Ok(path)
}
