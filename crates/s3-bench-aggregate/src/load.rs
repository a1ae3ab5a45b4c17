//! Result file loading
//!
//! Each input file holds a JSON array of runner summaries collected on one
//! instance type. Entries are tagged with the instance type parsed from the
//! file name and grouped across files.

use crate::error::AggregateError;
use crate::instance_type::extract_instance_type;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// One runner summary tagged with the instance type it ran on
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregatedEntry {
    /// Instance type label, taken from the file name when loading
    #[serde(default)]
    pub instance_type: String,
    pub tool: String,
    pub concurrency: u64,
    pub part_size_mb: u64,
    pub avg_throughput_mbps: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterations: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_elapsed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_elapsed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_elapsed: Option<f64>,
}

/// Entries grouped by instance type, ordered by label
pub type ResultsByInstance = BTreeMap<String, Vec<AggregatedEntry>>;

/// Load one result file and tag its entries with `instance_type`
fn load_file(path: &Path, instance_type: &str) -> Result<Vec<AggregatedEntry>, AggregateError> {
    let content = std::fs::read_to_string(path).map_err(|e| AggregateError::read(path, e))?;

    let mut entries: Vec<AggregatedEntry> =
        serde_json::from_str(&content).map_err(|source| AggregateError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    for (index, entry) in entries.iter_mut().enumerate() {
        if entry.tool.trim().is_empty() {
            return Err(AggregateError::EmptyTool {
                path: path.to_path_buf(),
                index,
            });
        }
        entry.instance_type = instance_type.to_string();
    }

    Ok(entries)
}

/// Load every file and group entries by instance type.
///
/// Files sharing an instance type are merged into one group, in input order.
/// The first missing or malformed file aborts loading.
pub fn load_results<P: AsRef<Path>>(files: &[P]) -> Result<ResultsByInstance, AggregateError> {
    let mut by_instance = ResultsByInstance::new();

    for file in files {
        let path = file.as_ref();
        let instance_type = extract_instance_type(path);
        let entries = load_file(path, &instance_type)?;

        debug!(
            path = %path.display(),
            instance_type = %instance_type,
            entries = entries.len(),
            "Loaded result file"
        );

        by_instance.entry(instance_type).or_default().extend(entries);
    }

    info!(
        files = files.len(),
        instance_types = by_instance.len(),
        "Results loaded"
    );

    Ok(by_instance)
}
