//! Best setting selection per tool

use crate::load::AggregatedEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Highest-throughput configuration found for a tool
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BestSetting {
    pub concurrency: u64,
    pub part_size_mb: u64,
    pub throughput_mbps: f64,
}

impl From<&AggregatedEntry> for BestSetting {
    fn from(entry: &AggregatedEntry) -> Self {
        Self {
            concurrency: entry.concurrency,
            part_size_mb: entry.part_size_mb,
            throughput_mbps: entry.avg_throughput_mbps,
        }
    }
}

/// Pick the entry with the highest average throughput for each tool.
///
/// An entry only replaces the current best on strictly higher throughput, so
/// ties keep the first entry encountered.
pub fn find_best_settings(entries: &[AggregatedEntry]) -> BTreeMap<String, BestSetting> {
    let mut best: BTreeMap<&str, &AggregatedEntry> = BTreeMap::new();

    for entry in entries {
        match best.entry(entry.tool.as_str()) {
            Entry::Vacant(slot) => {
                slot.insert(entry);
            }
            Entry::Occupied(mut slot) => {
                if entry.avg_throughput_mbps > slot.get().avg_throughput_mbps {
                    slot.insert(entry);
                }
            }
        }
    }

    best.into_iter()
        .map(|(tool, entry)| (tool.to_string(), BestSetting::from(entry)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(tool: &str, concurrency: u64, throughput: f64) -> AggregatedEntry {
        AggregatedEntry {
            instance_type: "t3.micro".to_string(),
            tool: tool.to_string(),
            concurrency,
            part_size_mb: 16,
            avg_throughput_mbps: throughput,
            iterations: Some(3),
            avg_elapsed: None,
            min_elapsed: None,
            max_elapsed: None,
        }
    }

    #[test]
    fn test_best_per_tool() {
        let entries = [entry("a", 1, 50.0), entry("a", 2, 80.0), entry("b", 3, 30.0)];
        let best = find_best_settings(&entries);

        assert_eq!(best.len(), 2);
        assert_eq!(
            best["a"],
            BestSetting {
                concurrency: 2,
                part_size_mb: 16,
                throughput_mbps: 80.0
            }
        );
        assert_eq!(best["b"].throughput_mbps, 30.0);
        assert_eq!(best["b"].concurrency, 3);
    }

    #[test]
    fn test_tie_keeps_first() {
        let entries = [entry("a", 4, 80.0), entry("a", 8, 80.0), entry("a", 16, 10.0)];
        let best = find_best_settings(&entries);
        assert_eq!(best["a"].concurrency, 4);
    }

    #[test]
    fn test_empty() {
        assert!(find_best_settings(&[]).is_empty());
    }
}
