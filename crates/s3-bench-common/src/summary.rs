//! Benchmark summary emitted by the runner and consumed by the aggregator
//!
//! The runner prints one [`ToolSummary`] as a single JSON line. Driver
//! scripts collect those lines into a JSON array per instance type.

use crate::run_result::RunResult;
use crate::stats::{ElapsedStats, mean};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from reducing run results
#[derive(Debug, Error, PartialEq)]
pub enum SummaryError {
    /// No iterations were recorded
    #[error("cannot summarize a benchmark with no iterations")]
    NoRuns,
}

/// Aggregate statistics for one configuration point
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BenchmarkSummary {
    pub concurrency: usize,
    pub part_size_mb: u64,
    pub iterations: u32,
    pub avg_elapsed: f64,
    pub avg_throughput_mbps: f64,
    pub min_elapsed: f64,
    pub max_elapsed: f64,
}

impl BenchmarkSummary {
    /// Reduce the per-iteration results of a run.
    ///
    /// Fails with [`SummaryError::NoRuns`] when `runs` is empty.
    pub fn from_runs(
        concurrency: usize,
        part_size_mb: u64,
        runs: &[RunResult],
    ) -> Result<Self, SummaryError> {
        let elapsed: Vec<f64> = runs.iter().map(|r| r.elapsed_secs).collect();
        let throughputs: Vec<f64> = runs.iter().map(|r| r.throughput_mbps).collect();

        let stats = ElapsedStats::from_secs(&elapsed).ok_or(SummaryError::NoRuns)?;
        let avg_throughput_mbps = mean(&throughputs).ok_or(SummaryError::NoRuns)?;

        Ok(Self {
            concurrency,
            part_size_mb,
            iterations: runs.len() as u32,
            avg_elapsed: stats.avg,
            avg_throughput_mbps,
            min_elapsed: stats.min,
            max_elapsed: stats.max,
        })
    }
}

/// A [`BenchmarkSummary`] labelled with the tool that produced it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolSummary {
    pub tool: String,
    #[serde(flatten)]
    pub summary: BenchmarkSummary,
}

impl ToolSummary {
    pub fn new(tool: impl Into<String>, summary: BenchmarkSummary) -> Self {
        Self {
            tool: tool.into(),
            summary,
        }
    }
}
