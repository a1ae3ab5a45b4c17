//! s3-bench-common - Shared types and utilities
//!
//! This crate provides the result types shared by the runner and the
//! aggregator, plus the stderr diagnostics both binaries use, without any AWS SDK
//! dependencies to keep it lightweight.
//!
//! ## Modules
//!
//! - [`defaults`]: Default configuration values
//! - [`logging`]: stderr tracing setup and fatal error reporting
//! - [`run_result`]: Single timed download result
//! - [`stats`]: Elapsed-time statistics (min/avg/max)
//! - [`summary`]: Benchmark summary reduced from run results

pub mod defaults;
pub mod logging;
pub mod run_result;
pub mod stats;
pub mod summary;

// Re-export commonly used types
pub use run_result::RunResult;
pub use stats::ElapsedStats;
pub use summary::{BenchmarkSummary, SummaryError, ToolSummary};

/// Bytes in one mebibyte (2^20). Part sizes and throughput use this unit.
pub const BYTES_PER_MIB: u64 = 1024 * 1024;
