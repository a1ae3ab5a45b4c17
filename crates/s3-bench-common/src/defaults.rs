//! Default configuration values for the benchmark runner
//!
//! Kept in one place so the CLI and the config layer agree on them.

/// Default AWS region
pub const DEFAULT_REGION: &str = "us-east-1";

/// Default maximum number of concurrent part requests per download
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Default part size in MiB
pub const DEFAULT_PART_SIZE_MB: u64 = 16;

/// Default number of timed downloads per run
pub const DEFAULT_ITERATIONS: u32 = 3;

/// Implementation name used to build tool labels
pub const TOOL_NAME: &str = "rust-transfer-manager";

/// Upper bound on concurrent part requests, and on the worker threads the
/// `threads` engine spawns for them
pub const MAX_CONCURRENCY: usize = 256;
