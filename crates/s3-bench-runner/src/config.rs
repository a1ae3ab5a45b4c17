//! Configuration types for the runner

use anyhow::Result;
use garde::Validate;
use s3_bench_common::BYTES_PER_MIB;
use s3_bench_common::defaults::{MAX_CONCURRENCY, TOOL_NAME};
use std::path::PathBuf;
use tokio::runtime::Runtime;

/// Transfer engine selection
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TransferClient {
    /// Drive the transfer on a dedicated pool of worker threads, one per
    /// concurrent part request.
    #[default]
    Threads,
    /// Hand the transfer to the transfer manager's native engine, which
    /// schedules part requests on its own async workers across every core.
    Crt,
}

impl TransferClient {
    /// Map the `--crt` flag to an engine
    pub fn from_crt_flag(crt: bool) -> Self {
        if crt { Self::Crt } else { Self::Threads }
    }

    /// Tool label reported in the JSON output
    pub fn tool_label(self) -> String {
        match self {
            Self::Threads => TOOL_NAME.to_string(),
            Self::Crt => format!("{TOOL_NAME}-crt"),
        }
    }
}

/// Transfer parameters handed to the download layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferConfig {
    /// Maximum concurrent part requests
    pub concurrency: usize,
    /// Target part size in bytes
    pub part_size_bytes: u64,
    /// Engine requested for the transfer
    pub client: TransferClient,
}

impl TransferConfig {
    pub fn new(concurrency: usize, part_size_mb: u64, client: TransferClient) -> Self {
        Self {
            concurrency,
            part_size_bytes: part_size_mb.saturating_mul(BYTES_PER_MIB),
            client,
        }
    }

    /// Build the async runtime that drives transfers for this engine.
    ///
    /// `Threads` gets one worker thread per concurrent part request, capped at
    /// [`MAX_CONCURRENCY`]; `Crt` keeps the runtime's default of one worker per
    /// core.
    pub fn runtime(&self) -> std::io::Result<Runtime> {
        let mut builder = tokio::runtime::Builder::new_multi_thread();
        builder.enable_all().thread_name("s3-bench-worker");

        if self.client == TransferClient::Threads {
            builder.worker_threads(self.concurrency.clamp(1, MAX_CONCURRENCY));
        }

        builder.build()
    }
}

/// Configuration for one benchmark run
///
/// Built once from the command line and never mutated afterwards.
#[derive(Debug, Clone, Validate)]
pub struct BenchmarkConfig {
    /// S3 bucket holding the test object
    #[garde(length(min = 1))]
    pub bucket: String,

    /// Key of the test object
    #[garde(length(min = 1))]
    pub key: String,

    /// AWS region
    #[garde(length(min = 1))]
    pub region: String,

    /// Named credential profile; blank values fall back to the default chain
    #[garde(skip)]
    pub profile: Option<String>,

    /// Maximum concurrent part requests per download
    #[garde(range(min = 1, max = MAX_CONCURRENCY))]
    pub concurrency: usize,

    /// Part size in MiB
    #[garde(range(min = 1))]
    pub part_size_mb: u64,

    /// Number of timed downloads
    #[garde(range(min = 1))]
    pub iterations: u32,

    /// Size of the test object in bytes, used for throughput
    #[garde(range(min = 1))]
    pub file_size: u64,

    /// Transfer engine
    #[garde(skip)]
    pub transfer_client: TransferClient,

    /// Directory for scratch files (system temp dir when unset)
    #[garde(skip)]
    pub scratch_dir: Option<PathBuf>,
}

impl BenchmarkConfig {
    /// Validate field ranges, rejecting zero iterations before any download
    pub fn check(&self) -> Result<()> {
        self.validate()
            .map_err(|report| anyhow::anyhow!("Invalid benchmark configuration: {report}"))
    }

    pub fn transfer_config(&self) -> TransferConfig {
        TransferConfig::new(self.concurrency, self.part_size_mb, self.transfer_client)
    }

    pub fn tool_label(&self) -> String {
        self.transfer_client.tool_label()
    }
}
