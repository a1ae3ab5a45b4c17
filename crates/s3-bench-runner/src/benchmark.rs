//! Benchmark loop: repeated timed downloads reduced into a summary

use crate::client::create_client;
use crate::config::{BenchmarkConfig, TransferConfig};
use crate::download::download_file;
use anyhow::{Context, Result};
use s3_bench_common::{BenchmarkSummary, RunResult};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// A single timed download into a local file
#[allow(async_fn_in_trait)]
pub trait Download {
    /// Download into `destination`, returning elapsed seconds
    async fn download(&self, destination: &Path) -> Result<f64>;
}

/// Downloads one S3 object with a fixed transfer configuration
pub struct S3Download<'a> {
    client: &'a aws_sdk_s3::Client,
    bucket: &'a str,
    key: &'a str,
    transfer: TransferConfig,
}

impl<'a> S3Download<'a> {
    pub fn new(
        client: &'a aws_sdk_s3::Client,
        bucket: &'a str,
        key: &'a str,
        transfer: TransferConfig,
    ) -> Self {
        Self {
            client,
            bucket,
            key,
            transfer,
        }
    }
}

impl Download for S3Download<'_> {
    async fn download(&self, destination: &Path) -> Result<f64> {
        download_file(self.client, self.bucket, self.key, &self.transfer, destination).await
    }
}

/// Create a scratch file that is deleted when dropped
pub fn scratch_file(dir: Option<&Path>) -> Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix("s3-bench-").suffix(".download");

    match dir {
        Some(dir) => builder
            .tempfile_in(dir)
            .with_context(|| format!("Failed to create scratch file in {}", dir.display())),
        None => builder.tempfile().context("Failed to create scratch file"),
    }
}

/// Run `iterations` timed downloads, each into a fresh scratch file.
///
/// Progress for each iteration is printed to stderr as soon as it finishes.
/// The first failed download aborts the loop.
pub async fn run_iterations<D: Download>(
    downloader: &D,
    iterations: u32,
    file_size: u64,
    scratch_dir: Option<&Path>,
) -> Result<Vec<RunResult>> {
    let mut runs = Vec::with_capacity(iterations as usize);

    for iteration in 1..=iterations {
        let scratch = scratch_file(scratch_dir)?;
        debug!(iteration, path = %scratch.path().display(), "Starting download");

        let elapsed = downloader.download(scratch.path()).await?;
        let run = RunResult::new(iteration, elapsed, file_size);

        eprintln!(
            "  Iteration {}: {:.2}s ({:.1} MB/s)",
            run.iteration, run.elapsed_secs, run.throughput_mbps
        );
        runs.push(run);
    }

    Ok(runs)
}

/// Run the full benchmark described by `config`.
///
/// The S3 client is created once and reused for every iteration.
pub async fn run_benchmark(config: &BenchmarkConfig) -> Result<BenchmarkSummary> {
    config.check()?;

    let client = create_client(&config.region, config.profile.as_deref()).await?;
    let transfer = config.transfer_config();

    info!(
        bucket = %config.bucket,
        key = %config.key,
        engine = %transfer.client,
        concurrency = transfer.concurrency,
        part_size_bytes = transfer.part_size_bytes,
        iterations = config.iterations,
        "Starting benchmark"
    );

    let downloader = S3Download::new(&client, &config.bucket, &config.key, transfer);
    let runs = run_iterations(
        &downloader,
        config.iterations,
        config.file_size,
        config.scratch_dir.as_deref(),
    )
    .await?;

    let summary = BenchmarkSummary::from_runs(config.concurrency, config.part_size_mb, &runs)?;
    info!(
        avg_elapsed = summary.avg_elapsed,
        avg_throughput_mbps = summary.avg_throughput_mbps,
        "Benchmark complete"
    );

    Ok(summary)
}
