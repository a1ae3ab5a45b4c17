//! s3-bench-runner: timed S3 download benchmark
//!
//! Downloads one object `--iterations` times with the requested concurrency,
//! part size and engine, then prints a single JSON summary line to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use s3_bench_common::ToolSummary;
use s3_bench_common::logging::{init_tracing, print_error};
use s3_bench_runner::benchmark;
use s3_bench_runner::cli::Args;
use s3_bench_runner::config::BenchmarkConfig;

/// Our logs at info, AWS SDK noise at warn, unless `RUST_LOG` says otherwise
const DEFAULT_FILTER: &str = "info,aws_config=warn,aws_smithy_runtime=warn,aws_sdk_s3=warn";

fn main() {
    let args = Args::parse();
    init_tracing(DEFAULT_FILTER);

    if let Err(e) = run(args) {
        print_error(&*e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = BenchmarkConfig::try_from(args)?;
    let tool = config.tool_label();

    eprintln!(
        "{tool} benchmark: concurrency={}, part_size={}MB",
        config.concurrency, config.part_size_mb
    );

    let runtime = config
        .transfer_config()
        .runtime()
        .context("Failed to build async runtime")?;

    let summary = runtime.block_on(benchmark::run_benchmark(&config))?;

    println!("{}", serde_json::to_string(&ToolSummary::new(tool, summary))?);

    Ok(())
}
