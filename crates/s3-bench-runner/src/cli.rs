//! Command-line arguments for the runner

use crate::config::{BenchmarkConfig, TransferClient};
use clap::Parser;
use s3_bench_common::defaults::{
    DEFAULT_CONCURRENCY, DEFAULT_ITERATIONS, DEFAULT_PART_SIZE_MB, DEFAULT_REGION,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "s3-bench-runner")]
#[command(about = "S3 download benchmark using the Rust transfer manager")]
#[command(version)]
pub struct Args {
    /// S3 bucket name
    #[arg(long)]
    pub bucket: String,

    /// S3 object key
    #[arg(long)]
    pub key: String,

    /// AWS region
    #[arg(long, default_value = DEFAULT_REGION)]
    pub region: String,

    /// AWS profile name (blank uses the default credential chain)
    #[arg(long)]
    pub profile: Option<String>,

    /// Max concurrent part requests
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Part size in MB
    #[arg(long, default_value_t = DEFAULT_PART_SIZE_MB)]
    pub part_size_mb: u64,

    /// Number of timed downloads
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: u32,

    /// Object size in bytes
    #[arg(long)]
    pub file_size: u64,

    /// Use the native high-throughput transfer engine
    #[arg(long)]
    pub crt: bool,

    /// Directory for scratch download files (default: system temp dir)
    #[arg(long)]
    pub scratch_dir: Option<PathBuf>,
}

impl TryFrom<Args> for BenchmarkConfig {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let config = Self {
            bucket: args.bucket,
            key: args.key,
            region: args.region,
            profile: args.profile,
            concurrency: args.concurrency,
            part_size_mb: args.part_size_mb,
            iterations: args.iterations,
            file_size: args.file_size,
            transfer_client: TransferClient::from_crt_flag(args.crt),
            scratch_dir: args.scratch_dir,
        };
        config.check()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Result<Args, clap::Error> {
        let mut argv = vec![
            "s3-bench-runner",
            "--bucket",
            "bench-bucket",
            "--key",
            "1gib.bin",
            "--file-size",
            "1073741824",
        ];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv)
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.region, "us-east-1");
        assert_eq!(args.concurrency, 10);
        assert_eq!(args.part_size_mb, 16);
        assert_eq!(args.iterations, 3);
        assert!(args.profile.is_none());
        assert!(!args.crt);

        let config = BenchmarkConfig::try_from(args).unwrap();
        assert_eq!(config.transfer_client, TransferClient::Threads);
        assert_eq!(config.tool_label(), "rust-transfer-manager");
    }

    #[test]
    fn test_crt_flag() {
        let config = BenchmarkConfig::try_from(parse(&["--crt"]).unwrap()).unwrap();
        assert_eq!(config.transfer_client, TransferClient::Crt);
        assert_eq!(config.tool_label(), "rust-transfer-manager-crt");
    }

    #[test]
    fn test_overrides() {
        let args = parse(&[
            "--region",
            "eu-west-1",
            "--concurrency",
            "64",
            "--part-size-mb",
            "8",
            "--iterations",
            "5",
            "--profile",
            "bench",
        ])
        .unwrap();
        let config = BenchmarkConfig::try_from(args).unwrap();
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.concurrency, 64);
        assert_eq!(config.part_size_mb, 8);
        assert_eq!(config.iterations, 5);
        assert_eq!(config.profile.as_deref(), Some("bench"));
    }

    #[test]
    fn test_file_size_required() {
        let err = Args::try_parse_from(["s3-bench-runner", "--bucket", "b", "--key", "k"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_zero_iterations_rejected_at_validation() {
        let args = parse(&["--iterations", "0"]).unwrap();
        assert!(BenchmarkConfig::try_from(args).is_err());
    }
}
