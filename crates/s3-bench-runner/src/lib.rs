//! s3-bench-runner - Timed S3 downloads for throughput benchmarking
//!
//! Downloads a single object repeatedly through the AWS S3 transfer manager
//! and reduces the timings into a [`s3_bench_common::BenchmarkSummary`].

pub mod benchmark;
pub mod cli;
pub mod client;
pub mod config;
pub mod download;
