//! s3-bench-aggregate: optimal download settings per instance type
//!
//! Reads result files named after the instance type they were collected on
//! (e.g. `c5n.xlarge_20240105_123456.json`), prints the best configuration per
//! tool, and writes `summary.json` next to the first input file.

use anyhow::Result;
use clap::Parser;
use s3_bench_aggregate::{build_report, load_results, render_report, write_summary};
use s3_bench_common::logging::{init_tracing, print_error};
use std::path::PathBuf;

const USAGE: &str = "Usage: s3-bench-aggregate <result1.json> [result2.json ...]";

#[derive(Parser, Debug)]
#[command(name = "s3-bench-aggregate")]
#[command(about = "Aggregate s3-bench results and find optimal settings per instance type")]
#[command(version)]
struct Args {
    /// Result files, one JSON array of runner summaries per instance type
    files: Vec<PathBuf>,
}

fn main() {
    let args = Args::parse();

    init_tracing("info");

    if args.files.is_empty() {
        eprintln!("{USAGE}");
        std::process::exit(1);
    }

    if let Err(e) = run(&args.files) {
        print_error(&*e);
        std::process::exit(1);
    }
}

fn run(files: &[PathBuf]) -> Result<()> {
    let results = load_results(files)?;
    let summary = build_report(&results);

    print!("{}", render_report(&summary));

    let path = write_summary(&summary, &files[0])?;
    println!("Summary saved to: {}", path.display());

    Ok(())
}
