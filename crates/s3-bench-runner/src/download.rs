//! Timed single-object download through the S3 transfer manager

use crate::config::TransferConfig;
use anyhow::{Context, Result};
use aws_sdk_s3_transfer_manager::types::{ConcurrencyMode, PartSize};
use std::path::Path;
use std::time::Instant;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Build a transfer manager over `client` with explicit concurrency and part size
pub fn transfer_manager(
    client: &aws_sdk_s3::Client,
    transfer: &TransferConfig,
) -> aws_sdk_s3_transfer_manager::Client {
    let config = aws_sdk_s3_transfer_manager::Config::builder()
        .client(client.clone())
        .concurrency(ConcurrencyMode::Explicit(transfer.concurrency))
        .part_size(PartSize::Target(transfer.part_size_bytes))
        .build();

    aws_sdk_s3_transfer_manager::Client::new(config)
}

/// Download `s3://bucket/key` into `destination` and return the elapsed seconds.
///
/// Timing starts right before the transfer is initiated and ends once the
/// last chunk has been written and flushed. Transfer errors are returned as
/// they come out of the transfer manager.
pub async fn download_file(
    client: &aws_sdk_s3::Client,
    bucket: &str,
    key: &str,
    transfer: &TransferConfig,
    destination: &Path,
) -> Result<f64> {
    let manager = transfer_manager(client, transfer);

    let mut file = tokio::fs::File::create(destination)
        .await
        .with_context(|| format!("Failed to open scratch file: {}", destination.display()))?;

    let start = Instant::now();

    let mut handle = manager.download().bucket(bucket).key(key).initiate()?;

    let body = handle.body_mut();
    let mut bytes_written: u64 = 0;
    while let Some(chunk) = body.next().await {
        for segment in chunk?.data.into_segments() {
            file.write_all(&segment).await?;
            bytes_written += segment.len() as u64;
        }
    }
    file.flush().await?;

    let elapsed = start.elapsed().as_secs_f64();

    debug!(
        bucket,
        key,
        engine = %transfer.client,
        bytes = bytes_written,
        elapsed_secs = elapsed,
        "Download complete"
    );

    Ok(elapsed)
}
