//! Result of one timed download

use crate::BYTES_PER_MIB;
use serde::{Deserialize, Serialize};

/// Result of a single benchmark iteration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RunResult {
    /// Iteration number (1-based)
    pub iteration: u32,
    /// Wall-clock download time in seconds
    pub elapsed_secs: f64,
    /// Throughput in MiB/s
    pub throughput_mbps: f64,
}

impl RunResult {
    /// Record an iteration, deriving throughput from the object size
    pub fn new(iteration: u32, elapsed_secs: f64, file_size_bytes: u64) -> Self {
        Self {
            iteration,
            elapsed_secs,
            throughput_mbps: throughput_mbps(file_size_bytes, elapsed_secs),
        }
    }
}

/// Throughput in MiB/s for `file_size_bytes` transferred in `elapsed_secs`
pub fn throughput_mbps(file_size_bytes: u64, elapsed_secs: f64) -> f64 {
    (file_size_bytes as f64 / BYTES_PER_MIB as f64) / elapsed_secs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throughput_200_mib_in_2_secs() {
        let result = RunResult::new(1, 2.0, 200 * BYTES_PER_MIB);
        assert_eq!(result.iteration, 1);
        assert_eq!(result.elapsed_secs, 2.0);
        assert_eq!(result.throughput_mbps, 100.0);
    }

    #[test]
    fn test_throughput_fractional() {
        assert_eq!(throughput_mbps(BYTES_PER_MIB / 2, 0.25), 2.0);
    }

    #[test]
    fn test_serialization() {
        let result = RunResult::new(3, 4.0, 400 * BYTES_PER_MIB);
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"iteration\":3"));
        assert!(json.contains("\"throughput_mbps\":100.0"));
    }
}
