//! Aggregation errors
//!
//! Any of these aborts the whole aggregation; there is no partial report.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AggregateError {
    /// Input file does not exist
    #[error("Result file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Input file exists but could not be read
    #[error("Failed to read result file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file is not a JSON array of result entries
    #[error("Failed to parse result file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An entry has a blank tool name
    #[error("Entry {index} in '{}' has an empty tool name", path.display())]
    EmptyTool { path: PathBuf, index: usize },

    /// Summary could not be serialized
    #[error("Failed to serialize summary: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Summary could not be written
    #[error("Failed to write summary '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AggregateError {
    /// Classify an IO error on an input file, keeping not-found distinct
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Read { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = AggregateError::read("/results/t3.micro.json", io_err);
        assert!(matches!(err, AggregateError::NotFound { .. }));
        assert_eq!(err.to_string(), "Result file not found: /results/t3.micro.json");
    }

    #[test]
    fn test_other_io_error_classification() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AggregateError::read("/results/t3.micro.json", io_err);
        assert!(matches!(err, AggregateError::Read { .. }));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_empty_tool_display() {
        let err = AggregateError::EmptyTool {
            path: PathBuf::from("c5n.xlarge.json"),
            index: 2,
        };
        assert_eq!(err.to_string(), "Entry 2 in 'c5n.xlarge.json' has an empty tool name");
    }
}
