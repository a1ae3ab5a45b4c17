//! s3-bench-aggregate - Best settings per tool across instance types
//!
//! Reads result files produced by driver scripts around `s3-bench-runner`,
//! groups entries by the instance type encoded in each file name, and picks
//! the highest-throughput configuration per tool.
//!
//! ## Modules
//!
//! - [`bandwidth`]: Static instance type to network bandwidth table
//! - [`best`]: Best setting selection per tool
//! - [`error`]: Typed errors for loading and writing results
//! - [`instance_type`]: Instance type extraction from file names
//! - [`load`]: Result file loading and grouping
//! - [`report`]: Report summary, table rendering and `summary.json`

pub mod bandwidth;
pub mod best;
pub mod error;
pub mod instance_type;
pub mod load;
pub mod report;

pub use best::{BestSetting, find_best_settings};
pub use error::AggregateError;
pub use instance_type::extract_instance_type;
pub use load::{AggregatedEntry, load_results};
pub use report::{InstanceReport, ReportSummary, build_report, render_report, write_summary};
