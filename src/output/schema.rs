//! JSON report schema definitions.
//!
//! Schema is versioned to allow future evolution.

use crate::aggregator::UsageSummary;
use crate::utils::config::REPORT_VERSION;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level usage report written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Roots that were walked, in caller order
    pub roots: Vec<String>,

    /// Bytes across all directories
    pub total_bytes: u64,

    /// Number of directories seen
    pub directory_count: usize,

    /// Largest directories by own size
    pub top_directories: Vec<TopDirectory>,

    /// Timestamp when report was generated
    pub generated_at: String,
}

/// One directory in the report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopDirectory {
    pub path: String,
    pub bytes: u64,

    /// Percentage of total bytes
    pub percentage: f64,
}

/// Build a report from the usage summary
pub fn to_report(roots: &[PathBuf], summary: &UsageSummary) -> UsageReport {
    UsageReport {
        version: REPORT_VERSION.to_string(),
        roots: roots.iter().map(|r| r.display().to_string()).collect(),
        total_bytes: summary.total_bytes,
        directory_count: summary.directory_count,
        top_directories: summary
            .largest
            .iter()
            .map(|d| TopDirectory {
                path: d.path.display().to_string(),
                bytes: d.bytes,
                percentage: summary.percentage(d.bytes),
            })
            .collect(),
        generated_at: chrono::Utc::now().to_rfc3339(),
    }
}
