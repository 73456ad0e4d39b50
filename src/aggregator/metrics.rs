//! Summary statistics over the aggregated size map.
//!
//! The largest directories are the usual cleanup candidates, so they are
//! surfaced in the log, the text summary and the JSON report.

use super::size_map::SizeMap;
use log::debug;
use std::path::PathBuf;

/// A directory and the bytes of the files directly inside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirUsage {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Disk usage statistics
///
/// **Public** - returned from calculate_usage_summary
#[derive(Debug, Clone, Default)]
pub struct UsageSummary {
    /// Bytes across all directories
    pub total_bytes: u64,

    /// Number of directories in the map
    pub directory_count: usize,

    /// Directories without any files directly inside them
    pub empty_directory_count: usize,

    /// Largest directories by own size, descending
    pub largest: Vec<DirUsage>,
}

/// Calculate usage statistics from the size map
///
/// **Public** - main entry point for metrics calculation
///
/// # Arguments
/// * `map` - Aggregated size map
/// * `top_n` - Number of largest directories to keep
pub fn calculate_usage_summary(map: &SizeMap, top_n: usize) -> UsageSummary {
    debug!("Calculating top {} directories from {} entries", top_n, map.len());

    let mut dirs: Vec<DirUsage> = map
        .iter()
        .map(|(path, bytes)| DirUsage { path: path.to_path_buf(), bytes })
        .collect();

    // Map iteration is path-sorted and the sort is stable, so ties keep path order
    dirs.sort_by(|a, b| b.bytes.cmp(&a.bytes));
    dirs.truncate(top_n);

    UsageSummary {
        total_bytes: map.total_bytes(),
        directory_count: map.len(),
        empty_directory_count: map.iter().filter(|(_, bytes)| *bytes == 0).count(),
        largest: dirs,
    }
}

impl UsageSummary {
    /// Share of the total held by `bytes`, in percent
    pub fn percentage(&self, bytes: u64) -> f64 {
        if self.total_bytes > 0 {
            (bytes as f64 / self.total_bytes as f64) * 100.0
        } else {
            0.0
        }
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        let largest = self
            .largest
            .first()
            .map(|d| format!("{} ({:.1}%)", d.path.display(), self.percentage(d.bytes)))
            .unwrap_or_else(|| "-".to_string());

        format!(
            "Total: {} bytes | Directories: {} | Without files: {} | Largest: {}",
            self.total_bytes, self.directory_count, self.empty_directory_count, largest
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> SizeMap {
        vec![
            (PathBuf::from("/data"), 0),
            (PathBuf::from("/data/a"), 8000),
            (PathBuf::from("/data/b"), 1000),
            (PathBuf::from("/data/c"), 1000),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_calculate_usage_summary() {
        let summary = calculate_usage_summary(&sample_map(), 2);

        assert_eq!(summary.total_bytes, 10000);
        assert_eq!(summary.directory_count, 4);
        assert_eq!(summary.empty_directory_count, 1);
        assert_eq!(summary.largest.len(), 2);
        assert_eq!(summary.largest[0].path, PathBuf::from("/data/a"));
        assert_eq!(summary.largest[1].path, PathBuf::from("/data/b"));
        assert_eq!(summary.percentage(summary.largest[0].bytes), 80.0);
    }

    #[test]
    fn test_usage_summary_empty() {
        let summary = calculate_usage_summary(&SizeMap::new(), 10);
        assert_eq!(summary.total_bytes, 0);
        assert_eq!(summary.directory_count, 0);
        assert!(summary.largest.is_empty());
        assert_eq!(summary.percentage(0), 0.0);
        assert!(summary.summary().ends_with("Largest: -"));
    }
}
