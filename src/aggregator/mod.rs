//! Aggregation of on-disk sizes into per-directory totals.
//!
//! This module walks root paths and produces:
//! - The size map (directory -> bytes of files directly inside it)
//! - Usage statistics (totals, largest directories)

pub mod size_map;
pub mod traversal;
pub mod metrics;

// Re-export main types and functions
pub use size_map::SizeMap;
pub use traversal::{aggregate, traverse};
pub use metrics::{calculate_usage_summary, DirUsage, UsageSummary};
