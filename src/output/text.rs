//! Text summary of the largest directories, printed under `--summary`.

use crate::aggregator::UsageSummary;
use crate::utils::format::format_size;

/// Create a text table of the largest directories
pub fn generate_text_summary(summary: &UsageSummary, max_lines: usize) -> String {
    let mut lines = Vec::new();

    lines.push(format!("  {:<60} {:>12} {:>7}", "Directory (largest first)", "SIZE", "%"));
    lines.push(format!("  {}", "-".repeat(81)));

    for dir in summary.largest.iter().take(max_lines) {
        let path = dir.path.display().to_string();

        // Keep the tail of long paths, it is the informative part
        let len = path.chars().count();
        let display_path = if len > 60 {
            let tail: String = path.chars().skip(len - 57).collect();
            format!("...{}", tail)
        } else {
            path
        };

        lines.push(format!(
            "  {:<60} {:>12} {:>6.1}%",
            display_path,
            format_size(dir.bytes),
            summary.percentage(dir.bytes)
        ));
    }

    lines.push(format!("  {}", "-".repeat(81)));
    lines.push(format!(
        "  {} in {} directories",
        format_size(summary.total_bytes),
        summary.directory_count
    ));

    if summary.largest.len() > max_lines {
        lines.push(format!("   (Showing top {} of {} directories)", max_lines, summary.largest.len()));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::DirUsage;
    use std::path::PathBuf;

    #[test]
    fn test_text_summary_lists_directories() {
        let summary = UsageSummary {
            total_bytes: 2048,
            directory_count: 2,
            empty_directory_count: 0,
            largest: vec![
                DirUsage { path: PathBuf::from("/data/a"), bytes: 1536 },
                DirUsage { path: PathBuf::from("/data"), bytes: 512 },
            ],
        };

        let text = generate_text_summary(&summary, 1);

        assert!(text.contains("/data/a"));
        assert!(text.contains("1.5 KB"));
        assert!(text.contains("75.0%"));
        assert!(text.contains("Showing top 1 of 2"));
    }

    #[test]
    fn test_text_summary_truncates_long_paths() {
        let long = format!("/{}", "x".repeat(100));
        let summary = UsageSummary {
            total_bytes: 1,
            directory_count: 1,
            empty_directory_count: 0,
            largest: vec![DirUsage { path: PathBuf::from(&long), bytes: 1 }],
        };

        let text = generate_text_summary(&summary, 10);
        assert!(text.contains(&format!("...{}", "x".repeat(57))));
        assert!(!text.contains(&long));
    }
}
