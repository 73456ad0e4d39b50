//! Build collapsed stack format from the aggregated size map.
//!
//! Collapsed stacks are the input format for flamegraph generation.
//! Format: "root;child;grandchild size"
//!
//! Example: "/data;a;b 1536.00"
//! This means: directory /data/a/b directly holds 1536 bytes of files.

use super::resolve::{resolve_against_roots, Resolution};
use crate::aggregator::SizeMap;
use log::debug;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// A single collapsed stack entry
///
/// **Public** - used by flamegraph generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldedStack {
    /// Stack label as semicolon-separated string
    pub stack: String,

    /// Bytes of the files directly inside the directory
    pub size: u64,
}

impl FoldedStack {
    /// Create a new folded stack
    ///
    /// **Public** - constructor
    pub fn new(stack: String, size: u64) -> Self {
        Self { stack, size }
    }

    /// Render as one folded line, including the trailing newline
    pub fn to_line(&self) -> String {
        format!("{} {}\n", self.stack, format_size_field(self.size))
    }
}

/// Format a size with exactly two fractional digits
pub fn format_size_field(size: u64) -> String {
    format!("{}.00", size)
}

/// Build folded stacks from the size map
///
/// **Public** - main entry point for path folding
///
/// # Arguments
/// * `map` - Size map from the aggregator
/// * `roots` - The same root set used for aggregation
///
/// # Returns
/// One folded stack per map entry, in map order
pub fn fold_stacks(map: &SizeMap, roots: &[PathBuf]) -> Vec<FoldedStack> {
    debug!("Folding {} directories against {} roots", map.len(), roots.len());

    map.iter()
        .map(|(path, size)| {
            let stack = stack_label(path, roots);
            debug!("rel : {} => {}", path.display(), stack);
            FoldedStack::new(stack, size)
        })
        .collect()
}

/// Build the stack label for one directory
///
/// **Public** - exposed for testing
pub fn stack_label(path: &Path, roots: &[PathBuf]) -> String {
    match resolve_against_roots(path, roots) {
        Resolution::Root(root) => sanitize_segment(&root.to_string_lossy()).into_owned(),
        Resolution::Nested { root, relative } => {
            let mut segments = vec![sanitize_segment(&root.to_string_lossy()).into_owned()];
            segments.extend(
                relative
                    .components()
                    .map(|c| sanitize_segment(&c.as_os_str().to_string_lossy()).into_owned()),
            );
            segments.join(";")
        }
        Resolution::Unresolved => sanitize_segment(&path.to_string_lossy()).into_owned(),
    }
}

/// Concatenate folded lines into the renderer input
pub fn folded_text(stacks: &[FoldedStack]) -> String {
    stacks.iter().map(FoldedStack::to_line).collect()
}

/// Replace characters that would break the folded line format
///
/// `;` is reserved as the hierarchy delimiter and line breaks end a record.
fn sanitize_segment(segment: &str) -> Cow<'_, str> {
    if segment.contains(&[';', '\n', '\r'][..]) {
        Cow::Owned(
            segment
                .chars()
                .map(|c| match c {
                    ';' => '_',
                    '\n' | '\r' => ' ',
                    other => other,
                })
                .collect(),
        )
    } else {
        Cow::Borrowed(segment)
    }
}
