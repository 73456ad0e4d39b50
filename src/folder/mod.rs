//! Folding of absolute directory paths into flamegraph stack lines.
//!
//! Each directory becomes one "root;segment;... size" line, relative to the
//! root it is displayed under.

pub mod resolve;
pub mod stack_builder;

// Re-export main types and functions
pub use resolve::{relative_path, resolve_against_roots, Resolution};
pub use stack_builder::{fold_stacks, folded_text, format_size_field, stack_label, FoldedStack};
