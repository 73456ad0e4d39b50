//! du-flamegraph
//!
//! Visualize disk usage as a flamegraph.
//!
//! Root paths are walked into per-directory byte totals, folded into
//! `root;dir;subdir bytes` lines and rendered as an SVG flamegraph.
//!
//! ```bash
//! du-flamegraph --out usage.svg ~/projects /var/log
//! ```

pub mod aggregator;
pub mod commands;
pub mod flamegraph;
pub mod folder;
pub mod output;
pub mod utils;
