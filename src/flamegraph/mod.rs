//! Flamegraph generation from folded stacks.
//!
//! This module turns folded stack lines into SVG flamegraphs, either through
//! an external flamegraph.pl script or the inferno library.

pub mod generator;

// Re-export main types
pub use generator::{generate_flamegraph, resolve_renderer, FlamegraphConfig, Renderer};
