//! Utility modules for configuration, error handling, and path helpers.

pub mod error;
pub mod config;
pub mod format;
pub mod paths;

// Re-export commonly used error types for convenience
pub use error::{AggregateError, FlamegraphError, OutputError};
