//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod generate;

// Re-export main command functions
pub use generate::{build_stacks, execute_generate, validate_args, GenerateArgs};
