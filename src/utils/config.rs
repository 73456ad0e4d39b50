//! Configuration and constants for the CLI.

/// Default destination of the generated flamegraph
pub const DEFAULT_OUTPUT_PATH: &str = "./du-flamegraph.svg";

/// Default image width in pixels
pub const DEFAULT_WIDTH: usize = 1200;

/// Default height of each frame in pixels
pub const DEFAULT_FRAME_HEIGHT: usize = 16;

pub const DEFAULT_TITLE: &str = "Flame Graph of disk usage";

// Renderer pass-through labels
pub const COUNT_NAME: &str = "bytes";
pub const NAME_TYPE: &str = "Path";
pub const PALETTE: &str = "aqua";

/// External renderer looked up on $PATH
pub const FLAMEGRAPH_SCRIPT: &str = "flamegraph.pl";

/// Current JSON report schema version
pub const REPORT_VERSION: &str = "1.0.0";

/// Directories listed in the summary and report by default
pub const DEFAULT_TOP_DIRS: usize = 20;
pub const MAX_TOP_DIRS: usize = 1000;
