//! du-flamegraph CLI
//!
//! Walks the given paths and renders their disk usage as a flamegraph.

use anyhow::Result;
use clap::Parser;
use du_flamegraph::commands::{execute_generate, validate_args, GenerateArgs};
use du_flamegraph::flamegraph::FlamegraphConfig;
use du_flamegraph::utils::config::{
    DEFAULT_FRAME_HEIGHT, DEFAULT_OUTPUT_PATH, DEFAULT_TOP_DIRS, DEFAULT_WIDTH,
};
use env_logger::Env;
use std::path::PathBuf;

/// du-flamegraph - visualize disk usage as flamegraph
#[derive(Parser, Debug)]
#[command(name = "du-flamegraph")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directories to visualize
    #[arg(required = true, value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Width of image
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Height of each frame
    #[arg(short = 'H', long, default_value_t = DEFAULT_FRAME_HEIGHT)]
    height: usize,

    /// Flamegraph title
    #[arg(long)]
    title: Option<String>,

    /// Path of flamegraph.pl. If not given, find the script from $PATH
    #[arg(long, env = "FLAMEGRAPH_SCRIPT")]
    flamegraph_script: Option<PathBuf>,

    /// Destination path of generated flamegraph
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    out: PathBuf,

    /// Also write the folded stacks to this path
    #[arg(long)]
    folded: Option<PathBuf>,

    /// Also write a JSON usage report to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Print the largest directories to stdout
    #[arg(long)]
    summary: bool,

    /// Number of directories in the summary and report
    #[arg(long, default_value_t = DEFAULT_TOP_DIRS)]
    top: usize,

    /// Show verbose log
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    log::debug!("Args : {:?}", cli);

    let mut fg_config = FlamegraphConfig::new()
        .with_width(cli.width)
        .with_frame_height(cli.height);

    if let Some(title) = cli.title {
        fg_config = fg_config.with_title(title);
    }

    let args = GenerateArgs {
        roots: cli.paths,
        output_svg: cli.out,
        output_folded: cli.folded,
        output_report: cli.report,
        flamegraph_config: fg_config,
        flamegraph_script: cli.flamegraph_script,
        print_summary: cli.summary,
        top_dirs: cli.top,
    };

    // Validate args first
    validate_args(&args)?;

    execute_generate(args)?;

    Ok(())
}
