//! Generate command implementation.
//!
//! The generate command:
//! 1. Resolves root paths
//! 2. Walks them into a size map
//! 3. Folds the map into stack lines
//! 4. Renders the flamegraph
//! 5. Writes output files

use crate::aggregator::{aggregate, calculate_usage_summary, SizeMap};
use crate::flamegraph::{generate_flamegraph, resolve_renderer, FlamegraphConfig};
use crate::folder::{fold_stacks, FoldedStack};
use crate::output::{generate_text_summary, to_report, write_folded, write_report, write_svg};
use crate::utils::config::{DEFAULT_OUTPUT_PATH, DEFAULT_TOP_DIRS, MAX_TOP_DIRS};
use crate::utils::paths::resolve_roots;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the generate command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    /// Root paths to walk, in display priority order
    pub roots: Vec<PathBuf>,

    /// Output path for SVG flamegraph
    pub output_svg: PathBuf,

    /// Output path for folded stacks (optional)
    pub output_folded: Option<PathBuf>,

    /// Output path for JSON usage report (optional)
    pub output_report: Option<PathBuf>,

    /// Flamegraph configuration
    pub flamegraph_config: FlamegraphConfig,

    /// External flamegraph.pl script (None = look up $PATH, then built-in)
    pub flamegraph_script: Option<PathBuf>,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Number of directories in the summary and report
    pub top_dirs: usize,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            output_svg: PathBuf::from(DEFAULT_OUTPUT_PATH),
            output_folded: None,
            output_report: None,
            flamegraph_config: FlamegraphConfig::default(),
            flamegraph_script: None,
            print_summary: false,
            top_dirs: DEFAULT_TOP_DIRS,
        }
    }
}

/// Execute the generate command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Root paths that cannot be resolved
/// * Filesystem errors while walking
/// * Rendering failures
/// * File write errors
pub fn execute_generate(args: GenerateArgs) -> Result<()> {
    let start_time = Instant::now();

    // Step 1: Resolve roots
    info!("Step 1/5: Resolving {} root paths...", args.roots.len());
    let roots = resolve_roots(&args.roots).context("Could not resolve root paths")?;
    debug!("Roots: {:?}", roots);

    // Step 2: Aggregate sizes
    info!("Step 2/5: Walking directories...");
    let map = aggregate(&roots).context("Failed to walk root paths")?;

    let summary = calculate_usage_summary(&map, args.top_dirs);
    info!("Disk usage: {}", summary.summary());

    // Step 3: Fold
    info!("Step 3/5: Folding {} directories...", map.len());
    let stacks = fold_stacks(&map, &roots);

    // Step 4: Render
    info!("Step 4/5: Generating flamegraph...");
    let renderer = resolve_renderer(args.flamegraph_script.as_deref());
    let svg = generate_flamegraph(&stacks, Some(&args.flamegraph_config), &renderer)
        .context("Failed to generate flamegraph")?;

    // Step 5: Write outputs
    info!("Step 5/5: Writing output files...");

    write_svg(&svg, &args.output_svg).context("Failed to write flamegraph SVG")?;
    info!("✓ Flamegraph written to: {}", args.output_svg.display());

    if let Some(folded_path) = &args.output_folded {
        write_folded(&stacks, folded_path).context("Failed to write folded stacks")?;
        info!("✓ Folded stacks written to: {}", folded_path.display());
    }

    if let Some(report_path) = &args.output_report {
        let report = to_report(&roots, &summary);
        write_report(&report, report_path).context("Failed to write usage report")?;
        info!("✓ Report written to: {}", report_path.display());
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(84));
        println!("DISK USAGE SUMMARY");
        println!("{}", "=".repeat(84));
        println!("\n{}", generate_text_summary(&summary, args.top_dirs));
        println!("{}", "=".repeat(84));
    }

    let elapsed = start_time.elapsed();
    info!("Generate completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Walk and fold without rendering
///
/// **Public** - convenience for callers that want the folded text only
pub fn build_stacks(roots: &[PathBuf]) -> Result<(SizeMap, Vec<FoldedStack>)> {
    let roots = resolve_roots(roots).context("Could not resolve root paths")?;
    let map = aggregate(&roots).context("Failed to walk root paths")?;
    let stacks = fold_stacks(&map, &roots);
    Ok((map, stacks))
}

/// Validate generate arguments
///
/// **Public** - can be called before execute_generate for early validation
pub fn validate_args(args: &GenerateArgs) -> Result<()> {
    if args.roots.is_empty() {
        anyhow::bail!("At least one path is required");
    }

    if args.roots.iter().any(|r| r.as_os_str().is_empty()) {
        anyhow::bail!("Paths cannot be empty");
    }

    if args.output_svg.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if args.flamegraph_config.width == 0 {
        anyhow::bail!("width must be greater than 0");
    }

    if args.flamegraph_config.frame_height == 0 {
        anyhow::bail!("height must be greater than 0");
    }

    if args.top_dirs == 0 {
        anyhow::bail!("top must be greater than 0");
    }

    if args.top_dirs > MAX_TOP_DIRS {
        anyhow::bail!("top is too large (max {})", MAX_TOP_DIRS);
    }

    Ok(())
}
