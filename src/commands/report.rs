//! Report command implementation.
//!
//! The report command:
//! 1. Reads the export and rebuilds the tree
//! 2. Computes metrics
//! 3. Prints the text report (and optionally the tree)
//! 4. Writes the JSON report, if requested

use crate::aggregator::{build_report, MetricsReport};
use crate::output::{render_report, render_tree, validate_path, write_report};
use crate::parser::{parse_input, ParserProfile};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Parser profile for the input file
    pub profile: ParserProfile,

    /// Exported time log
    pub input_file: PathBuf,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Print the reconstructed tree before the report
    pub print_tree: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            profile: ParserProfile::Timecamp,
            input_file: PathBuf::new(),
            output_json: None,
            print_tree: false,
        }
    }
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The computed report, after it has been printed
///
/// # Errors
/// * Unreadable or malformed input
/// * Trees that do not have the grouping → project → sprint → story shape
/// * Missing rollups or degenerate groups (no points, no sprints)
/// * File write errors
pub fn execute_report(args: ReportArgs) -> Result<MetricsReport> {
    let start_time = Instant::now();

    info!("Starting report for: {}", args.input_file.display());

    // Step 1: Rebuild tree
    info!("Step 1/3: Reconstructing hierarchy...");
    let root = parse_input(args.profile, &args.input_file).with_context(|| {
        format!(
            "Failed to parse {} as a {} export",
            args.input_file.display(),
            args.profile
        )
    })?;

    debug!(
        "Tree has {} nodes under '{}'",
        root.count_nodes(),
        root.name
    );

    if args.print_tree {
        println!("{}", render_tree(&root));
        println!();
    }

    // Step 2: Compute metrics
    info!("Step 2/3: Computing metrics...");
    let report = build_report(&root).context("Failed to compute metrics")?;

    println!("{}", render_report(&report));

    // Step 3: Write outputs
    if let Some(path) = &args.output_json {
        info!("Step 3/3: Writing JSON report...");
        write_report(&report, path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", path.display());
    } else {
        info!("Step 3/3: Skipping JSON report (not requested)");
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.input_file.as_os_str().is_empty() {
        anyhow::bail!("Input file cannot be empty");
    }

    if !args.input_file.is_file() {
        anyhow::bail!("Input file not found: {}", args.input_file.display());
    }

    if let Some(path) = &args.output_json {
        validate_path(path).context("Invalid JSON output path")?;

        if path == &args.input_file {
            anyhow::bail!("JSON output would overwrite the input file");
        }
    }

    Ok(())
}
