//! Scrum Tracker CLI
//!
//! Reads a time-log export, rebuilds its hierarchy and prints
//! story point and velocity metrics.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use scrum_tracker::commands::{execute_report, validate_args, ReportArgs};
use scrum_tracker::parser::ParserProfile;

/// Scrum Tracker - velocity metrics from time-log exports
#[derive(Parser, Debug)]
#[command(name = "scrum-tracker")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Parser for the input spreadsheet
    #[arg(value_enum)]
    parser: ParserProfile,

    /// The data file
    input_file: PathBuf,

    /// Output path for a JSON copy of the report (optional)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the reconstructed tree before the report
    #[arg(long)]
    tree: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = ReportArgs {
        profile: cli.parser,
        input_file: cli.input_file,
        output_json: cli.output,
        print_tree: cli.tree,
    };

    // Validate args first
    validate_args(&args)?;

    execute_report(args)?;

    Ok(())
}
