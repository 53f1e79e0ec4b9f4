//! Output writers for metrics reports.
//!
//! This module handles:
//! - JSON reports written to disk
//! - Text reports and tree outlines printed to stdout

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_report, validate_path, write_report};
pub use text::{format_minutes, render_report, render_tree};
