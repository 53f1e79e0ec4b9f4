//! Scrum Tracker
//!
//! Rebuilds the project → sprint → story hierarchy hidden in a flat
//! TimeCamp time-log export and derives story point, time and velocity
//! metrics from it.
//!
//! This crate provides the core implementation for the
//! `scrum-tracker` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! scrum-tracker timecamp export.csv
//! scrum-tracker timecamp export.csv --tree --output report.json
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod tree;
pub mod utils;
