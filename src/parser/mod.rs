//! Input parsing and tree reconstruction.
//!
//! This module handles:
//! - Decoding export rows from CSV
//! - Parsing duration strings
//! - Rebuilding the implied hierarchy from depth-free rows
//! - Dispatching on the parser profile named on the command line

pub mod record;
pub mod time_spec;
pub mod timecamp;

use crate::tree::Node;
use crate::utils::error::ParseError;
use clap::ValueEnum;
use log::info;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

// Re-export main types
pub use record::{read_records, read_records_from_path, FlatRecord};
pub use time_spec::parse_minutes;
pub use timecamp::{reconstruct, reconstruct_from, RecordCursor};

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ParserProfile {
    /// CSV exported from TimeCamp's time report
    Timecamp,
}

impl ParserProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParserProfile::Timecamp => "timecamp",
        }
    }
}

impl fmt::Display for ParserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParserProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "timecamp" => Ok(ParserProfile::Timecamp),
            other => Err(format!("Unknown parser profile: {}", other)),
        }
    }
}

/// Read `path` with the given profile and rebuild its tree
///
/// **Public** - used by commands
pub fn parse_input(profile: ParserProfile, path: impl AsRef<Path>) -> Result<Node, ParseError> {
    let path = path.as_ref();
    info!("Parsing {} with the '{}' profile", path.display(), profile);

    match profile {
        ParserProfile::Timecamp => {
            let records = read_records_from_path(path)?;
            reconstruct(&records)
        }
    }
}
