//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while reading records and rebuilding the tree
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("CSV decoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to open input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Row {row} is missing the '{field}' field")]
    MissingField { row: usize, field: &'static str },

    #[error("Malformed time specification: '{0}'")]
    MalformedTimeSpec(String),

    #[error("Invalid tree structure: {0}")]
    InvalidStructure(String),
}

/// Errors that can occur while deriving metrics from the tree
#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("Story name has no '(<points>)' prefix: '{0}'")]
    InvalidStoryPoints(String),

    #[error("No total recorded for '{0}'")]
    MissingTotal(String),

    #[error("Cannot compute velocity: no story points")]
    NoStoryPoints,

    #[error("Cannot compute averages: no sprints")]
    NoSprints,

    #[error("Sum of {0} overflowed")]
    Overflow(&'static str),

    #[error("Unexpected tree shape: {0}")]
    UnexpectedShape(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
