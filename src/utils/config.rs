//! Configuration and constants for the CLI.

/// Current JSON report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Label of the synthetic root every reconstructed tree hangs from
pub const ROOT_LABEL: &str = "TimeCamp";

/// Leaf row carrying the grand total of the export
pub const TOTAL_LABEL: &str = "Total";

// Column layout of a TimeCamp export row
pub const LABEL_FIELD: usize = 0;
pub const TIME_FIELD: usize = 1;
pub const LEAF_MARKER_FIELD: usize = 2;

pub const CSV_DELIMITER: u8 = b',';
pub const CSV_QUOTE: u8 = b'"';
