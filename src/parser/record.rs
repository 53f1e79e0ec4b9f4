//! Flat rows read from a time-log export.

use crate::utils::config::{
    CSV_DELIMITER, CSV_QUOTE, LABEL_FIELD, LEAF_MARKER_FIELD, TIME_FIELD,
};
use crate::utils::error::ParseError;
use csv::{ReaderBuilder, StringRecord};
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One export row, in traversal order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRecord {
    /// Node label
    pub label: String,

    /// Raw duration, e.g. "2h 15m" (may be empty on branch rows)
    pub time_spec: String,

    /// Empty on branch rows, anything else on leaf rows
    pub leaf_marker: String,
}

impl FlatRecord {
    pub fn new(
        label: impl Into<String>,
        time_spec: impl Into<String>,
        leaf_marker: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            time_spec: time_spec.into(),
            leaf_marker: leaf_marker.into(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        !self.leaf_marker.is_empty()
    }
}

/// Decode every data row, discarding the header
///
/// Extra columns are ignored; rows with fewer than three fields are rejected.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<FlatRecord>, ParseError> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(CSV_DELIMITER)
        .quote(CSV_QUOTE)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, row) in csv_reader.records().enumerate() {
        let row = row?;
        // Header is row 1
        records.push(to_flat_record(&row, index + 2)?);
    }

    debug!("Read {} records", records.len());
    Ok(records)
}

/// Open `path` and decode it with [`read_records`]
pub fn read_records_from_path(path: impl AsRef<Path>) -> Result<Vec<FlatRecord>, ParseError> {
    let path = path.as_ref();
    debug!("Opening input: {}", path.display());
    let file = File::open(path)?;
    read_records(file)
}

fn to_flat_record(row: &StringRecord, row_number: usize) -> Result<FlatRecord, ParseError> {
    let field = |index: usize, name: &'static str| {
        row.get(index)
            .map(str::to_string)
            .ok_or(ParseError::MissingField {
                row: row_number,
                field: name,
            })
    };

    Ok(FlatRecord {
        label: field(LABEL_FIELD, "label")?,
        time_spec: field(TIME_FIELD, "time")?,
        leaf_marker: field(LEAF_MARKER_FIELD, "leaf marker")?,
    })
}
