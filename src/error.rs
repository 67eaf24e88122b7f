//! Ingestion and stream construction errors.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::Column;

/// Errors raised while loading a [`PriceSeries`](crate::PriceSeries).
///
/// Every variant aborts the whole ingestion: no partially loaded series is
/// ever returned. Row numbers count data rows from 1; the header row is not
/// counted.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be opened.
    #[error("cannot open price source {}: {source}", .path.display())]
    SourceUnavailable {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The header is missing or does not name the required columns.
    #[error(
        "invalid header: expected columns {} (case-insensitive, in this order), found {found:?}",
        Column::expected_header()
    )]
    Schema {
        /// Header cells as read, empty if the source had no header.
        found: Vec<String>,
    },

    /// A data row does not have one cell per column.
    #[error("row {row}: expected {} cells, found {found}", Column::COUNT)]
    RowLength {
        /// 1-based data row number.
        row: u64,
        /// Number of cells in the row.
        found: usize,
    },

    /// A cell is not valid numeric text.
    #[error("row {row}, column {column}: expected a numeric value, found '{token}'")]
    Parse {
        /// 1-based data row number.
        row: u64,
        /// Column holding the bad cell.
        column: Column,
        /// The offending cell, verbatim.
        token: String,
    },

    /// The CSV reader failed mid-source.
    #[error("cannot read price source: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors raised while constructing a [`WindowStream`](crate::WindowStream).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StreamError {
    /// Window length must be at least one record.
    #[error("invalid window length {0}: must be at least 1")]
    InvalidWindowLength(usize),
}
