//! Error types for docsmd.

use thiserror::Error;

/// Result type alias for docsmd operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or applying edit batches.
///
/// Rendering and compiling never fail; every variant here is detected from
/// local data (arguments or an already-fetched document) before anything is
/// sent to the document service, except `Service` and `Json`.
#[derive(Error, Debug)]
pub enum Error {
    /// Colour string is not six hex digits (with optional leading `#`).
    #[error("Invalid color: {0:?} (expected 6 hex digits, e.g. #FF0000)")]
    InvalidColor(String),

    /// Alignment is not one of the supported tags.
    #[error("Invalid alignment: {0} (must be START, CENTER, END, or JUSTIFIED)")]
    InvalidAlignment(String),

    /// Range is empty, reversed, or starts before the first addressable index.
    #[error("Invalid range: [{start}, {end})")]
    InvalidRange {
        /// Requested start index
        start: i64,
        /// Requested end index (exclusive)
        end: i64,
    },

    /// Table dimensions must both be at least one.
    #[error("Invalid table size: {rows}x{columns}")]
    InvalidTableSize {
        /// Requested rows
        rows: u32,
        /// Requested columns
        columns: u32,
    },

    /// A text style update was requested without any style attribute.
    #[error("No formatting options specified")]
    NoFormatting,

    /// No heading with the given title exists in the document.
    #[error("Section not found: {0}")]
    SectionNotFound(String),

    /// No table starts at the given index.
    #[error("Table not found at index {0}")]
    TableNotFound(i64),

    /// Requested cell lies outside the table.
    #[error("Cell ({row}, {column}) is out of bounds (table is {rows}x{columns})")]
    CellOutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        column: usize,
        /// Rows in the table
        rows: usize,
        /// Columns in the table
        columns: usize,
    },

    /// The document service rejected or failed a request.
    #[error("Document service error: {0}")]
    Service(String),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::SectionNotFound("Intro".to_string());
        assert_eq!(err.to_string(), "Section not found: Intro");

        let err = Error::CellOutOfBounds {
            row: 3,
            column: 0,
            rows: 2,
            columns: 2,
        };
        assert_eq!(
            err.to_string(),
            "Cell (3, 0) is out of bounds (table is 2x2)"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
