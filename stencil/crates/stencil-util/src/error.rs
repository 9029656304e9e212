//! Core error types for stencil-util crate
//!
//! This module defines error types used by source lookups.

use thiserror::Error;

/// Error type for resolving locations against a source file
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocationError {
    /// Row past the last line of the file
    #[error("Row out of bounds: row {row} (file has {rows} rows)")]
    RowOutOfBounds {
        /// Requested zero-based row
        row: u32,
        /// Number of rows in the file
        rows: usize,
    },

    /// Column past the end of its row
    #[error("Column out of bounds: column {column} on row {row} (row has {width} columns)")]
    ColumnOutOfBounds {
        /// Zero-based row of the location
        row: u32,
        /// Requested zero-based column
        column: u32,
        /// Length of the row in bytes
        width: usize,
    },

    /// Byte offset past the end of the file
    #[error("Offset out of bounds: file has {file_len} bytes, offset is {offset}")]
    OffsetOutOfBounds {
        /// Requested byte offset
        offset: usize,
        /// Length of the file in bytes
        file_len: usize,
    },
}

/// Result type alias for location operations
pub type LocationResult<T> = std::result::Result<T, LocationError>;
