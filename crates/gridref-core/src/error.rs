//! Error types for gridref core.

use thiserror::Error;

/// Errors produced while parsing or combining cell references
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RefError {
    #[error("Invalid cell reference: {0}")]
    InvalidReference(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Invalid column letters: {0}")]
    InvalidColumn(String),

    #[error("Offset of {reference} leaves the grid (row {row}, column {col})")]
    NegativeCoordinate {
        reference: String,
        row: i128,
        col: i128,
    },

    #[error("Range {range} has {cells} cells, limit is {limit}")]
    RangeTooLarge {
        range: String,
        cells: u128,
        limit: usize,
    },
}

pub type Result<T> = std::result::Result<T, RefError>;
