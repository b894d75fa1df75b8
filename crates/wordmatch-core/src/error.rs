//! Error types for grid construction and addressing.

use crate::{Dimensions, Position};

/// Errors raised when addressing or sizing a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// A position lies outside the grid.
    #[display("position {pos} is outside the {dims} grid")]
    OutOfBounds {
        /// Offending position.
        pos: Position,
        /// Dimensions of the addressed grid.
        dims: Dimensions,
    },
    /// The requested grid cannot hold a run of three in both directions.
    #[display("grid must be at least 3x3, got {rows}x{cols}")]
    TooSmall {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
}

/// Errors raised when parsing a [`TokenGrid`](crate::TokenGrid) from text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GridParseError {
    /// The input contains no rows.
    #[display("grid text contains no rows")]
    Empty,
    /// A row has a different number of cells than the first row.
    #[display("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Number of cells found in the row.
        found: usize,
        /// Number of cells in the first row.
        expected: usize,
    },
    /// The parsed grid is too small.
    #[display("invalid grid size: {_0}")]
    Size(#[from] GridError),
}
