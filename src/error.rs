// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for board construction.
//!
//! Every failure here is an invalid starting configuration supplied by a
//! caller. The search itself generates its own boards and cannot produce
//! these, apart from [`GridError::TooManyCells`] when asked for a board
//! larger than a [`GridState`](crate::geometry::GridState) can hold.

use thiserror::Error;

/// Errors that can occur when building a [`GridState`](crate::geometry::GridState).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Rows of the supplied matrix have different lengths.
    #[error("invalid configuration: row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell holds something other than 0 or 1.
    #[error("invalid configuration: cell ({row}, {col}) is {value}, expected 0 or 1")]
    NonBinaryCell { row: usize, col: usize, value: u8 },

    /// A character in the text notation is neither alive nor dead.
    #[error("invalid configuration: unexpected character {ch:?} in row {row}")]
    InvalidCharacter { row: usize, ch: char },

    /// The board does not fit in the 64-cell bitset.
    #[error("board of {cells} cells exceeds the maximum of {max}")]
    TooManyCells { cells: usize, max: usize },
}

impl GridError {
    /// Whether this is one of the malformed-matrix errors (as opposed to a
    /// capacity limit).
    pub fn is_invalid_configuration(&self) -> bool {
        !matches!(self, GridError::TooManyCells { .. })
    }
}
