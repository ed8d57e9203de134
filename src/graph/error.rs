//! Graph construction and loading errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a [`Graph`](super::Graph) from a matrix.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The input file does not exist
    #[error("Input file does not exist: {0}")]
    FileNotFound(PathBuf),

    /// A token on a matrix line is not an integer
    #[error("Malformed input on line {line}: '{token}' is not an integer")]
    MalformedInput { line: usize, token: String },

    /// Edge weights must be non-negative
    #[error("Negative weight at row {row}, column {col}")]
    NegativeWeight { row: usize, col: usize },

    /// A row's length differs from the number of rows
    #[error("Matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// IO error other than a missing file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// True for the errors that describe bad matrix contents rather than a
    /// missing or unreadable file.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            GraphError::MalformedInput { .. }
                | GraphError::NegativeWeight { .. }
                | GraphError::NotSquare { .. }
        )
    }
}

/// Result type for graph construction
pub type GraphResult<T> = Result<T, GraphError>;
