//! Error types for covsumlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a coverage report
#[derive(Error, Debug)]
pub enum CovsumError {
    /// Failed to read the profile file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Malformed coverage profile
    #[error("invalid coverprofile: line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Unknown sort column
    #[error(
        "invalid sort column '{0}', must be one of filename, block, stmt, missing-blocks or missing-stmts"
    )]
    InvalidSortKey(String),

    /// Unknown sort direction
    #[error("invalid sort order '{0}', must be either asc or desc")]
    InvalidSortDirection(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CovsumError {
    /// True for the errors caused by a bad sort argument rather than bad input data.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            CovsumError::InvalidSortKey(_) | CovsumError::InvalidSortDirection(_)
        )
    }
}
