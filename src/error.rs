//! Error handling for parameter table conversion.
//!
//! Provides error types with enough context (file, line, field counts) to
//! locate a bad row in the source table.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Source table not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Required column '{column}' missing from header of {path}")]
    MissingColumn { path: PathBuf, column: String },

    #[error(
        "Field count mismatch in {path} line {line}: header has {expected} fields, row has {found}"
    )]
    FieldCountMismatch {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Malformed row in {path} line {line}: expected at least {expected} fields, found {found}")]
    MalformedRow {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid table entry in {path} line {line}: {reason}")]
    InvalidTabEntry {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("Failed to move finished output into place at {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl TableError {
    /// True for any row whose shape does not match the table layout
    pub fn is_malformed_row(&self) -> bool {
        matches!(
            self,
            TableError::FieldCountMismatch { .. } | TableError::MalformedRow { .. }
        )
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Map an open failure to `FileNotFound` when the file is missing
    pub fn open_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path: path.into() }
        } else {
            Self::Io(source)
        }
    }
}

pub type Result<T> = std::result::Result<T, TableError>;
