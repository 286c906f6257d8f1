//! Error types for fixture ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a data directory.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Data directory missing or not a directory.
    #[error("data directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to open or read a domain file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be parsed or deserialized.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
