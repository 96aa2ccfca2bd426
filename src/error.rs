//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by contact store operations.
///
/// None of these are fatal: the operation is aborted and the store is
/// left exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// Input failed a domain validation rule
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// A contact with this name is already in the store
    #[error("Contact '{0}' already exists.")]
    AlreadyExists(String),

    /// No contact with this name is in the store
    #[error("Contact '{0}' not found.")]
    NotFound(String),
}

/// Errors that can occur while loading or saving the backing file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading, writing or renaming the file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not a valid contact document
    #[error("Invalid contact data in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The store could not be serialized
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors that can occur while producing reports.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Creating the export file failed
    #[error("Failed to create {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing CSV records failed
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ReportError
pub type ReportResult<T> = Result<T, ReportError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
