//! Error types for the catalog crate.
//!
//! A malformed catalog is the one fatal condition in the whole engine, so
//! every variant here is raised at load time and never per request.

use thiserror::Error;

/// Errors that can occur while loading or validating the destination catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading or writing a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The catalog file is not a JSON array of destination records
    #[error("Parse error in {file}: {reason}")]
    ParseError { file: String, reason: String },

    /// A destination field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Two destinations share the same identifier
    #[error("Duplicate destination id: {id}")]
    DuplicateId { id: String },

    /// A required preference selection was left blank
    #[error("Missing required preference: {field}")]
    MissingPreference { field: String },

    /// A tag set that must be non-empty was empty
    #[error("Destination {id} has an empty {field} list")]
    EmptyField { id: String, field: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
