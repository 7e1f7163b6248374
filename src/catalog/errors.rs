//! Catalog loading errors

use std::path::PathBuf;

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while building a catalog
///
/// These only occur at startup. Once a catalog exists it is read-only and
/// every query over it is infallible.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Data file could not be read
    #[error("Failed to read catalog file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Data file is not valid JSON
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Top-level value is not an array
    #[error("Catalog must be a JSON array of records")]
    NotAnArray,

    /// An entry is not a JSON object
    #[error("Catalog entry {index} is not a JSON object")]
    NotAnObject { index: usize },

    /// An entry lacks an integer key
    #[error("Catalog entry {index} has no integer ID")]
    MissingId { index: usize },

    /// Two entries share a key
    #[error("Duplicate ID {0} in catalog")]
    DuplicateId(i64),
}
