//! Error types for catalog loading.

use thiserror::Error;

/// Errors that can occur when loading a version-set catalog.
///
/// Queries against a catalog never fail; only explicit loading reports
/// errors, and callers that prefer degradation can use
/// [`VersionSetCatalog::from_path_or_empty`](crate::VersionSetCatalog::from_path_or_empty).
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error reading the catalog file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed catalog JSON.
    #[error("malformed version-set table: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for catalog loading.
pub type Result<T> = std::result::Result<T, Error>;
