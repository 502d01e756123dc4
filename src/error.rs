//! Error types for sigcraft

use thiserror::Error;

use crate::validation::Readiness;

/// Result type alias for sigcraft operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around signature rendering
///
/// Rendering itself never fails; these cover the surfaces around it:
/// loading records, the copy/download gate, and writing exports.
#[derive(Error, Debug)]
pub enum Error {
    /// Template identifier outside the known set
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// Record could not be decoded
    #[error("Invalid signature record: {0}")]
    InvalidRecord(#[from] serde_json::Error),

    /// Malformed data URI
    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),

    /// The validity gate rejected the record
    #[error("Signature is not ready for export:\n{0}")]
    NotReady(Readiness),

    /// Export could not be written
    #[error("Export failed: {0}")]
    ExportError(String),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
