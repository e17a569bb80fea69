//! Error types for builder operations.

use thiserror::Error;

/// Result type for builder operations.
pub type BuilderResult<T> = Result<T, BuilderError>;

/// Errors that can occur in builder operations.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// An element with this id is already on the canvas.
    #[error("Duplicate element id: {0}")]
    DuplicateId(String),

    /// Zoom must be a finite, positive number.
    #[error("Invalid zoom value: {0}")]
    InvalidZoom(f64),

    /// The element tree cannot be represented as component markup.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Markup text could not be parsed back into elements.
    #[error("Parse error: {0}")]
    Parse(String),

    /// JSON encoding/decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No library template with the given name.
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),
}
