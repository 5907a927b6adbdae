//! Typed errors for the extraction library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur during extraction operations.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Document could not be loaded
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// Document loaded but contained no extractable text
    #[error("document contains no extractable text")]
    EmptyDocument,

    /// AI service unavailable or failed
    #[error("AI service error: {0}")]
    AI(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Model reply was not a valid profile JSON object
    #[error("model returned invalid profile JSON: {0}")]
    ModelOutput(#[source] serde_json::Error),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

/// Errors that can occur while loading a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// PDF could not be parsed (corrupted, encrypted, not a PDF)
    #[error("failed to read PDF: {0}")]
    Unreadable(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
