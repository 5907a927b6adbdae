//! Document loading trait.

use crate::error::DocumentError;
use crate::types::document::Document;

/// Document loading seam: raw uploaded bytes to plain text.
///
/// Implementors provide the low-level text extraction step; everything
/// downstream (prompting, parsing, merging) lives in the pipeline.
pub trait DocumentLoader: Send + Sync {
    /// Extract the full text content of a document from its raw bytes.
    fn load(&self, bytes: &[u8]) -> std::result::Result<Document, DocumentError>;
}
