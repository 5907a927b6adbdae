//! PDF text extraction via the `pdf-extract` crate.
//!
//! Handles digitally-produced PDFs. Encrypted and corrupted files fail
//! with [`DocumentError::Unreadable`]; scanned/image-only PDFs load but
//! yield an empty [`Document`], which the pipeline rejects before any
//! LLM call.

use crate::error::DocumentError;
use crate::traits::loader::DocumentLoader;
use crate::types::document::Document;

/// [`DocumentLoader`] backed by `pdf-extract`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfLoader;

impl PdfLoader {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentLoader for PdfLoader {
    fn load(&self, bytes: &[u8]) -> Result<Document, DocumentError> {
        let text = pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| DocumentError::Unreadable(e.to_string()))?;

        tracing::debug!(bytes = bytes.len(), chars = text.len(), "loaded PDF");
        Ok(Document::new(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_unreadable() {
        let result = PdfLoader::new().load(b"definitely not a pdf");
        assert!(matches!(result, Err(DocumentError::Unreadable(_))));
    }
}
