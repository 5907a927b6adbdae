//! The CV extractor.

use std::sync::Arc;

use openai_client::types::truncate_to_char_boundary;

use crate::error::{ExtractionError, Result};
use crate::pipeline::parse::parse_profile_response;
use crate::prompts::{format_extract_prompt, SYSTEM_PROMPT};
use crate::traits::{ai::AI, loader::DocumentLoader};
use crate::types::{config::ExtractorConfig, profile::CvProfile};

/// Extraction pipeline: loads a document, prompts the model once over the
/// whole text, and parses the reply into a [`CvProfile`].
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use extraction::{CvExtractor, PdfLoader};
/// use extraction::ai::OpenAI;
///
/// let extractor = CvExtractor::new(
///     Arc::new(PdfLoader::new()),
///     Arc::new(OpenAI::new(client)),
/// );
/// let profile = extractor.extract_bytes(&pdf_bytes).await?;
/// ```
#[derive(Clone)]
pub struct CvExtractor {
    loader: Arc<dyn DocumentLoader>,
    ai: Arc<dyn AI>,
    config: ExtractorConfig,
}

impl CvExtractor {
    /// Create an extractor with the default configuration.
    pub fn new(loader: Arc<dyn DocumentLoader>, ai: Arc<dyn AI>) -> Self {
        Self {
            loader,
            ai,
            config: ExtractorConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    /// Extract a profile from raw document bytes.
    ///
    /// Empty documents (scanned PDFs, blank files) are rejected before
    /// any LLM call is made.
    pub async fn extract_bytes(&self, bytes: &[u8]) -> Result<CvProfile> {
        let document = self.loader.load(bytes)?;
        if document.is_empty() {
            return Err(ExtractionError::EmptyDocument);
        }

        let text = truncate_to_char_boundary(document.text(), self.config.max_doc_bytes);
        if text.len() < document.len() {
            tracing::warn!(
                doc_bytes = document.len(),
                sent_bytes = text.len(),
                "document truncated before prompting"
            );
        }

        let prompt = format_extract_prompt(text);
        tracing::debug!(prompt_bytes = prompt.len(), "running profile extraction");

        let reply = self.ai.complete(SYSTEM_PROMPT, &prompt).await?;
        parse_profile_response(&reply)
    }
}
