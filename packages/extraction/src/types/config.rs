//! Configuration for the extraction pipeline.

/// Configuration for [`CvExtractor`](crate::pipeline::CvExtractor).
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Maximum document bytes forwarded to the LLM.
    ///
    /// Longer documents are truncated at a UTF-8 character boundary
    /// before prompting. Default: 60 000.
    pub max_doc_bytes: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_doc_bytes: 60_000,
        }
    }
}
