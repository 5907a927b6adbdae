//! AI trait for LLM operations.

use async_trait::async_trait;

use crate::error::Result;

/// Chat seam used by the extraction pipeline.
///
/// Implementations wrap a specific LLM provider and handle transport,
/// authentication and model selection. The pipeline owns the prompts and
/// parses the raw reply itself, so the trait stays provider-agnostic.
#[async_trait]
pub trait AI: Send + Sync {
    /// Run one completion: system prompt plus user prompt, raw reply text back.
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}
