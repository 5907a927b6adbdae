//! OpenAI implementation of the [`AI`] trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use extraction::ai::OpenAI;
//! use openai_client::OpenAIClient;
//!
//! let ai = OpenAI::new(OpenAIClient::from_env()?).with_model("gpt-4o");
//! ```

use async_trait::async_trait;
use openai_client::{OpenAIClient, OpenAIError};

use crate::error::{ExtractionError, Result};
use crate::traits::ai::AI;

const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_FALLBACK_MODEL: &str = "gpt-3.5-turbo";

/// OpenAI chat-completion backend.
///
/// Runs every prompt at temperature 0 against the configured model. When
/// the API rejects the primary model (unknown model, deprecation, tier
/// restrictions) the call is retried once against the fallback model.
/// Transport errors are not retried.
#[derive(Clone)]
pub struct OpenAI {
    client: OpenAIClient,
    model: String,
    fallback_model: Option<String>,
}

impl OpenAI {
    /// Wrap a client with the default model pair.
    pub fn new(client: OpenAIClient) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
            fallback_model: Some(DEFAULT_FALLBACK_MODEL.to_string()),
        }
    }

    /// Set the chat model (default: gpt-4o).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the fallback model (default: gpt-3.5-turbo).
    pub fn with_fallback_model(mut self, model: impl Into<String>) -> Self {
        self.fallback_model = Some(model.into());
        self
    }

    /// Disable the fallback retry.
    pub fn without_fallback(mut self) -> Self {
        self.fallback_model = None;
        self
    }

    /// Get the current model name.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl AI for OpenAI {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        match self.client.chat(&self.model, system, user).await {
            Err(err) if err.is_api() => {
                let fallback = self
                    .fallback_model
                    .as_deref()
                    .filter(|m| *m != self.model);

                let Some(fallback) = fallback else {
                    return Err(ai_error(err));
                };

                tracing::warn!(
                    model = %self.model,
                    fallback = %fallback,
                    error = %err,
                    "model unavailable, retrying with fallback"
                );
                self.client
                    .chat(fallback, system, user)
                    .await
                    .map_err(ai_error)
            }
            result => result.map_err(ai_error),
        }
    }
}

fn ai_error(err: OpenAIError) -> ExtractionError {
    ExtractionError::AI(Box::new(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_configures_models() {
        let ai = OpenAI::new(OpenAIClient::new("sk-test"))
            .with_model("gpt-4o-mini")
            .with_fallback_model("gpt-4o");

        assert_eq!(ai.model(), "gpt-4o-mini");
        assert_eq!(ai.fallback_model.as_deref(), Some("gpt-4o"));
    }

    #[test]
    fn fallback_can_be_disabled() {
        let ai = OpenAI::new(OpenAIClient::new("sk-test")).without_fallback();
        assert!(ai.fallback_model.is_none());
    }
}
