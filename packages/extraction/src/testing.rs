//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the extraction
//! library without making real AI or PDF-parsing calls.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{DocumentError, ExtractionError, Result};
use crate::traits::{ai::AI, loader::DocumentLoader};
use crate::types::{document::Document, profile::CvProfile};

/// Record of a call made to [`MockAI`].
#[derive(Debug, Clone)]
pub struct MockCall {
    pub system: String,
    pub user: String,
}

/// A mock AI implementation for testing.
///
/// Returns a canned reply (an all-null profile JSON by default) and
/// records every call for assertions.
#[derive(Clone, Default)]
pub struct MockAI {
    reply: Option<String>,
    error: Option<String>,
    calls: Arc<RwLock<Vec<MockCall>>>,
}

impl MockAI {
    /// Create a mock that replies with an all-null profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canned reply.
    pub fn with_reply(mut self, reply: impl Into<String>) -> Self {
        self.reply = Some(reply.into());
        self
    }

    /// Make every call fail with the given message.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    /// Calls made so far.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.read().unwrap().clone()
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl AI for MockAI {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        self.calls.write().unwrap().push(MockCall {
            system: system.to_string(),
            user: user.to_string(),
        });

        if let Some(message) = &self.error {
            return Err(ExtractionError::AI(message.clone().into()));
        }

        Ok(self.reply.clone().unwrap_or_else(null_profile_json))
    }
}

/// A mock document loader for testing.
///
/// Returns configured text for any input bytes, or a configured failure.
#[derive(Clone, Default)]
pub struct MockLoader {
    text: String,
    error: Option<String>,
}

impl MockLoader {
    /// Create a loader that yields the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: None,
        }
    }

    /// Create a loader that fails with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            error: Some(message.into()),
        }
    }
}

impl DocumentLoader for MockLoader {
    fn load(&self, _bytes: &[u8]) -> std::result::Result<Document, DocumentError> {
        if let Some(message) = &self.error {
            return Err(DocumentError::Unreadable(message.clone()));
        }
        Ok(Document::new(self.text.clone()))
    }
}

/// JSON for an all-null profile, as a well-behaved model would send it.
pub fn null_profile_json() -> String {
    serde_json::to_string(&CvProfile::default()).expect("profile serializes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_ai_records_calls() {
        let ai = MockAI::new().with_reply(r#"{"Nom": "Dupont"}"#);

        let reply = ai.complete("system", "user prompt").await.unwrap();
        assert_eq!(reply, r#"{"Nom": "Dupont"}"#);

        let calls = ai.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].system, "system");
        assert_eq!(calls[0].user, "user prompt");
    }

    #[tokio::test]
    async fn default_reply_is_a_valid_profile() {
        let ai = MockAI::new();
        let reply = ai.complete("s", "u").await.unwrap();
        let profile: CvProfile = serde_json::from_str(&reply).unwrap();
        assert_eq!(profile, CvProfile::default());
    }
}
