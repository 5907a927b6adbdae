//! CV Profile Extraction Library
//!
//! Turns an uploaded CV/resume document into a fixed-schema personal
//! information profile using a chat-completion LLM.
//!
//! # Design
//!
//! - One LLM call per document: pages are already joined by the loader,
//!   the prompt carries the whole (truncated) text.
//! - The pipeline owns prompts and reply parsing; providers stay behind
//!   the [`AI`] trait and only move text.
//! - The reply is overlaid onto a default profile, so responses always
//!   carry every field and blank values never shadow defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use extraction::{ai::OpenAI, CvExtractor, PdfLoader};
//! use openai_client::OpenAIClient;
//!
//! let extractor = CvExtractor::new(
//!     Arc::new(PdfLoader::new()),
//!     Arc::new(OpenAI::new(OpenAIClient::from_env()?)),
//! );
//! let profile = extractor.extract_bytes(&pdf_bytes).await?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Core trait abstractions ([`AI`], [`DocumentLoader`])
//! - [`types`] - Profile, document and configuration types
//! - [`pipeline`] - The extractor and reply parsing
//! - [`loaders`] - Document loader implementations ([`PdfLoader`])
//! - [`ai`] - AI implementations (OpenAI)
//! - [`testing`] - Mock implementations for testing

pub mod ai;
pub mod error;
pub mod loaders;
pub mod pipeline;
pub mod prompts;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{DocumentError, ExtractionError};
pub use loaders::PdfLoader;
pub use pipeline::{parse_profile_response, CvExtractor};
pub use prompts::{format_extract_prompt, EXTRACT_PROMPT, SYSTEM_PROMPT};
pub use traits::{AI, DocumentLoader};
pub use types::{CvProfile, Document, ExtractorConfig};
