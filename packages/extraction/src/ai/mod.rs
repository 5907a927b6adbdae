//! AI trait implementations.

pub mod openai;

pub use openai::OpenAI;
