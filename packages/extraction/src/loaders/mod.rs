//! Document loader implementations.

pub mod pdf;

pub use pdf::PdfLoader;
