//! Extraction pipeline: document bytes in, merged profile out.

pub mod extract;
pub mod parse;

pub use extract::CvExtractor;
pub use parse::parse_profile_response;
