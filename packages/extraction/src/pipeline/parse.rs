//! Parsing of model replies into a [`CvProfile`].

use openai_client::types::strip_code_blocks;

use crate::error::{ExtractionError, Result};
use crate::types::profile::CvProfile;

/// Parse a raw model reply into a complete profile.
///
/// Strips markdown code fences, deserializes the JSON object, then
/// overlays it onto [`CvProfile::default`] so the result always carries
/// every field and blank values never shadow the defaults.
pub fn parse_profile_response(raw: &str) -> Result<CvProfile> {
    let cleaned = strip_code_blocks(raw);
    let parsed: CvProfile =
        serde_json::from_str(cleaned).map_err(ExtractionError::ModelOutput)?;

    let mut profile = CvProfile::default();
    profile.merge(parsed);
    Ok(profile)
}
