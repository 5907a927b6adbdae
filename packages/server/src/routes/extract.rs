//! The CV extraction endpoint.

use axum::extract::{Multipart, State};
use axum::Json;
use extraction::CvProfile;

use crate::app::AppState;
use crate::error::ApiError;

const PDF_CONTENT_TYPE: &str = "application/pdf";

/// `POST /extract`
///
/// Upload a CV as a PDF in the multipart field `file` and get the
/// extracted profile back as JSON.
pub async fn extract_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<CvProfile>, ApiError> {
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("invalid multipart request: {e}")))?
    {
        if field.name() == Some("file") {
            let content_type = field.content_type().map(str::to_owned);
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::bad_request(format!("failed to read upload: {e}")))?;
            file = Some((content_type, data));
            break;
        }
    }

    let (content_type, data) =
        file.ok_or_else(|| ApiError::bad_request("missing multipart field 'file'"))?;

    if content_type.as_deref() != Some(PDF_CONTENT_TYPE) {
        return Err(ApiError::unsupported_media_type());
    }

    tracing::info!(bytes = data.len(), "received CV upload");
    let profile = state.extractor.extract_bytes(&data).await?;
    Ok(Json(profile))
}
