//! API error type and status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use extraction::ExtractionError;
use serde::Serialize;

/// Error returned by API handlers, serialized as `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unsupported_media_type() -> Self {
        Self::new(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "file must be a PDF (application/pdf)",
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<ExtractionError> for ApiError {
    fn from(err: ExtractionError) -> Self {
        let status = match &err {
            // Client sent a file we cannot work with
            ExtractionError::Document(_) | ExtractionError::EmptyDocument => {
                StatusCode::BAD_REQUEST
            }
            // The model answered, but not with a usable profile
            ExtractionError::ModelOutput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            // Upstream LLM provider failed
            ExtractionError::AI(_) => StatusCode::BAD_GATEWAY,
            ExtractionError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::error!(error = %err, status = %status, "extraction failed");
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use extraction::DocumentError;

    #[test]
    fn extraction_errors_map_to_statuses() {
        let cases = [
            (
                ExtractionError::Document(DocumentError::Unreadable("bad".into())),
                StatusCode::BAD_REQUEST,
            ),
            (ExtractionError::EmptyDocument, StatusCode::BAD_REQUEST),
            (
                ExtractionError::AI("down".to_string().into()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                ExtractionError::Config("missing".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }

        let json_err = serde_json::from_str::<extraction::CvProfile>("not json").unwrap_err();
        assert_eq!(
            ApiError::from(ExtractionError::ModelOutput(json_err)).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
