//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use folio_domain::error::FolioError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`FolioError`] to an HTTP response with appropriate status code.
pub struct ApiError(FolioError);

impl From<FolioError> for ApiError {
    fn from(err: FolioError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            FolioError::NotFound { .. } | FolioError::UnknownResource(_) => {
                (StatusCode::NOT_FOUND, self.0.to_string())
            }
            FolioError::InvalidId(_)
            | FolioError::ShapeMismatch { .. }
            | FolioError::MissingFile
            | FolioError::Multipart(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),
            FolioError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
