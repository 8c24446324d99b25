//! Multipart upload handler.

use axum::Json;
use axum::extract::multipart::{Multipart, MultipartError};
use axum::extract::State;
use serde::Serialize;

use folio_app::ports::{DocumentStore, UploadStore};
use folio_domain::error::FolioError;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for a successful upload.
#[derive(Serialize)]
pub struct UploadResponse {
    /// Publicly servable URL of the stored file.
    pub url: String,
}

fn multipart_err(err: MultipartError) -> ApiError {
    ApiError::from(FolioError::Multipart(err.to_string()))
}

/// `POST /api/upload`
///
/// Multipart form with a required `file` field and an optional `oldUrl`
/// field naming a previous upload to delete. Old-file deletion is
/// best-effort and never fails the upload.
pub async fn upload<DS, US>(
    State(state): State<AppState<DS, US>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError>
where
    DS: DocumentStore + Send + Sync + 'static,
    US: UploadStore + Send + Sync + 'static,
{
    let mut stored: Option<String> = None;
    let mut old_url: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_err)? {
        match field.name() {
            Some("file") => {
                let original = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(multipart_err)?;
                stored = Some(state.uploads.store_file(&original, bytes.to_vec()).await?);
            }
            Some("oldUrl") => {
                old_url = Some(field.text().await.map_err(multipart_err)?);
            }
            _ => {}
        }
    }

    let Some(file_name) = stored else {
        return Err(FolioError::MissingFile.into());
    };

    if let Some(old_url) = old_url {
        state.uploads.delete_previous(&old_url, &state.public_url).await;
    }

    Ok(Json(UploadResponse {
        url: format!("{}/uploads/{file_name}", state.public_url),
    }))
}
