//! Generic JSON handlers for the resource CRUD endpoints.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use folio_app::ports::{DocumentStore, UploadStore};
use folio_app::services::resource_service::Created;
use folio_domain::error::FolioError;
use folio_domain::id::ItemId;
use folio_domain::resource::ResourceName;

use crate::error::ApiError;
use crate::state::AppState;

fn parse_name(raw: &str) -> Result<ResourceName, ApiError> {
    ResourceName::from_str(raw)
        .map_err(FolioError::from)
        .map_err(ApiError::from)
}

fn parse_id(raw: &str) -> Result<ItemId, ApiError> {
    ItemId::from_str(raw)
        .map_err(FolioError::from)
        .map_err(ApiError::from)
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    /// Item appended to a sequence resource.
    Created(Json<Value>),
    /// Object resource replaced wholesale.
    Replaced(Json<Value>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
            Self::Replaced(json) => json.into_response(),
        }
    }
}

/// `GET /api/{resource}`
///
/// Returns the document verbatim; a missing or unreadable document is a
/// JSON `null` body with status 200.
pub async fn fetch<DS, US>(
    State(state): State<AppState<DS, US>>,
    Path(resource): Path<String>,
) -> Result<Json<Value>, ApiError>
where
    DS: DocumentStore + Send + Sync + 'static,
    US: UploadStore + Send + Sync + 'static,
{
    let name = parse_name(&resource)?;
    Ok(Json(state.resources.fetch(name).await))
}

/// `POST /api/{resource}`
pub async fn create<DS, US>(
    State(state): State<AppState<DS, US>>,
    Path(resource): Path<String>,
    Json(body): Json<Value>,
) -> Result<CreateResponse, ApiError>
where
    DS: DocumentStore + Send + Sync + 'static,
    US: UploadStore + Send + Sync + 'static,
{
    let name = parse_name(&resource)?;
    match state.resources.create(name, body).await {
        Created::Item(item) => Ok(CreateResponse::Created(Json(item))),
        Created::Document(doc) => Ok(CreateResponse::Replaced(Json(doc))),
    }
}

/// `PUT /api/{resource}` — whole-document replace for object resources.
pub async fn replace<DS, US>(
    State(state): State<AppState<DS, US>>,
    Path(resource): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError>
where
    DS: DocumentStore + Send + Sync + 'static,
    US: UploadStore + Send + Sync + 'static,
{
    let name = parse_name(&resource)?;
    let replaced = state.resources.replace(name, body).await?;
    Ok(Json(replaced))
}

/// `PUT /api/{resource}/{id}` — shallow merge into one item.
pub async fn update_item<DS, US>(
    State(state): State<AppState<DS, US>>,
    Path((resource, id)): Path<(String, String)>,
    Json(patch): Json<Value>,
) -> Result<Json<Value>, ApiError>
where
    DS: DocumentStore + Send + Sync + 'static,
    US: UploadStore + Send + Sync + 'static,
{
    let name = parse_name(&resource)?;
    let id = parse_id(&id)?;
    let updated = state.resources.update_item(name, id, patch).await?;
    Ok(Json(updated))
}

/// `DELETE /api/{resource}/{id}` — remove one item and return it.
pub async fn delete_item<DS, US>(
    State(state): State<AppState<DS, US>>,
    Path((resource, id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError>
where
    DS: DocumentStore + Send + Sync + 'static,
    US: UploadStore + Send + Sync + 'static,
{
    let name = parse_name(&resource)?;
    let id = parse_id(&id)?;
    let removed = state.resources.delete_item(name, id).await?;
    Ok(Json(removed))
}
