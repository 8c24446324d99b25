//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod resources;
#[allow(clippy::missing_errors_doc)]
pub mod upload;

use axum::Router;
use axum::routing::{get, post, put};

use folio_app::ports::{DocumentStore, UploadStore};

use crate::state::AppState;

/// Build the `/api` sub-router.
///
/// One generic handler set serves every resource; the resource name is a
/// path parameter parsed against the fixed set (unknown names are 404).
pub fn routes<DS, US>() -> Router<AppState<DS, US>>
where
    DS: DocumentStore + Send + Sync + 'static,
    US: UploadStore + Send + Sync + 'static,
{
    Router::new()
        .route("/upload", post(upload::upload::<DS, US>))
        .route(
            "/{resource}",
            get(resources::fetch::<DS, US>)
                .post(resources::create::<DS, US>)
                .put(resources::replace::<DS, US>),
        )
        .route(
            "/{resource}/{id}",
            put(resources::update_item::<DS, US>).delete(resources::delete_item::<DS, US>),
        )
}
