//! Shared application state for axum handlers.

use std::sync::Arc;

use folio_app::ports::{DocumentStore, UploadStore};
use folio_app::services::resource_service::ResourceService;
use folio_app::services::upload_service::UploadService;

/// Application state shared across all axum handlers.
///
/// Generic over the document store and upload store to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrappers are
/// cloned.
pub struct AppState<DS, US> {
    /// Resource document CRUD service.
    pub resources: Arc<ResourceService<DS>>,
    /// Upload storage service.
    pub uploads: Arc<UploadService<US>>,
    /// Public base URL under which uploads are served, without a trailing
    /// slash (e.g. `http://localhost:5000`).
    pub public_url: Arc<str>,
}

impl<DS, US> Clone for AppState<DS, US> {
    fn clone(&self) -> Self {
        Self {
            resources: Arc::clone(&self.resources),
            uploads: Arc::clone(&self.uploads),
            public_url: Arc::clone(&self.public_url),
        }
    }
}

impl<DS, US> AppState<DS, US>
where
    DS: DocumentStore + Send + Sync + 'static,
    US: UploadStore + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        resources: ResourceService<DS>,
        uploads: UploadService<US>,
        public_url: impl Into<String>,
    ) -> Self {
        let public_url: String = public_url.into();
        Self {
            resources: Arc::new(resources),
            uploads: Arc::new(uploads),
            public_url: public_url.trim_end_matches('/').into(),
        }
    }
}
