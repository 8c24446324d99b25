//! Document store port — persistence for resource documents.

use std::future::Future;

use serde_json::Value;

use folio_domain::error::FolioError;
use folio_domain::resource::ResourceName;

/// Persistence boundary for one-JSON-document-per-resource storage.
///
/// The document is the sole source of truth: there is no cache, and every
/// operation in the service layer performs a full load / mutate / save
/// cycle through this trait.
pub trait DocumentStore {
    /// Load the document backing `name`.
    ///
    /// Returns `Ok(None)` when the document has never been written.
    /// Unreadable documents (IO failures, malformed JSON) are errors; the
    /// service layer decides how much of that to surface.
    fn load(
        &self,
        name: ResourceName,
    ) -> impl Future<Output = Result<Option<Value>, FolioError>> + Send;

    /// Overwrite the document backing `name`.
    fn save(
        &self,
        name: ResourceName,
        document: &Value,
    ) -> impl Future<Output = Result<(), FolioError>> + Send;
}
