//! Upload store port — persistence for uploaded binary files.

use std::future::Future;

use folio_domain::error::FolioError;

/// Storage boundary for uploaded files.
pub trait UploadStore {
    /// Persist `bytes` under a freshly generated, collision-resistant file
    /// name carrying `extension` (empty, or a dot-prefixed suffix such as
    /// `.png`). Returns the generated file name.
    fn store(
        &self,
        extension: &str,
        bytes: Vec<u8>,
    ) -> impl Future<Output = Result<String, FolioError>> + Send;

    /// Remove a previously stored file by its bare file name.
    ///
    /// Returns `Ok(false)` when no such file exists (or the name is not a
    /// bare file name), `Ok(true)` when a file was deleted.
    fn remove(&self, file_name: &str) -> impl Future<Output = Result<bool, FolioError>> + Send;
}
