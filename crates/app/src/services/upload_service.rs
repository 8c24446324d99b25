//! Upload service — storing uploaded files and best-effort cleanup.

use folio_domain::error::FolioError;

use crate::ports::UploadStore;

/// Application service for file uploads.
pub struct UploadService<U> {
    store: U,
}

impl<U: UploadStore> UploadService<U> {
    /// Create a new service backed by the given upload store.
    pub fn new(store: U) -> Self {
        Self { store }
    }

    /// Persist an uploaded file and return its generated file name.
    ///
    /// Only the extension of `original_name` survives; the rest of the
    /// stored name is generated by the store.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the file cannot be written.
    pub async fn store_file(
        &self,
        original_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, FolioError> {
        let extension = extension_of(original_name);
        self.store.store(&extension, bytes).await
    }

    /// Best-effort removal of a previously uploaded file.
    ///
    /// Acts only when `old_url` points under `{public_url}/uploads/`, and
    /// only on the final path segment, so foreign URLs and crafted paths
    /// are ignored. Failures are logged, never surfaced: the upload that
    /// triggered the cleanup already succeeded.
    pub async fn delete_previous(&self, old_url: &str, public_url: &str) {
        let prefix = format!("{}/uploads/", public_url.trim_end_matches('/'));
        let Some(rest) = old_url.strip_prefix(&prefix) else {
            return;
        };
        let Some(file_name) = rest.rsplit('/').next().filter(|name| !name.is_empty()) else {
            return;
        };
        match self.store.remove(file_name).await {
            Ok(true) => tracing::info!(file = file_name, "deleted previous upload"),
            Ok(false) => {}
            Err(err) => {
                tracing::warn!(file = file_name, error = %err, "failed to delete previous upload");
            }
        }
    }
}

/// The dot-prefixed, sanitised extension of `name`, or an empty string.
fn extension_of(name: &str) -> String {
    std::path::Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(char::is_alphanumeric))
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingStore {
        stored: Mutex<Vec<(String, Vec<u8>)>>,
        removed: Mutex<Vec<String>>,
        fail_remove: bool,
    }

    impl UploadStore for &RecordingStore {
        fn store(
            &self,
            extension: &str,
            bytes: Vec<u8>,
        ) -> impl Future<Output = Result<String, FolioError>> + Send {
            let name = format!("generated{extension}");
            self.stored.lock().unwrap().push((extension.to_string(), bytes));
            async { Ok(name) }
        }

        fn remove(&self, file_name: &str) -> impl Future<Output = Result<bool, FolioError>> + Send {
            let result = if self.fail_remove {
                Err(FolioError::Storage("cannot remove".into()))
            } else {
                self.removed.lock().unwrap().push(file_name.to_string());
                Ok(true)
            };
            async { result }
        }
    }

    #[tokio::test]
    async fn should_preserve_extension_when_storing() {
        let store = RecordingStore::default();
        let service = UploadService::new(&store);

        let name = service.store_file("avatar.PNG", vec![1, 2, 3]).await.unwrap();

        assert_eq!(name, "generated.PNG");
        assert_eq!(store.stored.lock().unwrap()[0].0, ".PNG");
    }

    #[tokio::test]
    async fn should_store_without_extension_when_name_has_none() {
        let store = RecordingStore::default();
        let service = UploadService::new(&store);

        let name = service.store_file("README", vec![]).await.unwrap();

        assert_eq!(name, "generated");
    }

    #[tokio::test]
    async fn should_drop_suspicious_extension() {
        let store = RecordingStore::default();
        let service = UploadService::new(&store);

        service.store_file("weird.p~g", vec![]).await.unwrap();

        assert_eq!(store.stored.lock().unwrap()[0].0, "");
    }

    #[tokio::test]
    async fn should_delete_file_referenced_by_matching_url() {
        let store = RecordingStore::default();
        let service = UploadService::new(&store);

        service
            .delete_previous(
                "http://localhost:5000/uploads/123-abc.png",
                "http://localhost:5000",
            )
            .await;

        assert_eq!(*store.removed.lock().unwrap(), vec!["123-abc.png".to_string()]);
    }

    #[tokio::test]
    async fn should_ignore_foreign_url() {
        let store = RecordingStore::default();
        let service = UploadService::new(&store);

        service
            .delete_previous("https://elsewhere.example/uploads/x.png", "http://localhost:5000")
            .await;

        assert!(store.removed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_use_only_final_path_segment() {
        let store = RecordingStore::default();
        let service = UploadService::new(&store);

        service
            .delete_previous(
                "http://localhost:5000/uploads/nested/deeper/x.png",
                "http://localhost:5000",
            )
            .await;

        assert_eq!(*store.removed.lock().unwrap(), vec!["x.png".to_string()]);
    }

    #[tokio::test]
    async fn should_swallow_removal_failure() {
        let store = RecordingStore {
            fail_remove: true,
            ..RecordingStore::default()
        };
        let service = UploadService::new(&store);

        // Must not panic or surface the error.
        service
            .delete_previous("http://localhost:5000/uploads/x.png", "http://localhost:5000")
            .await;
    }
}
