//! Flat-file implementation of [`UploadStore`].

use std::future::Future;
use std::path::PathBuf;

use tokio::fs;

use folio_app::ports::UploadStore;
use folio_domain::error::FolioError;

use crate::error::StorageError;

/// Stores uploaded blobs as `{upload_dir}/{unix_millis}-{random}{.ext}`.
pub struct FsUploadStore {
    upload_dir: PathBuf,
}

impl FsUploadStore {
    /// Create a store rooted at `upload_dir`, creating the directory up
    /// front. Creation failure surfaces to the caller instead of being
    /// discovered on the first upload.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] when the directory cannot be created.
    pub fn create(upload_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let upload_dir = upload_dir.into();
        std::fs::create_dir_all(&upload_dir)?;
        Ok(Self { upload_dir })
    }

    /// Timestamp plus random suffix; collisions would need two uploads in
    /// the same millisecond drawing the same UUID.
    fn generate_name(extension: &str) -> String {
        let stamp = chrono::Utc::now().timestamp_millis();
        let suffix = uuid::Uuid::new_v4().simple();
        format!("{stamp}-{suffix}{extension}")
    }
}

impl UploadStore for FsUploadStore {
    fn store(
        &self,
        extension: &str,
        bytes: Vec<u8>,
    ) -> impl Future<Output = Result<String, FolioError>> + Send {
        let file_name = Self::generate_name(extension);
        let path = self.upload_dir.join(&file_name);
        async move {
            fs::write(&path, bytes).await.map_err(StorageError::from)?;
            Ok(file_name)
        }
    }

    fn remove(&self, file_name: &str) -> impl Future<Output = Result<bool, FolioError>> + Send {
        // Only bare file names may be removed; anything with a path
        // separator could reach outside the upload directory.
        let path = (!file_name.is_empty() && !file_name.contains(['/', '\\']))
            .then(|| self.upload_dir.join(file_name));
        async move {
            let Some(path) = path else {
                return Ok(false);
            };
            match fs::remove_file(&path).await {
                Ok(()) => Ok(true),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
                Err(err) => Err(StorageError::from(err).into()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, FsUploadStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FsUploadStore::create(dir.path()).unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn should_store_bytes_under_generated_name() {
        let (dir, store) = store();

        let name = store.store(".png", vec![0xde, 0xad]).await.unwrap();

        assert!(name.ends_with(".png"));
        let written = std::fs::read(dir.path().join(&name)).unwrap();
        assert_eq!(written, vec![0xde, 0xad]);
    }

    #[tokio::test]
    async fn should_generate_distinct_names_for_same_extension() {
        let (_dir, store) = store();

        let a = store.store(".jpg", vec![1]).await.unwrap();
        let b = store.store(".jpg", vec![2]).await.unwrap();

        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn should_remove_existing_file() {
        let (dir, store) = store();
        let name = store.store(".txt", b"bye".to_vec()).await.unwrap();

        assert!(store.remove(&name).await.unwrap());
        assert!(!dir.path().join(&name).exists());
    }

    #[tokio::test]
    async fn should_report_false_for_missing_file() {
        let (_dir, store) = store();
        assert!(!store.remove("does-not-exist.png").await.unwrap());
    }

    #[tokio::test]
    async fn should_refuse_names_with_path_separators() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsUploadStore::create(dir.path().join("uploads")).unwrap();
        let outside = dir.path().join("victim.txt");
        std::fs::write(&outside, b"keep me").unwrap();

        assert!(!store.remove("../victim.txt").await.unwrap());
        assert!(outside.exists());
    }

    #[test]
    fn should_create_missing_upload_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("uploads");

        FsUploadStore::create(&nested).unwrap();

        assert!(nested.is_dir());
    }
}
