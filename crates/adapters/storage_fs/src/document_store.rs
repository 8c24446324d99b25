//! Flat-file implementation of [`DocumentStore`].

use std::future::Future;
use std::path::PathBuf;

use serde_json::Value;
use tokio::fs;

use folio_app::ports::DocumentStore;
use folio_domain::error::FolioError;
use folio_domain::resource::ResourceName;

use crate::error::StorageError;

/// Stores each resource as `{data_dir}/{name}.json`.
///
/// Documents are written pretty-printed (2-space indentation) so the data
/// directory stays hand-editable, as it was under the original deployment.
pub struct FsDocumentStore {
    data_dir: PathBuf,
}

impl FsDocumentStore {
    /// Create a store rooted at `data_dir`, creating the directory if
    /// needed. Documents themselves are expected to be seeded at
    /// deployment time; this adapter never invents one on read.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] when the directory cannot be created.
    pub fn create(data_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    fn path_for(&self, name: ResourceName) -> PathBuf {
        self.data_dir.join(name.file_name())
    }
}

impl DocumentStore for FsDocumentStore {
    fn load(
        &self,
        name: ResourceName,
    ) -> impl Future<Output = Result<Option<Value>, FolioError>> + Send {
        let path = self.path_for(name);
        async move {
            let bytes = match fs::read(&path).await {
                Ok(bytes) => bytes,
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
                Err(err) => return Err(StorageError::from(err).into()),
            };
            let document = serde_json::from_slice(&bytes).map_err(StorageError::from)?;
            Ok(Some(document))
        }
    }

    fn save(
        &self,
        name: ResourceName,
        document: &Value,
    ) -> impl Future<Output = Result<(), FolioError>> + Send {
        let path = self.path_for(name);
        let payload = serde_json::to_vec_pretty(document);
        async move {
            let payload = payload.map_err(StorageError::from)?;
            fs::write(&path, payload).await.map_err(StorageError::from)?;
            Ok(())
        }
    }
}
