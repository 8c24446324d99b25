//! Storage-specific error type wrapping filesystem failures.

use folio_domain::error::FolioError;

/// Errors originating from the flat-file storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A filesystem read, write, or directory creation failed.
    #[error("filesystem error")]
    Io(#[from] std::io::Error),

    /// A stored document is not valid JSON.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}

impl From<StorageError> for FolioError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
