//! # folio-adapter-storage-fs
//!
//! Flat-file persistence adapter.
//!
//! ## Responsibilities
//! - Implement [`folio_app::ports::DocumentStore`]: one pretty-printed
//!   JSON file per resource under a data directory
//! - Implement [`folio_app::ports::UploadStore`]: uploaded blobs under an
//!   uploads directory, with generated collision-resistant names
//! - Create both directories up front as an explicit, fallible init step
//!
//! ## Dependency rule
//! Depends on `folio-app` (for port traits) and `folio-domain` (for domain
//! types). The `app` and `domain` crates must never reference this adapter.

pub mod document_store;
pub mod error;
pub mod upload_store;

pub use document_store::FsDocumentStore;
pub use error::StorageError;
pub use upload_store::FsUploadStore;
