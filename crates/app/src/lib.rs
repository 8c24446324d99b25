//! # folio-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DocumentStore` — load & persist one JSON document per resource
//!   - `UploadStore` — persist & remove uploaded binary files
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ResourceService` — fetch, create, replace, update, delete
//!   - `UploadService` — store uploads, best-effort cleanup of old ones
//! - Serialise concurrent read-modify-write cycles per resource
//!
//! ## Dependency rule
//! Depends on `folio-domain` only (plus `tokio::sync` for the per-resource
//! locks). Never imports adapter crates. Adapters depend on *this* crate,
//! not the reverse.

pub mod ports;
pub mod services;
