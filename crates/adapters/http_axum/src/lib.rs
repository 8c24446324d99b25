//! # folio-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON content API** under `/api/{resource}` through one
//!   generic handler set — no per-resource route duplication
//! - Serve the **multipart upload endpoint** at `/api/upload`
//! - Serve the uploads directory at `/uploads/*` as pass-through static
//!   files
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `folio-app` (for port traits and services) and `folio-domain`
//! (for resource names and errors used in request/response mapping). Never
//! leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
