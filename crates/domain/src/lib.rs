//! # folio-domain
//!
//! Pure domain model for the folio portfolio backend.
//!
//! ## Responsibilities
//! - Foundational types: resource names, shapes, item identifiers, errors
//! - Define the fixed set of **Resources** (named JSON documents: hero,
//!   about, contact, education, skills, certifications, projects)
//! - Define the **Shape** of each resource (single object vs. ordered
//!   sequence of identified items) as a static table
//! - Shallow document manipulation: append, merge, find, remove items
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod document;
pub mod error;
pub mod id;
pub mod resource;
