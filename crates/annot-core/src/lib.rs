//! Schema, JSON persistence, and field lookup for annotated form documents.
//!
//! Models an annotated paper/electronic form (e.g., a tax form) as a tree of
//! pages, positioned fields, and per-field styling, formatting, and
//! validation metadata, with lossless JSON round-tripping and linear-scan
//! lookups. It is a data model and query layer only: it does not render
//! fields, extract coordinates from PDFs, or enforce the validation rules it
//! records.
//!
//! # Aliasing and threading
//!
//! [`model::FormAnnotation::field_by_id_mut`] and
//! [`model::FormAnnotation::fields_on_page`] return references into the
//! document's own storage, so "look up, then mutate in place" works — and so
//! the document carries no internal synchronization. Sharing one document
//! across threads while any of them mutates it is a data race; callers must
//! serialize access externally.

pub mod error;
pub mod model;
pub mod query;
pub mod schema;
pub mod storage;

pub use error::{AnnotationError, Result};
