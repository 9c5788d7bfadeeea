//! dspace-client: DSpace REST lookups for repository items
//!
//! This crate provides:
//! - The item model (`Document`, `MetadataField`) as the REST API reports it
//! - A `find-by-metadata-field` query client over an async HTTP transport
//! - Case-insensitive metadata filtering (exact and substring modes)
//!
//! Item metadata is untyped key/value text. Lookups go through the accessors
//! on [`Document`], which return `Option` rather than assuming a field exists.

pub mod client;
pub mod error;
pub mod filter;
pub mod http;
pub mod keys;
pub mod model;

pub use client::{DspaceClient, MetadataSource, FIND_BY_METADATA_PATH};
pub use error::TransportError;
pub use filter::{document_matches, filter_documents, MatchMode};
pub use http::{HttpClient, HttpResponse};
pub use model::{Document, MetadataField, MetadataQuery};
