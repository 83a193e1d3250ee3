//! Catalog lookup layer.
//!
//! This module provides abstractions for catalog lookups via a source trait,
//! allowing different backends to be swapped easily:
//!
//! - [`CatalogSource`]: trait for raw name-keyed lookups against a catalog
//! - [`remote`]: HTTP implementation querying an external catalog service
//! - [`memory`]: in-memory implementation for unit testing and local development
//! - [`cache`]: memoizing, concurrency-bounded front over any source
//!
//! All consumers go through the [`CatalogCache`](cache::CatalogCache); the
//! cache owns every fetched record for the lifetime of a run and hands out
//! shared read-only handles.

pub mod cache;
pub mod memory;
pub mod remote;

pub use cache::{CatalogCache, LookupError};
pub use memory::MemoryCatalog;
pub use remote::RemoteCatalog;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::CatalogRecord;

/// Errors from a raw catalog source.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The remote service failed (transport, HTTP status, or decode error)
    #[error("catalog service error: {0}")]
    Service(String),
}

/// A name-keyed catalog backend.
///
/// A lookup may return zero, one, or many entries for a name; multi-match
/// resolution is the cache's concern, not the source's. One attempt per
/// call, no retry.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn lookup(&self, name: &str) -> Result<Vec<CatalogRecord>, CatalogError>;
}
