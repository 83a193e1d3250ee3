//! Memoizing, concurrency-bounded front over a catalog source.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use super::{CatalogError, CatalogSource};
use crate::models::{select_authoritative, CatalogRecord};

/// Maximum number of catalog lookups in flight against the backing source.
pub const LOOKUP_CONCURRENCY: usize = 4;

/// Errors returned by [`CatalogCache::fetch`].
#[derive(Debug, Error)]
pub enum LookupError {
    /// The catalog has no entry for this name (empty match list, or a name
    /// whose earlier lookup failed and was memoized as absent)
    #[error("object not found in catalog: {0}")]
    NotFound(String),

    /// The backing service failed on the first attempt for this name
    #[error(transparent)]
    Service(#[from] CatalogError),
}

/// Deduplicating cache over a [`CatalogSource`].
///
/// Resolves each name at most once per run: the raw match list is reduced to
/// its authoritative entry (max-redshift policy, see
/// [`select_authoritative`]) and the outcome is memoized, including absence.
/// A failed remote call is memoized as absent too, so there is a single
/// attempt per name per run and later fetches return
/// [`LookupError::NotFound`] without touching the network.
///
/// Remote concurrency is bounded by a semaphore with
/// [`LOOKUP_CONCURRENCY`] permits. Two workers racing on the same uncached
/// name may both reach the source; the duplicate fetch is benign (same key,
/// same value) and the first inserted outcome wins, so every caller observes
/// the same record for a given name.
pub struct CatalogCache {
    source: Arc<dyn CatalogSource>,
    entries: RwLock<HashMap<String, Option<Arc<CatalogRecord>>>>,
    lookup_permits: Semaphore,
}

impl CatalogCache {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            entries: RwLock::new(HashMap::new()),
            lookup_permits: Semaphore::new(LOOKUP_CONCURRENCY),
        }
    }

    /// Fetch the authoritative record for a name.
    ///
    /// # Errors
    ///
    /// * [`LookupError::NotFound`] if the catalog has no entry for the name
    /// * [`LookupError::Service`] if the first (and only) remote attempt
    ///   for the name fails
    pub async fn fetch(&self, name: &str) -> Result<Arc<CatalogRecord>, LookupError> {
        if let Some(cached) = self.entries.read().get(name) {
            return Self::resolve(name, cached.clone());
        }

        // The semaphore is owned by the cache and never closed.
        let _permit = self
            .lookup_permits
            .acquire()
            .await
            .expect("lookup semaphore closed");

        // Another worker may have resolved this name while we waited.
        if let Some(cached) = self.entries.read().get(name) {
            return Self::resolve(name, cached.clone());
        }

        let outcome = match self.source.lookup(name).await {
            Ok(records) => {
                debug!(object = name, matches = records.len(), "lookup resolved");
                select_authoritative(&records).cloned().map(Arc::new)
            }
            Err(err) => {
                warn!(object = name, error = %err, "catalog lookup failed");
                self.insert(name, None);
                return Err(LookupError::Service(err));
            }
        };

        let cached = self.insert(name, outcome);
        Self::resolve(name, cached)
    }

    /// Number of names resolved so far (including absent outcomes).
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Insert an outcome unless a racing worker already did; returns the
    /// outcome every caller should observe.
    fn insert(
        &self,
        name: &str,
        outcome: Option<Arc<CatalogRecord>>,
    ) -> Option<Arc<CatalogRecord>> {
        self.entries
            .write()
            .entry(name.to_string())
            .or_insert(outcome)
            .clone()
    }

    fn resolve(
        name: &str,
        cached: Option<Arc<CatalogRecord>>,
    ) -> Result<Arc<CatalogRecord>, LookupError> {
        cached.ok_or_else(|| LookupError::NotFound(name.to_string()))
    }
}
