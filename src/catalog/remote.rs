//! HTTP catalog client.
//!
//! Queries an external name-keyed lookup service expected to answer with a
//! JSON array of catalog records. The service is treated as rate-unlimited;
//! there is a single attempt per lookup and no backoff. A request timeout
//! guards against connections that never complete, but a slow (not stuck)
//! remote call still stalls its batch.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::{CatalogError, CatalogSource};
use crate::models::CatalogRecord;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Catalog source backed by a remote HTTP lookup endpoint.
///
/// Issues `GET {base_url}?name=<object>` and decodes the body as
/// `Vec<CatalogRecord>`. An empty array is a valid "no such object"
/// response, not an error.
pub struct RemoteCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteCatalog {
    /// Build a client for the given lookup endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Service`] if the HTTP client cannot be
    /// constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CatalogError::Service(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl CatalogSource for RemoteCatalog {
    async fn lookup(&self, name: &str) -> Result<Vec<CatalogRecord>, CatalogError> {
        debug!(object = name, "querying catalog service");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("name", name)])
            .send()
            .await
            .map_err(|e| CatalogError::Service(format!("lookup request failed: {e}")))?;

        let response = response
            .error_for_status()
            .map_err(|e| CatalogError::Service(format!("lookup returned error status: {e}")))?;

        let records: Vec<CatalogRecord> = response
            .json()
            .await
            .map_err(|e| CatalogError::Service(format!("invalid lookup response body: {e}")))?;

        debug!(object = name, matches = records.len(), "catalog response");
        Ok(records)
    }
}
