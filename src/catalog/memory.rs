//! In-memory catalog backend for unit testing and local development.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;

use super::{CatalogError, CatalogSource};
use crate::models::CatalogRecord;

/// Catalog backed by a plain map of name to match list.
///
/// Unknown names resolve to an empty match list, the same shape a remote
/// catalog returns for an object it does not know.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    entries: HashMap<String, Vec<CatalogRecord>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one match for a name, keeping any existing matches.
    pub fn insert(&mut self, record: CatalogRecord) {
        self.entries
            .entry(record.name.clone())
            .or_default()
            .push(record);
    }

    /// Register a match list under a lookup key that may differ from the
    /// records' own names (aliases, multi-match responses).
    pub fn insert_matches(&mut self, name: impl Into<String>, records: Vec<CatalogRecord>) {
        self.entries.insert(name.into(), records);
    }

    /// Build a catalog from a JSON snapshot: a flat array of records,
    /// grouped by name (repeated names become multi-match entries).
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<CatalogRecord> =
            serde_json::from_str(json).context("invalid catalog snapshot JSON")?;
        let mut catalog = Self::new();
        for record in records {
            catalog.insert(record);
        }
        Ok(catalog)
    }

    /// Load a JSON snapshot from disk.
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog snapshot {}", path.display()))?;
        Self::from_json_str(&json)
    }
}

#[async_trait]
impl CatalogSource for MemoryCatalog {
    async fn lookup(&self, name: &str) -> Result<Vec<CatalogRecord>, CatalogError> {
        Ok(self.entries.get(name).cloned().unwrap_or_default())
    }
}
